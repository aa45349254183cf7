//! # Add Command
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "What do you want to add"  ──►  user types "mt"                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Parse selector (case-insensitive)                          │    │
//! │  │     - Unknown: ignored (or diagnostic when strict)             │    │
//! │  │  2. factory_for(family) ──► create_chair / create_table        │    │
//! │  │  3. product.add_to_list(&mut list)                             │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use furnish_core::validation::parse_selector;
use furnish_core::{order_selection, ProductLabel, ValidationError};

use crate::state::SessionState;

/// What an Add did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A product was ordered. `inserted` is false when the label was
    /// already on the list.
    Added { label: ProductLabel, inserted: bool },

    /// The code matched no product and nothing was created.
    Ignored { code: String },
}

/// Handles an Add code.
///
/// ## Returns
/// - `Ok(Added)` for RC, MC, RT, MT
/// - `Ok(Ignored)` for anything else
/// - `Err(UnknownSelector)` for anything else when `strict_selectors` is on
pub fn add_to_list(state: &mut SessionState, code: &str) -> Result<AddOutcome, ValidationError> {
    debug!(code = %code, "add command");

    let selector = match parse_selector(code) {
        Ok(selector) => selector,
        Err(err) if state.strict_selectors => return Err(err),
        Err(_) => {
            warn!(code = %code, "unknown product code ignored");
            return Ok(AddOutcome::Ignored {
                code: code.to_string(),
            });
        }
    };

    let was_present = state.list.contains(selector.label().as_str());
    let label = order_selection(selector, &mut state.list);
    debug!(%label, was_present, "product ordered");

    Ok(AddOutcome::Added {
        label,
        inserted: !was_present,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_known_codes() {
        let mut state = SessionState::default();

        let outcome = add_to_list(&mut state, "rc").unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Added {
                label: ProductLabel::RetroChair,
                inserted: true
            }
        );

        add_to_list(&mut state, "MT").unwrap();
        assert_eq!(
            state.list.iter().collect::<Vec<_>>(),
            vec!["Modern_Table", "Retro_Chair"]
        );
    }

    #[test]
    fn test_add_twice_reports_not_inserted() {
        let mut state = SessionState::default();

        add_to_list(&mut state, "RC").unwrap();
        let outcome = add_to_list(&mut state, "RC").unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Added {
                label: ProductLabel::RetroChair,
                inserted: false
            }
        );
        assert_eq!(state.list.len(), 1);
    }

    #[test]
    fn test_unknown_code_is_ignored_by_default() {
        let mut state = SessionState::default();

        let outcome = add_to_list(&mut state, "ZZ").unwrap();

        assert_eq!(
            outcome,
            AddOutcome::Ignored {
                code: "ZZ".to_string()
            }
        );
        assert!(state.list.is_empty());
    }

    #[test]
    fn test_unknown_code_errors_when_strict() {
        let mut state = SessionState::default();
        state.strict_selectors = true;

        let err = add_to_list(&mut state, "zz").unwrap_err();

        assert!(matches!(err, ValidationError::UnknownSelector { .. }));
        assert!(state.list.is_empty());
    }
}
