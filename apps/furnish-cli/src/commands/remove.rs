//! # Remove Command

use tracing::debug;

use furnish_core::CoreResult;

use crate::state::SessionState;

/// Erases `label` from the list.
///
/// ## Behavior
/// - Empty list: `EmptyList`
/// - Label not present (exact, case-sensitive match): `NotFound`
///
/// The list is untouched on every error path.
pub fn remove_from_list(state: &mut SessionState, label: &str) -> CoreResult<()> {
    debug!(label = %label, "remove command");
    state.list.remove(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use furnish_core::CoreError;

    fn state_with(labels: &[&str]) -> SessionState {
        let mut state = SessionState::default();
        for label in labels {
            state.list.insert(*label);
        }
        state
    }

    #[test]
    fn test_remove_present_label() {
        let mut state = state_with(&["Retro_Chair", "Modern_Table"]);

        remove_from_list(&mut state, "Retro_Chair").unwrap();

        assert_eq!(state.list.iter().collect::<Vec<_>>(), vec!["Modern_Table"]);
    }

    #[test]
    fn test_remove_from_empty_list() {
        let mut state = SessionState::default();

        assert_eq!(
            remove_from_list(&mut state, "Retro_Chair"),
            Err(CoreError::EmptyList)
        );
    }

    #[test]
    fn test_remove_from_empty_list_with_long_label() {
        let mut state = SessionState::default();
        let long = "X".repeat(500);

        assert_eq!(remove_from_list(&mut state, &long), Err(CoreError::EmptyList));
    }

    #[test]
    fn test_remove_absent_label() {
        let mut state = state_with(&["Modern_Chair"]);

        assert_eq!(
            remove_from_list(&mut state, "Retro_Table"),
            Err(CoreError::NotFound("Retro_Table".to_string()))
        );
        assert_eq!(state.list.len(), 1);
    }

    #[test]
    fn test_remove_absent_long_label_is_not_found() {
        let mut state = state_with(&["Retro_Chair"]);
        let long = "X".repeat(65);

        assert_eq!(
            remove_from_list(&mut state, &long),
            Err(CoreError::NotFound(long.clone()))
        );
        assert!(state.list.contains("Retro_Chair"));
    }
}
