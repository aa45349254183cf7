//! # Session State
//!
//! Everything a command may read or mutate, owned in one place and passed
//! explicitly to each command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SessionState                                                           │
//! │  ├── list              ShoppingList   (mutated by add / remove)         │
//! │  └── strict_selectors  bool           (from CliConfig)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use furnish_core::ShoppingList;

use crate::config::CliConfig;

/// Per-session state.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub list: ShoppingList,
    pub strict_selectors: bool,
}

impl SessionState {
    /// Creates state with an empty list.
    pub fn new(config: &CliConfig) -> Self {
        SessionState {
            list: ShoppingList::new(),
            strict_selectors: config.strict_selectors,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&CliConfig::default())
    }
}
