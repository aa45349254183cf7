//! # Validation Module
//!
//! Input validation utilities for Furnish.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command loop (furnish-cli)                                   │
//! │  └── Tokenizing what the user typed                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Add codes (RC, MC, RT, MT)                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ShoppingList                                                 │
//! │  └── EmptyList / NotFound on remove                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Remove labels are not validated here: any token is looked up as typed and
//! the list itself reports whether it is there.
//!
//! ## Usage
//! ```rust
//! use furnish_core::validation::parse_selector;
//!
//! let selector = parse_selector("mt").unwrap();
//! assert_eq!(selector.label().as_str(), "Modern_Table");
//! ```

use crate::error::ValidationError;
use crate::types::Selector;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses an Add code.
///
/// ## Rules
/// - Case-insensitive
/// - Surrounding whitespace is ignored
/// - Anything other than RC, MC, RT, MT is `UnknownSelector`
pub fn parse_selector(input: &str) -> ValidationResult<Selector> {
    input.parse()
}
