//! # Error Types
//!
//! Domain-specific error types for furnish-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  furnish-core errors (this file)                                       │
//! │  ├── CoreError        - Shopping list rule violations                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  furnish-cli errors (separate crate)                                   │
//! │  └── CliError         - I/O and configuration failures                 │
//! │                                                                         │
//! │  Flow: CoreError / ValidationError → printed by the command loop       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text is exactly what the user sees at the prompt
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Shopping list errors.
///
/// None of these are fatal: the command loop prints them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A removal was attempted while the list holds nothing.
    #[error("Shop List is empty")]
    EmptyList,

    /// The label to remove is not in the list.
    ///
    /// ## User Workflow
    /// ```text
    /// R  ──►  Retro_Sofa
    ///              │
    ///              ▼
    /// NotFound("Retro_Sofa")
    ///              │
    ///              ▼
    /// "There's no Retro_Sofa in shop list"
    /// ```
    #[error("There's no {0} in shop list")]
    NotFound(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while parsing what the user typed, before any list rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Add code is not one of RC, MC, RT, MT.
    #[error("Unknown product code '{value}', expected one of RC, MC, RT, MT")]
    UnknownSelector { value: String },

    /// Top-level command is not one of A, R, S.
    #[error("I'm sorry, I don't understand")]
    UnknownCommand { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
