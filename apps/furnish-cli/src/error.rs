//! # CLI Error Type
//!
//! Errors that end a session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Furnish                                │
//! │                                                                         │
//! │  CoreError / ValidationError                                            │
//! │     EmptyList, NotFound, UnknownSelector (strict)                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  printed by the command loop ──► loop continues                         │
//! │                                                                         │
//! │  CliError                                                               │
//! │     Io (stdin/stdout broke), Config (bad FURNISH_* value)               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  returned from run() ──► main reports it, non-zero exit                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Fatal session errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Environment configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
