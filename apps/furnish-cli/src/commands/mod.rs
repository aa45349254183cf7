//! # Commands Module
//!
//! The three top-level commands and their handlers.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (Command enum, exports)
//! ├── add.rs      ◄─── A: selector → factory → product → list
//! ├── remove.rs   ◄─── R: erase a label
//! └── show.rs     ◄─── S: render the list
//! ```
//!
//! Handlers are plain functions over [`SessionState`](crate::state::SessionState):
//! they return values and errors, and the command loop decides what to print.

pub mod add;
pub mod remove;
pub mod show;

use std::fmt;
use std::str::FromStr;

use furnish_core::ValidationError;

pub use add::{add_to_list, AddOutcome};
pub use remove::remove_from_list;
pub use show::show_list;

/// A top-level command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
}

impl Command {
    /// Maps a single character, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Command::Add),
            'R' => Some(Command::Remove),
            'S' => Some(Command::Show),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = ValidationError;

    /// Only the first non-whitespace character is significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        value
            .chars()
            .next()
            .and_then(Command::from_char)
            .ok_or_else(|| ValidationError::UnknownCommand {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Show => "show",
        };
        f.write_str(name)
    }
}
