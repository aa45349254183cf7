//! # Furnish Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    furnish_cli::run().context("furnish session failed")
}
