//! # furnish-cli: Interactive Shopping List
//!
//! Console front end over `furnish-core`.
//!
//! ## Module Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ────► calls run(), reports fatal errors                        │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, wires stdin/stdout to a Session         │
//! │                                                                         │
//! │  repl.rs ────► the command loop state machine                           │
//! │                                                                         │
//! │  commands/ ──► add, remove, show                                        │
//! │                                                                         │
//! │  state.rs ───► SessionState (owns the ShoppingList)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod repl;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{CliConfig, ConfigError};
pub use error::{CliError, CliResult};
pub use repl::{LoopState, Session};
pub use state::SessionState;

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • FURNISH_* environment variables, defaults otherwise              │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr            │
/// │     • RUST_LOG wins over FURNISH_LOG                                    │
/// │                                                                         │
/// │  3. Run the Command Loop ─────────────────────────────────────────────► │
/// │     • Empty list, locked stdin/stdout                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> CliResult<()> {
    let config = CliConfig::load()?;
    init_tracing(&config);

    info!(?config, "Starting Furnish");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(SessionState::new(&config), stdin.lock(), stdout.lock());
    let list = session.run()?;

    info!(items = list.len(), "Furnish finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and transition
/// - `FURNISH_LOG=info` - Used only when `RUST_LOG` is unset
/// - Default: WARN level (ignored Add codes)
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
