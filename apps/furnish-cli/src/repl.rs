//! # Command Loop
//!
//! Line-oriented read-eval loop over A/R/S.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                   ┌──────────────────────┐                              │
//! │        ┌─────────►│  WaitingForCommand   │◄───────────┐                 │
//! │        │          └──────────┬───────────┘            │                 │
//! │        │         'A'         │ 'R'          'S'       │                 │
//! │        │      ┌──────────────┼──────────────┐         │                 │
//! │        │      ▼              ▼              ▼         │                 │
//! │     Adding ───┘          Removing        Showing ─────┘                 │
//! │                              │                                          │
//! │                              └──────► WaitingForCommand                 │
//! │                                                                         │
//! │  anything else / end of input ──► Terminated ──► final list printed    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Diagnostics from a command (empty list, unknown label, ...) are written to
//! the same output as the transcript and never end the loop. Only I/O
//! failures do.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use furnish_core::ShoppingList;

use crate::commands::{self, Command};
use crate::error::CliResult;
use crate::state::SessionState;

pub const COMMAND_PROMPT: &str = "Add/Remove/Show List? A/R/S";
pub const ADD_PROMPT: &str = "What do you want to add";
pub const ADDED_HEADER: &str = "This is your shopping list: ";
pub const FINAL_HEADER: &str = "Final shopping list: ";

/// Where the loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    WaitingForCommand,
    Adding,
    Removing,
    Showing,
    Terminated,
}

impl From<Command> for LoopState {
    fn from(command: Command) -> Self {
        match command {
            Command::Add => LoopState::Adding,
            Command::Remove => LoopState::Removing,
            Command::Show => LoopState::Showing,
        }
    }
}

/// One interactive session: state plus the input and output it talks to.
pub struct Session<R, W> {
    state: SessionState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: SessionState, input: R, output: W) -> Self {
        Session {
            state,
            input,
            output,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Runs until termination and returns the final list.
    pub fn run(&mut self) -> CliResult<&ShoppingList> {
        info!("session started");

        let mut state = LoopState::WaitingForCommand;
        while state != LoopState::Terminated {
            state = self.step(state)?;
        }

        writeln!(self.output, "{}", FINAL_HEADER)?;
        write!(self.output, "{}", self.state.list)?;
        self.output.flush()?;

        info!(items = self.state.list.len(), "session finished");
        Ok(&self.state.list)
    }

    /// Performs one transition.
    pub fn step(&mut self, state: LoopState) -> CliResult<LoopState> {
        let next = match state {
            LoopState::WaitingForCommand => self.wait_for_command()?,
            LoopState::Adding => self.adding()?,
            LoopState::Removing => self.removing()?,
            LoopState::Showing => self.showing()?,
            LoopState::Terminated => LoopState::Terminated,
        };
        debug!(?state, ?next, "transition");
        Ok(next)
    }

    fn wait_for_command(&mut self) -> CliResult<LoopState> {
        self.say(COMMAND_PROMPT)?;

        let Some(token) = self.read_token()? else {
            return Ok(LoopState::Terminated);
        };

        match token.parse::<Command>() {
            Ok(command) => {
                debug!(%command, "dispatching");
                Ok(command.into())
            }
            Err(err) => {
                debug!(input = %token, "unrecognized command");
                self.say(&err.to_string())?;
                Ok(LoopState::Terminated)
            }
        }
    }

    fn adding(&mut self) -> CliResult<LoopState> {
        self.say(ADD_PROMPT)?;

        let Some(code) = self.read_token()? else {
            return Ok(LoopState::Terminated);
        };

        if let Err(err) = commands::add_to_list(&mut self.state, &code) {
            self.say(&err.to_string())?;
        }

        self.say(ADDED_HEADER)?;
        self.print_list()?;
        Ok(LoopState::WaitingForCommand)
    }

    fn removing(&mut self) -> CliResult<LoopState> {
        let Some(label) = self.read_token()? else {
            return Ok(LoopState::Terminated);
        };

        if let Err(err) = commands::remove_from_list(&mut self.state, &label) {
            self.say(&err.to_string())?;
        }

        Ok(LoopState::WaitingForCommand)
    }

    fn showing(&mut self) -> CliResult<LoopState> {
        self.print_list()?;
        Ok(LoopState::WaitingForCommand)
    }

    fn print_list(&mut self) -> CliResult<()> {
        let rendered = commands::show_list(&self.state);
        write!(self.output, "{}", rendered)?;
        self.output.flush()?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads the first whitespace-delimited token, skipping blank lines.
    ///
    /// The rest of the line is discarded. `None` means end of input.
    fn read_token(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}
