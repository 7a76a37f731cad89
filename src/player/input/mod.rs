//! Input handling for the tape deck.
//!
//! Reads operator commands one line at a time, decodes them, and applies
//! the resulting mode to the shared player state.

mod command;

pub use command::{parse_command, Token};

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::player::render::{render_killed, render_menu, render_rejected};
use crate::player::state::{InputResult, PlayerState};
use crate::player::transition::transition;

/// Handle one line of operator input.
///
/// Only this thread writes the mode, so the read-then-write of the mode is
/// not raced by the clock, which only moves the position.
pub fn handle_line(line: &str, state: &PlayerState) -> InputResult {
    match parse_command(line) {
        Some(Token::Quit) => InputResult::Quit,
        Some(Token::Command(command)) => {
            let from = state.snapshot().mode;
            let to = transition(from, command);
            state.set_mode(to);
            debug!(?command, %from, %to, "mode transition");
            InputResult::Applied { from, to }
        }
        None => {
            warn!(input = line.trim_end(), "invalid command");
            InputResult::Rejected
        }
    }
}

/// Why the input loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEnd {
    /// The operator entered the quit command
    Quit,
    /// The input source was closed
    EndOfInput,
}

/// Counters reported when the input loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSummary {
    pub applied: usize,
    pub rejected: usize,
    pub end: InputEnd,
}

/// Reads commands and applies them until quit or end of input.
///
/// Stopping this loop does not stop the clock.
#[derive(Debug, Clone)]
pub struct InputLoop {
    show_menu: bool,
}

impl Default for InputLoop {
    fn default() -> Self {
        Self { show_menu: true }
    }
}

impl InputLoop {
    pub fn new(show_menu: bool) -> Self {
        Self { show_menu }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        state: &PlayerState,
        reader: &mut R,
        out: &mut W,
    ) -> Result<InputSummary> {
        let mut applied = 0;
        let mut rejected = 0;
        let mut line = String::new();

        loop {
            if self.show_menu {
                render_menu(out)?;
            }

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                info!("input closed");
                return Ok(InputSummary {
                    applied,
                    rejected,
                    end: InputEnd::EndOfInput,
                });
            }

            match handle_line(&line, state) {
                InputResult::Applied { .. } => applied += 1,
                InputResult::Rejected => {
                    rejected += 1;
                    render_rejected(out)?;
                }
                InputResult::Quit => {
                    render_killed(out)?;
                    info!("input stopped by operator");
                    return Ok(InputSummary {
                        applied,
                        rejected,
                        end: InputEnd::Quit,
                    });
                }
            }
        }
    }
}
