//! Command-line interface definitions.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::error::{DeckError, Result};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TAPEDECK_BUILD_DATE"),
    ")"
);

/// Simulated tape deck: play, stop, fast-forward and rewind a tape of a
/// given length while a clock advances it once per tick.
#[derive(Debug, Parser)]
#[command(name = "tapedeck", version = VERSION, about)]
pub struct Cli {
    /// Tape length in seconds (negative values are taken as positive).
    /// Prompted for on stdin when omitted.
    #[arg(short, long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Tick length in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Path to a config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not print the command menu before each read
    #[arg(long)]
    pub quiet_menu: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective settings after applying CLI overrides to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick: Duration,
    pub show_menu: bool,
    pub show_when_stopped: bool,
}

impl Cli {
    pub fn settings(&self, config: &Config) -> Settings {
        Settings {
            tick: self
                .tick_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.tick_interval()),
            show_menu: config.display.show_menu && !self.quiet_menu,
            show_when_stopped: config.display.show_when_stopped,
        }
    }
}

/// Parse a user-supplied tape length, taking the absolute value.
pub fn parse_length(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| DeckError::InvalidLength {
        input: trimmed.to_string(),
    })?;
    Ok(value.unsigned_abs())
}

/// Prompt for the tape length and read one line.
pub fn prompt_length<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<u64> {
    write!(out, "Enter the tape length: ")?;
    out.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    parse_length(&line)
}
