//! Errors raised by tapedeck outside the player loops.
//!
//! Rejected commands are not errors; they are reported through
//! [`InputResult::Rejected`](crate::player::InputResult::Rejected).

use std::path::PathBuf;

/// Result alias for tapedeck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors that can occur while setting up or driving the tape deck.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("Tape length must be an integer, got '{input}'")]
    InvalidLength { input: String },

    #[error("Tape length must be non-zero")]
    EmptyTape,

    #[error("No configuration directory available on this platform")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
