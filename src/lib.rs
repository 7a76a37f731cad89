//! tapedeck - a simulated magnetic tape player.
//!
//! A clock thread advances the tape position once per tick at a speed set
//! by the current mode (play, stop, fast-forward, rewind) while an input
//! thread lets the operator change mode at any time. The two share a single
//! lock-guarded [`PlayerState`].

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod player;

pub use config::Config;
pub use error::{DeckError, Result};
pub use player::{Mode, PlaybackResult, PlayerState};
