//! Tape deck player module
//!
//! Simulates a magnetic tape player whose position advances once per
//! clock tick at a speed set by the current mode, while the operator
//! changes mode concurrently.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: `PlayerState` (lock-guarded mode/position) and shared types
//! - `transition`: mode transition table and per-mode speed
//! - `clock`: the tick loop that advances the tape
//! - `input/`: command decoding and the operator input loop
//! - `render/`: status block, progress bar and notices
//! - `session`: wiring of the clock and input threads
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tapedeck::player::{play_session, Clock, InputLoop, PlaybackResult, PlayerState};
//!
//! let state = Arc::new(PlayerState::new(90).unwrap());
//! let clock = Clock::new(Duration::from_secs(1));
//! match play_session(state, clock, InputLoop::default()).unwrap() {
//!     PlaybackResult::Finished { ticks } => println!("Done after {} ticks", ticks),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

mod clock;
pub mod input;
pub mod render;
mod session;
pub mod state;
pub mod transition;

pub use clock::Clock;
pub use input::{handle_line, InputEnd, InputLoop, InputSummary};
pub use session::play_session;
pub use state::{Advance, Command, InputResult, Mode, PlaybackResult, PlayerState, Snapshot};
pub use transition::{speed, transition};
