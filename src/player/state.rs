//! Player state management
//!
//! Contains the lock-guarded `PlayerState` shared by the clock and input
//! threads, as well as the small value types passed between player modules.

use std::fmt;

use parking_lot::Mutex;

use crate::error::{DeckError, Result};
use crate::player::transition::speed;

/// Operating mode of the tape deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Playing,
    #[default]
    Stopped,
    FastForwarding,
    Rewinding,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Mode; 4] = [
        Mode::Playing,
        Mode::Stopped,
        Mode::FastForwarding,
        Mode::Rewinding,
    ];

    /// Name shown in the status block.
    ///
    /// A stopped deck keeps its position, so it is shown as paused.
    pub fn display_name(&self) -> &'static str {
        match self {
            Mode::Playing => "Playing",
            Mode::Stopped => "Paused",
            Mode::FastForwarding => "Fast Forwarding",
            Mode::Rewinding => "Rewinding",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Operator command that selects a new mode.
///
/// Quit is not a `Command`: it ends the input loop instead of transitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Play,
    Stop,
    FastForward,
    Rewind,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Play,
        Command::Stop,
        Command::FastForward,
        Command::Rewind,
    ];
}

/// Result of processing one line of operator input.
///
/// Returned by the input handler to signal control flow decisions
/// to the input loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// A command was applied; the mode went from `from` to `to`
    Applied { from: Mode, to: Mode },
    /// The line was not a recognized command; state is unchanged
    Rejected,
    /// Stop reading input
    Quit,
}

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The tape reached its end after `ticks` clock ticks
    Finished { ticks: u64 },
    /// The operator interrupted the process (Ctrl-C)
    Interrupted,
}

/// Consistent view of the whole player, taken under one lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: Mode,
    pub position: u64,
    pub length: u64,
    pub finished: bool,
}

/// Outcome of a single clock advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Mode whose speed was applied
    pub mode: Mode,
    /// Position after clamping
    pub position: u64,
    /// True only for the advance that first reached the end of the tape
    pub just_finished: bool,
}

#[derive(Debug)]
struct Deck {
    mode: Mode,
    position: u64,
    finished: bool,
}

/// Shared state of the tape deck.
///
/// All reads and writes of the mode and position go through one mutex,
/// so callers never observe a torn (mode, position) pair. The tape length
/// is fixed at construction and read without locking.
#[derive(Debug)]
pub struct PlayerState {
    length: u64,
    deck: Mutex<Deck>,
}

impl PlayerState {
    /// Create a stopped deck at the start of a tape of `length` units.
    pub fn new(length: u64) -> Result<Self> {
        Self::with_start(length, Mode::Stopped, 0)
    }

    /// Create a deck from a user-supplied length; negative values are
    /// taken as their absolute value.
    pub fn from_signed(length: i64) -> Result<Self> {
        Self::new(length.unsigned_abs())
    }

    /// Create a deck resumed at `position` in `mode`.
    ///
    /// The position is clamped to the tape. A deck resumed at the very end
    /// is already finished.
    pub fn with_start(length: u64, mode: Mode, position: u64) -> Result<Self> {
        if length == 0 {
            return Err(DeckError::EmptyTape);
        }
        let position = position.min(length);
        Ok(Self {
            length,
            deck: Mutex::new(Deck {
                mode,
                position,
                finished: position == length,
            }),
        })
    }

    /// Total tape length.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Read mode, position, length and finished flag atomically.
    pub fn snapshot(&self) -> Snapshot {
        let deck = self.deck.lock();
        Snapshot {
            mode: deck.mode,
            position: deck.position,
            length: self.length,
            finished: deck.finished,
        }
    }

    pub fn set_mode(&self, mode: Mode) {
        self.deck.lock().mode = mode;
    }

    /// Move the tape by one tick at the current mode's speed.
    ///
    /// The new position is clamped to `[0, length]`; overshoot in either
    /// direction is absorbed. The finished flag is set by the first advance
    /// that lands on `length` and never again.
    pub fn advance(&self) -> Advance {
        let mut deck = self.deck.lock();
        let mode = deck.mode;
        let target = deck.position as i128 + speed(mode) as i128;
        let position = target.clamp(0, self.length as i128) as u64;
        deck.position = position;

        let just_finished = !deck.finished && position == self.length;
        if just_finished {
            deck.finished = true;
        }

        Advance {
            mode,
            position,
            just_finished,
        }
    }
}
