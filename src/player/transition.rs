//! Mode transitions and per-mode tape speed.

use crate::player::state::{Command, Mode};

/// Tape units moved per tick while playing.
pub const PLAY_SPEED: i64 = 1;
/// Tape units moved per tick while fast forwarding.
pub const FAST_FORWARD_SPEED: i64 = 10;
/// Tape units moved per tick while rewinding.
pub const REWIND_SPEED: i64 = -10;

/// Next mode for `command` issued in `current`.
///
/// Every mode accepts every command, including self-transitions
/// (Playing + Play stays Playing), so the result depends on the command alone.
pub fn transition(current: Mode, command: Command) -> Mode {
    match (current, command) {
        (_, Command::Play) => Mode::Playing,
        (_, Command::Stop) => Mode::Stopped,
        (_, Command::FastForward) => Mode::FastForwarding,
        (_, Command::Rewind) => Mode::Rewinding,
    }
}

/// Signed position delta applied per tick in `mode`.
pub fn speed(mode: Mode) -> i64 {
    match mode {
        Mode::Playing => PLAY_SPEED,
        Mode::Stopped => 0,
        Mode::FastForwarding => FAST_FORWARD_SPEED,
        Mode::Rewinding => REWIND_SPEED,
    }
}
