//! Progress bar and time formatting for the status block.

use crate::player::state::Mode;

/// Width of the progress bar in characters.
pub const PROGRESS_BAR_WIDTH: usize = 10;

/// Format a tape offset (in seconds) as `MM:SS`.
///
/// # Arguments
/// * `seconds` - Offset in seconds
///
/// # Returns
/// A string in MM:SS format; minutes are not wrapped into hours
pub fn format_duration(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the fixed-width progress bar.
///
/// Traversed cells are `=`, the head is `>` (or `<` while rewinding) and
/// the rest is `.`. The head sits on the last traversed cell, or on the
/// first cell before a full cell has been covered.
///
/// # Arguments
/// * `position` - Current tape position
/// * `length` - Total tape length
/// * `mode` - Current mode (selects the head direction)
pub fn build_progress_bar(position: u64, length: u64, mode: Mode) -> String {
    let filled = if length == 0 {
        PROGRESS_BAR_WIDTH
    } else {
        let ratio = position.min(length) as u128 * PROGRESS_BAR_WIDTH as u128 / length as u128;
        ratio as usize
    };

    let head = if mode == Mode::Rewinding { '<' } else { '>' };
    let traversed = filled.saturating_sub(1);

    let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH);
    bar.extend(std::iter::repeat('=').take(traversed));
    bar.push(head);
    bar.extend(std::iter::repeat('.').take(PROGRESS_BAR_WIDTH - traversed - 1));
    bar
}
