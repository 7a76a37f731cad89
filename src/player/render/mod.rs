//! Rendering components for the tape deck.
//!
//! Pure text formatting for the per-tick status block (mode, elapsed time,
//! progress bar, total length) and the operator notices.

mod progress;
mod status;

pub use progress::{build_progress_bar, format_duration, PROGRESS_BAR_WIDTH};
pub use status::{
    format_status, render_finished, render_killed, render_menu, render_rejected, render_status,
    MENU,
};
