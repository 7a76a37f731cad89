//! Status block and operator notices.
//!
//! Each text block is assembled into one string and written with a single
//! call so output from the clock and input threads does not interleave
//! mid-block.

use std::io::Write;

use crate::error::Result;
use crate::player::render::progress::{build_progress_bar, format_duration};
use crate::player::state::Mode;

/// Command menu shown before each read.
pub const MENU: &str = "p: PLAY | s: STOP | r: REWIND | f: FASTFORWARD | k: KILL";

/// Build the per-tick status block.
///
/// ```text
/// Playing:
/// 00:42 | ====>..... | 01:30
/// ```
pub fn format_status(mode: Mode, position: u64, length: u64) -> String {
    format!(
        "{}:\n{} | {} | {}\n\n",
        mode.display_name(),
        format_duration(position),
        build_progress_bar(position, length, mode),
        format_duration(length)
    )
}

/// Render the status block for one tick.
///
/// # Arguments
/// * `out` - Writer to render to
/// * `mode` - Mode applied on this tick
/// * `position` - Position after the tick
/// * `length` - Total tape length
pub fn render_status<W: Write>(out: &mut W, mode: Mode, position: u64, length: u64) -> Result<()> {
    out.write_all(format_status(mode, position, length).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn render_menu<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "\n{}\n", MENU)?;
    out.flush()?;
    Ok(())
}

pub fn render_rejected<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(b"\ninvalid command\n\n")?;
    out.flush()?;
    Ok(())
}

pub fn render_killed<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(b"KILLED :-)\n")?;
    out.flush()?;
    Ok(())
}

pub fn render_finished<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(b"finished playing :-)\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_block_layout() {
        assert_eq!(
            format_status(Mode::Playing, 42, 90),
            "Playing:\n00:42 | ===>...... | 01:30\n\n"
        );
    }

    #[test]
    fn status_block_while_rewinding() {
        let block = format_status(Mode::Rewinding, 60, 120);
        assert!(block.starts_with("Rewinding:\n"));
        assert!(block.contains("01:00 | ====<..... | 02:00"));
    }

    #[test]
    fn render_status_writes_one_block() {
        let mut out = Vec::new();
        render_status(&mut out, Mode::FastForwarding, 10, 10).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Fast Forwarding:\n00:10 | =========> | 00:10\n\n");
    }

    #[test]
    fn notices_have_expected_text() {
        let mut out = Vec::new();
        render_menu(&mut out).unwrap();
        render_rejected(&mut out).unwrap();
        render_killed(&mut out).unwrap();
        render_finished(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains(MENU));
        assert_eq!(text.matches("invalid command").count(), 1);
        assert!(text.contains("KILLED :-)"));
        assert!(text.ends_with("finished playing :-)\n"));
    }
}
