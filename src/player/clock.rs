//! Clock loop: drives simulated time forward one tick at a time.

use std::io::Write;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::player::render::{render_finished, render_status};
use crate::player::state::{Mode, PlaybackResult, PlayerState};

/// Advances the shared [`PlayerState`] once per tick until the tape ends.
#[derive(Debug, Clone)]
pub struct Clock {
    tick: Duration,
    show_when_stopped: bool,
}

impl Clock {
    pub fn new(tick: Duration) -> Self {
        Self {
            tick,
            show_when_stopped: false,
        }
    }

    /// Also emit the status block on ticks where the deck is stopped.
    pub fn show_when_stopped(mut self, show: bool) -> Self {
        self.show_when_stopped = show;
        self
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Run until the tape reaches its end.
    ///
    /// Sleeps outside the lock, then advances the deck once. Every tick in a
    /// moving mode writes a status block to `out`. Returns
    /// [`PlaybackResult::Finished`] after writing the completion notice.
    ///
    /// While the deck is stopped, or rewinding at position 0, this never
    /// returns on its own: ending depends on the operator selecting a
    /// forward mode.
    pub fn run<W: Write>(&self, state: &PlayerState, out: &mut W) -> Result<PlaybackResult> {
        let length = state.length();
        let mut ticks: u64 = 0;

        info!(length, tick_ms = self.tick.as_millis() as u64, "clock started");

        while !state.snapshot().finished {
            thread::sleep(self.tick);

            let step = state.advance();
            ticks += 1;
            debug!(ticks, mode = ?step.mode, position = step.position, "tick");

            if step.mode != Mode::Stopped || self.show_when_stopped {
                render_status(out, step.mode, step.position, length)?;
            }

            if step.just_finished {
                break;
            }
        }

        render_finished(out)?;
        info!(ticks, "tape finished");
        Ok(PlaybackResult::Finished { ticks })
    }
}
