//! Process-level wiring of the clock and input threads.

use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use tracing::{error, info, warn};

use crate::error::Result;
use crate::player::clock::Clock;
use crate::player::input::InputLoop;
use crate::player::state::{PlaybackResult, PlayerState};

/// Run a session on stdin/stdout until the tape finishes or Ctrl-C.
///
/// The clock and input run on their own threads and share only `state`.
/// The clock reports its result over a channel; quitting input ends only
/// the input thread. When this returns, the caller is expected to exit the
/// process, which also ends an input thread still blocked on stdin.
pub fn play_session(
    state: Arc<PlayerState>,
    clock: Clock,
    input: InputLoop,
) -> Result<PlaybackResult> {
    let (tx, rx) = mpsc::channel::<Result<PlaybackResult>>();

    let interrupt_tx = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(Ok(PlaybackResult::Interrupted));
    }) {
        warn!("failed to install Ctrl-C handler: {}", e);
    }

    let clock_state = Arc::clone(&state);
    thread::Builder::new()
        .name("clock".to_string())
        .spawn(move || {
            let result = clock.run(&clock_state, &mut io::stdout());
            // Ignore send errors (receiver gone means the session already ended)
            let _ = tx.send(result);
        })?;

    let input_state = Arc::clone(&state);
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            let mut reader = io::stdin().lock();
            match input.run(&input_state, &mut reader, &mut io::stdout()) {
                Ok(summary) => info!(?summary, "input loop ended"),
                Err(e) => error!("input loop failed: {}", e),
            }
        })?;

    match rx.recv() {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(
            io::ErrorKind::Other,
            "clock thread exited without a result",
        )
        .into()),
    }
}
