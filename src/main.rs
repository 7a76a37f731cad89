use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tapedeck::cli::{prompt_length, Cli};
use tapedeck::player::{play_session, Clock, InputLoop};
use tapedeck::{logging, Config, PlaybackResult, PlayerState};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let settings = cli.settings(&config);

    let state = match cli.length {
        Some(length) => PlayerState::from_signed(length)?,
        None => PlayerState::new(prompt_length(&mut io::stdin().lock(), &mut io::stdout())?)?,
    };
    info!(length = state.length(), "tape loaded");
    let state = Arc::new(state);

    let clock = Clock::new(settings.tick).show_when_stopped(settings.show_when_stopped);
    let input = InputLoop::new(settings.show_menu);

    match play_session(state, clock, input)? {
        PlaybackResult::Finished { ticks } => info!(ticks, "session finished"),
        PlaybackResult::Interrupted => println!("\ninterrupted"),
    }

    // Returning ends the process, including an input thread blocked on stdin
    Ok(())
}
