//! Library-level tests of the clock and input loops running together

use std::io::Cursor;
use std::time::Duration;

use tapedeck::player::{Clock, InputEnd, InputLoop, Mode, PlaybackResult, PlayerState};

#[test]
fn clock_outlives_quit_input() {
    let state = PlayerState::new(5).unwrap();
    let clock = Clock::new(Duration::from_millis(1));

    let (result, summary) = std::thread::scope(|s| {
        let clock_thread = s.spawn(|| clock.run(&state, &mut Vec::new()).unwrap());

        let mut reader = Cursor::new(b"p\nk\n".to_vec());
        let summary = InputLoop::new(false)
            .run(&state, &mut reader, &mut Vec::new())
            .unwrap();

        (clock_thread.join().unwrap(), summary)
    });

    assert_eq!(summary.end, InputEnd::Quit);
    assert!(matches!(result, PlaybackResult::Finished { .. }));
    let snap = state.snapshot();
    assert!(snap.finished);
    assert_eq!(snap.position, 5);
    assert_eq!(snap.mode, Mode::Playing);
}

#[test]
fn operator_commands_steer_the_tape_to_the_end() {
    let state = PlayerState::new(40).unwrap();
    let clock = Clock::new(Duration::from_millis(1));

    let output = std::thread::scope(|s| {
        let clock_thread = s.spawn(|| {
            let mut out = Vec::new();
            clock.run(&state, &mut out).unwrap();
            out
        });

        let mut reader = Cursor::new(b"f\n".to_vec());
        InputLoop::new(false)
            .run(&state, &mut reader, &mut Vec::new())
            .unwrap();

        clock_thread.join().unwrap()
    });

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Fast Forwarding:"));
    assert!(text.ends_with("finished playing :-)\n"));
    assert_eq!(state.snapshot().position, 40);
}
