//! End-to-end tests driving the tapedeck binary

use predicates::prelude::*;

use super::helpers::{fast_config, tapedeck};

#[test]
fn fast_forward_finishes_short_tape() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .args(["--length", "3"])
        .write_stdin("f\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fast Forwarding:"))
        .stdout(predicate::str::contains("00:03 | =========> | 00:03"))
        .stdout(predicate::str::contains("finished playing :-)"));
}

#[test]
fn negative_length_is_coerced() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .args(["--length", "-4"])
        .write_stdin("p\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("00:04 | =========> | 00:04"));
}

#[test]
fn length_is_prompted_when_not_given() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .write_stdin("-2\np\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Enter the tape length: "))
        .stdout(predicate::str::contains("finished playing :-)"));
}

#[test]
fn malformed_length_fails_before_playback() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .write_stdin("abc\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tape length must be an integer"))
        .stdout(predicate::str::contains("PLAY").not());
}

#[test]
fn zero_length_fails() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .args(["--length", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-zero"));
}

#[test]
fn invalid_command_is_reported_and_ignored() {
    let (_dir, config) = fast_config("");

    let assert = tapedeck(&config)
        .args(["--length", "2"])
        .write_stdin("x\np\n")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert_eq!(stdout.matches("invalid command").count(), 1);
    assert!(stdout.contains("Playing:"));
}

#[test]
fn quit_stops_input_but_clock_runs_on() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .args(["--length", "5"])
        .write_stdin("p\nk\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("KILLED :-)"))
        .stdout(predicate::str::contains("Paused:").not())
        .stdout(predicate::str::contains("finished playing :-)"));
}

#[test]
fn menu_can_be_disabled_from_config() {
    let (_dir, config) = fast_config("[display]\nshow_menu = false\n");

    tapedeck(&config)
        .args(["--length", "2"])
        .write_stdin("p\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("k: KILL").not());
}

#[test]
fn menu_shown_by_default() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .args(["--length", "2"])
        .write_stdin("p\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "p: PLAY | s: STOP | r: REWIND | f: FASTFORWARD | k: KILL",
        ));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    tapedeck(&missing)
        .args(["--length", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn version_includes_package_version() {
    let (_dir, config) = fast_config("");

    tapedeck(&config)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
