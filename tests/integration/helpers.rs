//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Write a config file with a fast clock into a fresh temp directory.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn fast_config(extra: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("config.toml");
    let content = format!("[clock]\ntick_ms = 1\n{}", extra);
    fs::write(&path, content).expect("write config");
    (dir, path)
}

/// The tapedeck binary, pointed at `config`, with a generous timeout.
pub fn tapedeck(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tapedeck").expect("binary built");
    cmd.arg("--config")
        .arg(config)
        .env_remove("TAPEDECK_LOG")
        .timeout(std::time::Duration::from_secs(20));
    cmd
}
