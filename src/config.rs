//! Configuration file handling.
//!
//! Settings live in `<config_dir>/tapedeck/config.toml`. Every key is
//! optional; a missing file or missing keys fall back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{DeckError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clock: ClockConfig,
    pub display: DisplayConfig,
}

/// Clock settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Length of one tick in milliseconds
    pub tick_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Print the command menu before each read
    pub show_menu: bool,
    /// Print the status block on ticks where the deck is stopped
    pub show_when_stopped: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_menu: true,
            show_when_stopped: false,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(DeckError::NoConfigDir)?;
        Ok(dir.join("tapedeck").join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(DeckError::NoConfigDir) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DeckError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| DeckError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.clock.tick_ms)
    }
}
