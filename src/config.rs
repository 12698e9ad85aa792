//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delay before the simulated fetch fills the form
pub const DEFAULT_LOAD_DELAY_MS: u64 = 2_000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Delay in milliseconds before prefill data is loaded
    pub load_delay_ms: Option<u64>,
    /// Load prefill data after startup
    pub prefill: Option<bool>,
    /// Seed field defaults from the sample data instead of loading it later
    pub use_initial_data: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formwire", "formwire")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms.unwrap_or(DEFAULT_LOAD_DELAY_MS))
    }

    pub fn prefill(&self) -> bool {
        self.prefill.unwrap_or(true)
    }

    pub fn use_initial_data(&self) -> bool {
        self.use_initial_data.unwrap_or(false)
    }
}
