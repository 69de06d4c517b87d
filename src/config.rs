//! Configuration for the `sufx` command-line tool.
//!
//! Stored as JSON in the platform config directory; a missing file means
//! defaults. Command-line flags override individual fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sufx";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Terminal byte appended to byte inputs (must not occur in the input)
    #[serde(default = "default_sentinel_byte")]
    pub sentinel_byte: u8,

    /// Inputs larger than this are refused before construction (bytes)
    #[serde(default = "default_max_input_size")]
    pub max_input_size: u64,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Show a progress spinner for inputs at least this large (bytes)
    #[serde(default = "default_progress_threshold")]
    pub progress_threshold: u64,
}

fn default_sentinel_byte() -> u8 {
    0x00
}

fn default_max_input_size() -> u64 {
    64 * 1024 * 1024 // 64MB
}

fn default_color() -> bool {
    true
}

fn default_progress_threshold() -> u64 {
    1024 * 1024 // 1MB
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sentinel_byte: default_sentinel_byte(),
            max_input_size: default_max_input_size(),
            color: default_color(),
            progress_threshold: default_progress_threshold(),
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(path, content)
            .context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file, if the platform has a config directory
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME).join(CONFIG_FILE))
}
