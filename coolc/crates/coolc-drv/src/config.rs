//! Configuration module for the coolc-lex driver.
//!
//! Settings come from a TOML file. Command-line flags override them.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use coolc_util::ColorConfig;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DriverError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "coolc.toml";

/// Token output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `#<line> <LABEL>` line per token.
    #[default]
    Text,
    /// A JSON array of token records.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Token output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Diagnostic coloring.
    #[serde(default)]
    pub color: ColorConfig,

    /// Print a summary after the scan.
    #[serde(default)]
    pub stats: bool,

    /// Debug-level logging.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory (`<config_dir>/coolc/coolc.toml`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("coolc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
