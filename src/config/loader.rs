//! Configuration loader for Privilege-Reducer
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::{default_config, CONFIG_FILE_NAME};
use super::ConfigResult;
use crate::core::types::{ProcessId, ProcessRef};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target")]
    pub target: TargetConfig,

    #[serde(default = "default_console")]
    pub console: ConsoleConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Which process to reduce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Absent means the running process
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<ProcessId>,
}

impl TargetConfig {
    pub fn process(&self) -> ProcessRef {
        ProcessRef::from_pid(self.pid)
    }
}

/// Console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default = "default_pause_on_exit")]
    pub pause_on_exit: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> ConfigResult<Config> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults only when the file is missing
    pub fn load_or_default(&self) -> ConfigResult<Config> {
        match self.load() {
            Err(ConfigError::FileNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> ConfigResult<Config> {
    ConfigLoader::new(CONFIG_FILE_NAME).load_or_default()
}

// Default functions for serde
fn default_target() -> TargetConfig {
    TargetConfig {
        pid: default_config().target.pid,
    }
}

fn default_console() -> ConsoleConfig {
    ConsoleConfig {
        pause_on_exit: default_pause_on_exit(),
    }
}

fn default_logging() -> LoggingConfig {
    let defaults = default_config();
    LoggingConfig {
        level: defaults.logging.level,
        file: defaults.logging.file,
    }
}

// Individual field defaults
fn default_pause_on_exit() -> bool {
    default_config().console.pause_on_exit
}

fn default_log_level() -> String {
    default_config().logging.level
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target: default_target(),
            console: default_console(),
            logging: default_logging(),
        }
    }
}
