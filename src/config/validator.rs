//! Configuration validator for Privilege-Reducer
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{Config, ConfigError, LoggingConfig, TargetConfig};
use super::ConfigResult;

/// Log levels accepted by the logging set-up
pub const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> ConfigResult<()> {
        Self::validate_target(&config.target)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    /// Validates target configuration
    fn validate_target(target: &TargetConfig) -> ConfigResult<()> {
        // PID 0 is the idle process, which has no token to adjust
        if target.pid == Some(0) {
            return Err(ConfigError::Invalid(
                "Target pid cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Validates logging configuration
    fn validate_logging(logging: &LoggingConfig) -> ConfigResult<()> {
        if !VALID_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, VALID_LOG_LEVELS
            )));
        }

        if let Some(file) = &logging.file {
            if file.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Log file path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Validates a configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    ConfigValidator::validate(config)
}
