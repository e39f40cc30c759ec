//! Configuration module for Privilege-Reducer
//!
//! Provides configuration loading, validation, and default settings.
//! Which privileges get removed is fixed by the binary and is not part
//! of the configuration.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults, CONFIG_FILE_NAME};
pub use loader::{load_config, ConfigLoader};
pub use validator::{validate_config, ConfigValidator, VALID_LOG_LEVELS};

// Re-export the main configuration structures
pub use loader::{Config, ConsoleConfig, LoggingConfig, TargetConfig};

// Configuration-related error type
pub use loader::ConfigError;

// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
