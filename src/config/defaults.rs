//! Default configuration values for Privilege-Reducer

use serde::{Deserialize, Serialize};

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub target: TargetDefaults,
    pub console: ConsoleDefaults,
    pub logging: LoggingDefaults,
}

/// Default target process
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDefaults {
    pub pid: Option<u32>,
}

/// Default console behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleDefaults {
    pub pause_on_exit: bool,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
    pub file: Option<String>,
}

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "privilege-reducer.toml";

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        target: TargetDefaults { pid: None },
        console: ConsoleDefaults {
            pause_on_exit: true,
        },
        logging: LoggingDefaults {
            level: "warn".to_string(),
            file: None,
        },
    }
}
