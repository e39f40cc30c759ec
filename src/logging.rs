//! Tracing subscriber set-up for the binary

use crate::config::LoggingConfig;
use std::fs::OpenOptions;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Logging initialization error
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("Cannot open log file {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Build the event filter from the configured level alone
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    Ok(EnvFilter::try_new(config.level.to_lowercase())?)
}

/// Install the global subscriber.
///
/// Events go to stderr, or to `config.file` when set, so stdout only
/// carries the reduction report.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::File {
                    path: path.clone(),
                    source,
                })?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))
}
