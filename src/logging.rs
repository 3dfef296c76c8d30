//! Tracing subscriber setup.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the given
//! default level. Output goes to stderr as human-readable text or one JSON
//! object per line, selected by `LOG_FORMAT`.

use std::str::FromStr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", other),
        }
    }
}

impl LogFormat {
    /// Reads `LOG_FORMAT`, defaulting to [`LogFormat::Text`] when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable holds anything but `text` or `json`.
    pub fn from_env() -> Result<Self> {
        match std::env::var("LOG_FORMAT") {
            Ok(value) => value.parse(),
            Err(_) => Ok(LogFormat::default()),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if `default_level` is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init(default_level: &str, format: LogFormat) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) => EnvFilter::try_new(directives).context("Invalid RUST_LOG")?,
        Err(_) => EnvFilter::try_new(default_level).context("Invalid default log level")?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
