//! Errors raised while deriving the short URL configuration.
//!
//! Every error names the [`Setting`] that failed so the process bootstrap
//! can report exactly which environment variable needs fixing.

use std::fmt;

use crate::env::{SHORT_CHARS, SHORT_LENGTH, SHORT_REWRITES};

/// One of the three settings read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Characters,
    Length,
    Rewrites,
}

impl Setting {
    /// Environment variable backing this setting.
    pub fn env_key(self) -> &'static str {
        match self {
            Setting::Characters => SHORT_CHARS,
            Setting::Length => SHORT_LENGTH,
            Setting::Rewrites => SHORT_REWRITES,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_key())
    }
}

/// Failure to derive a [`ResolvedConfig`](crate::config::ResolvedConfig).
///
/// Both variants are fatal to startup: the service must not run with a
/// partially resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The raw value could not be decoded at all (invalid JSON, not a number).
    #[error("{setting} is malformed: {reason}")]
    MalformedInput { setting: Setting, reason: String },

    /// The value decoded but does not satisfy its structural or numeric rules.
    #[error("{setting} violates its schema: {reason}")]
    SchemaViolation { setting: Setting, reason: String },
}

impl ConfigError {
    pub fn malformed(setting: Setting, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            setting,
            reason: reason.into(),
        }
    }

    pub fn schema(setting: Setting, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            setting,
            reason: reason.into(),
        }
    }

    /// The setting whose value was rejected.
    pub fn setting(&self) -> Setting {
        match self {
            ConfigError::MalformedInput { setting, .. }
            | ConfigError::SchemaViolation { setting, .. } => *setting,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, ConfigError::MalformedInput { .. })
    }

    pub fn is_schema_violation(&self) -> bool {
        matches!(self, ConfigError::SchemaViolation { .. })
    }
}
