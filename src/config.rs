//! Short URL configuration derived from environment variables.
//!
//! Configuration is derived once at startup and validated before the
//! shortening engine starts. Nothing is re-read afterwards.
//!
//! ## Variables
//!
//! ```bash
//! # Symbols used in generated IDs (JSON array of non-empty strings)
//! export SHORT_CHARS='["a","b","c","d","e","f","0","1","2","3"]'
//!
//! # Symbols per generated ID (positive integer)
//! export SHORT_LENGTH="8"
//!
//! # Rewrites applied to a URL before redirecting (JSON object)
//! export SHORT_REWRITES='{"http://old.example.com":"https://new.example.com"}'
//! ```
//!
//! All three are optional:
//!
//! - `SHORT_CHARS` - defaults to the built-in alphanumeric table
//!   ([`DEFAULT_CHARACTERS`](crate::settings::DEFAULT_CHARACTERS))
//! - `SHORT_LENGTH` - defaults to `round(ln(1e9) / ln(alphabet size))`, which
//!   is 5 for the built-in table
//! - `SHORT_REWRITES` - defaults to no rewrites
//!
//! A value that is set but invalid is fatal: there is no fallback to the
//! default once an override is present.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::env::{EnvSource, ProcessEnv, SHORT_CHARS, SHORT_LENGTH, SHORT_REWRITES};
use crate::error::ConfigError;
use crate::settings::characters::parse_characters;
use crate::settings::length::{default_length, parse_length};
use crate::settings::rewrites::parse_rewrites;
use crate::settings::{Alphabet, RewriteMap};

/// Resolved short URL configuration.
///
/// Immutable once derived; share it behind an `Arc` if several components
/// need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    characters: Alphabet,
    length: usize,
    rewrites: RewriteMap,
}

impl ResolvedConfig {
    /// Symbols used to build short IDs.
    pub fn characters(&self) -> &Alphabet {
        &self.characters
    }

    /// Number of symbols per generated short ID. Always positive.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Rewrite rules applied to a URL before redirecting.
    pub fn rewrites(&self) -> &RewriteMap {
        &self.rewrites
    }

    /// Number of distinct IDs the alphabet and length can express, counting
    /// every alphabet entry as a digit. Saturates at `u128::MAX`.
    pub fn id_space(&self) -> u128 {
        let base = self.characters.len() as u128;
        let exponent = u32::try_from(self.length).unwrap_or(u32::MAX);
        base.saturating_pow(exponent)
    }

    /// Logs a configuration summary.
    ///
    /// Duplicated alphabet symbols are reported as a warning since they make
    /// distinct IDs collide.
    pub fn print_summary(&self) {
        tracing::info!("Short URL configuration loaded:");
        tracing::info!(
            "  Alphabet: {} symbols ({} distinct)",
            self.characters.len(),
            self.characters.distinct_len()
        );
        tracing::info!("  ID length: {}", self.length);
        tracing::info!("  ID space: {}", self.id_space());
        tracing::info!("  Rewrites: {}", self.rewrites.len());

        for (from, to) in &self.rewrites {
            tracing::debug!(from = %from, to = %to, "Rewrite rule");
        }

        let duplicates = self.characters.duplicates();
        if !duplicates.is_empty() {
            tracing::warn!(
                duplicates = ?duplicates,
                "Alphabet contains duplicated symbols; generated IDs may be ambiguous"
            );
        }
    }
}

/// Derives the configuration from an environment source.
///
/// The alphabet is resolved first because the default length depends on
/// its size. Derivation is pure: the same input always yields the same
/// result, and nothing is logged.
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered; no partial configuration
/// is ever produced.
pub fn derive(env: &impl EnvSource) -> Result<ResolvedConfig, ConfigError> {
    let characters = parse_characters(env.get(SHORT_CHARS).as_deref())?;

    let default = default_length(characters.len());
    let length = parse_length(env.get(SHORT_LENGTH).as_deref(), default)?;

    let rewrites = parse_rewrites(env.get(SHORT_REWRITES).as_deref())?;

    Ok(ResolvedConfig {
        characters,
        length,
        rewrites,
    })
}

/// Derives the configuration from the process environment.
///
/// # Errors
///
/// Returns an error if any of the settings is invalid.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<ResolvedConfig> {
    derive(&ProcessEnv).context("Failed to derive short URL configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Setting;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::env;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_derive_defaults() {
        let config = derive(&vars(&[])).unwrap();

        assert_eq!(config.characters(), &Alphabet::default());
        assert_eq!(config.length(), 5);
        assert!(config.rewrites().is_empty());
    }

    #[test]
    fn test_derive_length_follows_custom_alphabet() {
        let config = derive(&vars(&[(SHORT_CHARS, r#"["0","1"]"#)])).unwrap();
        assert_eq!(config.length(), 30);
    }

    #[test]
    fn test_derive_single_symbol_alphabet_needs_length() {
        let err = derive(&vars(&[(SHORT_CHARS, r#"["a"]"#)])).unwrap_err();
        assert!(err.is_schema_violation());
        assert_eq!(err.setting(), Setting::Length);

        let config = derive(&vars(&[(SHORT_CHARS, r#"["a"]"#), (SHORT_LENGTH, "4")])).unwrap();
        assert_eq!(config.length(), 4);
        assert_eq!(config.id_space(), 1);
    }

    #[test]
    fn test_derive_alphabet_error_comes_first() {
        let err = derive(&vars(&[(SHORT_CHARS, "[]"), (SHORT_LENGTH, "abc")])).unwrap_err();
        assert_eq!(err.setting(), Setting::Characters);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let env = vars(&[
            (SHORT_CHARS, r#"["x","y","z"]"#),
            (SHORT_REWRITES, r#"{"a":"b","c":"d"}"#),
        ]);
        assert_eq!(derive(&env).unwrap(), derive(&env).unwrap());
    }

    #[test]
    fn test_id_space() {
        let config = derive(&vars(&[(SHORT_CHARS, r#"["0","1"]"#), (SHORT_LENGTH, "10")])).unwrap();
        assert_eq!(config.id_space(), 1024);

        let config = derive(&vars(&[])).unwrap();
        assert_eq!(config.id_space(), 62u128.pow(5));
    }

    #[test]
    fn test_id_space_saturates() {
        let config = derive(&vars(&[(SHORT_LENGTH, "1000")])).unwrap();
        assert_eq!(config.id_space(), u128::MAX);
    }

    #[test]
    fn test_serialize_shape() {
        let config = derive(&vars(&[
            (SHORT_CHARS, r#"["a","b"]"#),
            (SHORT_LENGTH, "3"),
            (SHORT_REWRITES, r#"{"x":"y"}"#),
        ]))
        .unwrap();

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "characters": ["a", "b"],
                "length": 3,
                "rewrites": { "x": "y" }
            })
        );
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var(SHORT_CHARS, r#"["a","b","c"]"#);
            env::set_var(SHORT_LENGTH, "6");
            env::remove_var(SHORT_REWRITES);
        }

        let config = load_from_env().unwrap();
        assert_eq!(config.characters().len(), 3);
        assert_eq!(config.length(), 6);

        // Cleanup
        unsafe {
            env::remove_var(SHORT_CHARS);
            env::remove_var(SHORT_LENGTH);
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_reports_setting() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var(SHORT_CHARS);
            env::remove_var(SHORT_LENGTH);
            env::set_var(SHORT_REWRITES, r#"{"a":""}"#);
        }

        let err = load_from_env().unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("Failed to derive short URL configuration"));
        assert!(chain.contains("SHORT_REWRITES"));

        // Cleanup
        unsafe {
            env::remove_var(SHORT_REWRITES);
        }
    }
}
