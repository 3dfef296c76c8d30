//! Alphabet of symbols used to encode short IDs.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;

use super::{decode_json, json_kind};
use crate::error::{ConfigError, Setting};

/// Built-in alphabet used when `SHORT_CHARS` is not set.
///
/// This is the table the service has always shipped with. It holds 62
/// entries, but `z` and `Z` each appear twice (where `s`/`S` would be) and
/// `x`/`w` are out of order, so only 60 symbols are distinct. It is kept
/// as-is because the default ID length and every ID issued so far depend
/// on it; see [`Alphabet::duplicates`].
pub const DEFAULT_CHARACTERS: [&str; 62] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "z", "t", "u", "v", "x", "w", "y", "z",
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "Z", "T", "U", "V", "X", "W", "Y", "Z",
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
];

/// Ordered, non-empty list of non-empty symbols.
///
/// Symbols are strings rather than `char`s: a symbol may span several
/// characters. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Alphabet(Vec<String>);

impl Alphabet {
    /// Builds an alphabet, rejecting an empty list or an empty symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SchemaViolation`] for `SHORT_CHARS`.
    pub fn new(symbols: Vec<String>) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::schema(
                Setting::Characters,
                "must contain at least one symbol",
            ));
        }

        if let Some(index) = symbols.iter().position(String::is_empty) {
            return Err(ConfigError::schema(
                Setting::Characters,
                format!("symbol at index {index} must not be empty"),
            ));
        }

        Ok(Self(symbols))
    }

    /// Number of symbols, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for an alphabet built through [`Alphabet::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct symbols.
    pub fn distinct_len(&self) -> usize {
        self.0.iter().map(String::as_str).collect::<HashSet<_>>().len()
    }

    /// Symbols occurring more than once, in order of first occurrence.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::with_capacity(self.0.len());
        for symbol in &self.0 {
            *counts.entry(symbol.as_str()).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for symbol in &self.0 {
            let symbol = symbol.as_str();
            if counts.get(symbol).is_some_and(|&n| n > 1) && !duplicates.contains(&symbol) {
                duplicates.push(symbol);
            }
        }
        duplicates
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self(DEFAULT_CHARACTERS.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<'a> IntoIterator for &'a Alphabet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Resolves the alphabet from the raw `SHORT_CHARS` value.
///
/// # Errors
///
/// - [`ConfigError::MalformedInput`] if the value is not valid JSON
/// - [`ConfigError::SchemaViolation`] if it is not a non-empty array of
///   non-empty strings
pub fn parse_characters(raw: Option<&str>) -> Result<Alphabet, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Alphabet::default());
    };

    let value = decode_json(Setting::Characters, raw)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ConfigError::schema(
                Setting::Characters,
                format!("expected an array of strings, got {}", json_kind(&other)),
            ));
        }
    };

    let symbols = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(symbol) => Ok(symbol),
            other => Err(ConfigError::schema(
                Setting::Characters,
                format!(
                    "symbol at index {index} must be a string, got {}",
                    json_kind(&other)
                ),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Alphabet::new(symbols)
}
