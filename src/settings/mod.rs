//! Parsers for the individual short URL settings.
//!
//! Each parser takes the raw environment string (or `None` when unset),
//! decodes it, validates its structure and falls back to a default:
//!
//! - [`characters`] - Alphabet of symbols used in short IDs (`SHORT_CHARS`)
//! - [`length`] - Number of symbols per short ID (`SHORT_LENGTH`)
//! - [`rewrites`] - URL rewrite rules applied before redirect (`SHORT_REWRITES`)

pub mod characters;
pub mod length;
pub mod rewrites;

pub use characters::{Alphabet, DEFAULT_CHARACTERS};
pub use length::{MAX_SHORT_URLS, default_length};
pub use rewrites::RewriteMap;

use crate::error::{ConfigError, Setting};
use serde_json::Value;

/// Decodes a raw environment string as JSON.
///
/// Syntax errors map to [`ConfigError::MalformedInput`]; structural checks
/// are left to the caller.
pub(crate) fn decode_json(setting: Setting, raw: &str) -> Result<Value, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::malformed(setting, e.to_string()))
}

/// Short name of a JSON value's type for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
