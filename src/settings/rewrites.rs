//! URL rewrite rules applied before redirecting.

use std::collections::BTreeMap;

use serde_json::Value;

use super::{decode_json, json_kind};
use crate::error::{ConfigError, Setting};

/// Rewrite rules keyed by the fragment to replace. Values are never empty.
pub type RewriteMap = BTreeMap<String, String>;

/// Resolves rewrite rules from the raw `SHORT_REWRITES` value.
///
/// Keys are taken verbatim; reachability of the targets is not checked.
///
/// # Errors
///
/// - [`ConfigError::MalformedInput`] if the value is not valid JSON
/// - [`ConfigError::SchemaViolation`] if it is not an object whose values
///   are all non-empty strings
pub fn parse_rewrites(raw: Option<&str>) -> Result<RewriteMap, ConfigError> {
    let Some(raw) = raw else {
        return Ok(RewriteMap::new());
    };

    let object = match decode_json(Setting::Rewrites, raw)? {
        Value::Object(object) => object,
        other => {
            return Err(ConfigError::schema(
                Setting::Rewrites,
                format!("expected an object, got {}", json_kind(&other)),
            ));
        }
    };

    let mut rewrites = RewriteMap::new();
    for (key, value) in object {
        match value {
            Value::String(target) if !target.is_empty() => {
                rewrites.insert(key, target);
            }
            Value::String(_) => {
                return Err(ConfigError::schema(
                    Setting::Rewrites,
                    format!("value for '{key}' must not be empty"),
                ));
            }
            other => {
                return Err(ConfigError::schema(
                    Setting::Rewrites,
                    format!(
                        "value for '{key}' must be a string, got {}",
                        json_kind(&other)
                    ),
                ));
            }
        }
    }

    Ok(rewrites)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absent_is_empty() {
        assert!(parse_rewrites(None).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_object() {
        assert!(parse_rewrites(Some("{}")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_rule() {
        let rewrites = parse_rewrites(Some(r#"{"a": "b"}"#)).unwrap();
        assert_eq!(rewrites.len(), 1);
        assert_eq!(rewrites.get("a").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_parse_arbitrary_keys() {
        let rewrites = parse_rewrites(Some(
            r#"{"": "root", "http://old.example.com": "https://new.example.com"}"#,
        ))
        .unwrap();
        assert_eq!(rewrites.len(), 2);
        assert_eq!(rewrites[""], "root");
        assert_eq!(rewrites["http://old.example.com"], "https://new.example.com");
    }

    #[test]
    fn test_parse_empty_value() {
        let err = parse_rewrites(Some(r#"{"a": ""}"#)).unwrap_err();
        assert!(err.is_schema_violation());
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_parse_non_string_value() {
        let err = parse_rewrites(Some(r#"{"a": 1}"#)).unwrap_err();
        assert!(err.is_schema_violation());

        let err = parse_rewrites(Some(r#"{"a": null}"#)).unwrap_err();
        assert!(err.is_schema_violation());
    }

    #[test]
    fn test_parse_not_an_object() {
        let err = parse_rewrites(Some(r#"["a", "b"]"#)).unwrap_err();
        assert!(err.is_schema_violation());
        assert!(err.to_string().contains("got array"));

        assert!(parse_rewrites(Some("null")).unwrap_err().is_schema_violation());
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_rewrites(Some("{'a': 'b'}")).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.setting(), Setting::Rewrites);
    }
}
