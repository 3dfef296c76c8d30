#![allow(dead_code)]

use std::collections::HashMap;

use shortener_config::env::{SHORT_CHARS, SHORT_LENGTH, SHORT_REWRITES};

/// Builds an in-memory environment from key/value pairs.
pub fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

pub fn env_chars(json: &str) -> HashMap<String, String> {
    env_with(&[(SHORT_CHARS, json)])
}

pub fn env_length(length: &str) -> HashMap<String, String> {
    env_with(&[(SHORT_LENGTH, length)])
}

pub fn env_rewrites(json: &str) -> HashMap<String, String> {
    env_with(&[(SHORT_REWRITES, json)])
}

/// JSON array literal for a list of symbols.
pub fn json_array(symbols: &[&str]) -> String {
    serde_json::to_string(symbols).unwrap()
}
