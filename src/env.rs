//! Environment key/value sources.
//!
//! Derivation never touches process-wide state directly. It reads through
//! [`EnvSource`], so tests can pass a plain map and the service passes
//! [`ProcessEnv`].

use std::collections::{BTreeMap, HashMap};

/// JSON array of symbols used to build short IDs.
pub const SHORT_CHARS: &str = "SHORT_CHARS";
/// Number of symbols per generated short ID.
pub const SHORT_LENGTH: &str = "SHORT_LENGTH";
/// JSON object of rewrite rules applied before redirecting.
pub const SHORT_REWRITES: &str = "SHORT_REWRITES";

/// Read-only string-keyed lookup of raw setting values.
pub trait EnvSource {
    /// Returns the raw value for `key`, or `None` when it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    /// Values that are not valid unicode are decoded lossily, so a set but
    /// garbled override still reaches validation instead of reading as unset.
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
