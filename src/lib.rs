//! # Shortener Config
//!
//! Startup configuration for the URL shortener's ID generator and redirect
//! rewriting, derived from environment variables.
//!
//! ## Layout
//!
//! - **Environment** ([`env`]) - Key/value sources the configuration is read from
//! - **Settings** ([`settings`]) - Parsers for the alphabet, ID length and rewrites
//! - **Configuration** ([`config`]) - Derivation of the resolved configuration
//! - **Errors** ([`error`]) - Which setting failed and why
//! - **Logging** ([`logging`]) - Tracing subscriber setup for the binary
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_CHARS='["a","b","c","1","2","3"]'
//! export SHORT_LENGTH="10"
//!
//! cargo run -- show
//! ```
//!
//! From code, pass any [`env::EnvSource`]:
//!
//! ```
//! use std::collections::HashMap;
//! use shortener_config::config::derive;
//!
//! let env: HashMap<String, String> = HashMap::new();
//! let config = derive(&env).unwrap();
//! assert_eq!(config.length(), 5);
//! ```

pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod settings;

pub use config::{ResolvedConfig, derive, load_from_env};
pub use error::{ConfigError, Setting};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::{ResolvedConfig, derive, load_from_env};
    pub use crate::env::{EnvSource, ProcessEnv};
    pub use crate::error::{ConfigError, Setting};
    pub use crate::settings::{Alphabet, RewriteMap};
}
