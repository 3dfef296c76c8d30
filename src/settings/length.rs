//! Number of symbols in a generated short ID.

use crate::error::{ConfigError, Setting};

/// Target number of short URLs the ID space is sized for.
pub const MAX_SHORT_URLS: f64 = 1e9;

/// Largest length accepted from `SHORT_LENGTH`: the largest integer an
/// `f64` represents exactly (2^53 - 1).
const MAX_LENGTH: f64 = 9_007_199_254_740_991.0;

/// Default ID length for an alphabet of `alphabet_size` symbols.
///
/// Picks the exponent for which `alphabet_size^length` comes closest to
/// [`MAX_SHORT_URLS`]: `round(ln(MAX_SHORT_URLS) / ln(alphabet_size))`.
///
/// Returns `None` for alphabets of fewer than two symbols, where the
/// logarithm base is degenerate and no length sizes the ID space.
pub fn default_length(alphabet_size: usize) -> Option<usize> {
    if alphabet_size < 2 {
        return None;
    }

    let exponent = (MAX_SHORT_URLS.ln() / (alphabet_size as f64).ln()).round();
    Some((exponent as usize).max(1))
}

/// Resolves the ID length from the raw `SHORT_LENGTH` value.
///
/// The value is read as a decimal number after trimming whitespace, so
/// `"8"`, `"8.0"` and `"8e0"` are equivalent. An empty value reads as zero.
///
/// # Errors
///
/// - [`ConfigError::MalformedInput`] if the value is not a number
/// - [`ConfigError::SchemaViolation`] if it is not a positive integer, or if
///   it is unset and `default` is `None`
pub fn parse_length(raw: Option<&str>, default: Option<usize>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return default.ok_or_else(|| {
            ConfigError::schema(
                Setting::Length,
                "cannot be derived from a single-symbol alphabet and must be set explicitly",
            )
        });
    };

    let trimmed = raw.trim();
    let number = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse::<f64>().map_err(|_| {
            ConfigError::malformed(Setting::Length, format!("expected a number, got '{raw}'"))
        })?
    };

    if number.is_nan() {
        return Err(ConfigError::malformed(
            Setting::Length,
            format!("expected a number, got '{raw}'"),
        ));
    }

    if number.is_infinite() || number.fract() != 0.0 {
        return Err(ConfigError::schema(
            Setting::Length,
            format!("must be an integer, got '{raw}'"),
        ));
    }

    if number <= 0.0 {
        return Err(ConfigError::schema(
            Setting::Length,
            format!("must be a positive integer, got {number}"),
        ));
    }

    if number > MAX_LENGTH || number > usize::MAX as f64 {
        return Err(ConfigError::schema(
            Setting::Length,
            format!("is too large (max: {MAX_LENGTH}), got {number}"),
        ));
    }

    Ok(number as usize)
}
