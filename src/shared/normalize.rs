//! Canonical form of plate and chassis identifiers.
//!
//! Both identifier kinds share one algorithm: uppercase, then drop every
//! whitespace character, hyphen, underscore, forward slash and period.
//! Nothing else is altered or validated, so `"ABC-123"`, `"abc 123"` and
//! `"abc123"` all compare equal as `"ABC123"`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Separators ignored when comparing identifiers
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[\s\-_/\.]").unwrap();
}

/// Normalize a free-text identifier into its comparison key
pub fn normalize_identifier(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    SEPARATOR_REGEX
        .replace_all(&raw.to_uppercase(), "")
        .into_owned()
}

/// Normalize a license plate number
pub fn normalize_plate(raw: &str) -> String {
    normalize_identifier(raw)
}

/// Normalize a chassis (VIN) number
pub fn normalize_chassis(raw: &str) -> String {
    normalize_identifier(raw)
}
