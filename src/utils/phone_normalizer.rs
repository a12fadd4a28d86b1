//! Phone number normalization applied before a dial prefix is prepended.
//!
//! WhatsApp deep links carry the international prefix in place of a national
//! trunk code, so leading zeros are always removed. Formatting separators are
//! removed as well unless [`SeparatorPolicy::Keep`] is selected.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Characters people commonly type between digit groups.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-.()/]").expect("separator pattern is valid"));

/// How formatting separators inside a phone number are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorPolicy {
    /// Remove whitespace, `-`, `.`, `(`, `)` and `/` before stripping leading zeros.
    #[default]
    Strip,
    /// Pass every character through unchanged; only leading zeros are stripped.
    Keep,
}

/// Returned when a separator policy name is not recognised.
#[derive(Debug, thiserror::Error)]
#[error("unknown separator policy '{0}', expected 'strip' or 'keep'")]
pub struct UnknownSeparatorPolicy(pub String);

impl FromStr for SeparatorPolicy {
    type Err = UnknownSeparatorPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strip" => Ok(Self::Strip),
            "keep" => Ok(Self::Keep),
            other => Err(UnknownSeparatorPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for SeparatorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strip => f.write_str("strip"),
            Self::Keep => f.write_str("keep"),
        }
    }
}

/// Normalizes a raw phone number into the national part of a canonical number.
///
/// # Normalization Rules
///
/// 1. **Separators**: removed under [`SeparatorPolicy::Strip`], kept otherwise
/// 2. **Leading zeros**: always removed (`0812` becomes `812`)
/// 3. **Anything else**: passed through unchanged
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_phone_number("0812-345", SeparatorPolicy::Strip), "812345");
/// assert_eq!(normalize_phone_number("0812-345", SeparatorPolicy::Keep), "812-345");
/// ```
pub fn normalize_phone_number(raw: &str, policy: SeparatorPolicy) -> String {
    let cleaned = match policy {
        SeparatorPolicy::Strip => SEPARATOR_REGEX.replace_all(raw, ""),
        SeparatorPolicy::Keep => raw.into(),
    };

    cleaned.trim_start_matches('0').to_string()
}
