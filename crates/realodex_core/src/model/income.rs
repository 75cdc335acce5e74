//! Contact annual income value type.

use super::field::{FieldError, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

pub const INCOME_CONSTRAINTS: &str =
    "Income should be a non-negative integer made of digits only, without signs, separators or decimals";

static INCOME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid income regex"));

/// Validated income in whole currency units.
///
/// Digit string with leading zeros stripped; `0001 == 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Income(String);

impl Income {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        if !is_valid_income(raw) {
            return Err(FieldError::new(FieldKind::Income, raw));
        }
        let stripped = raw.trim_start_matches('0');
        let normalized = if stripped.is_empty() { "0" } else { stripped };
        Ok(Self(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Digits only. `-0`, `1.0`, `12,345` and padded values are rejected.
pub fn is_valid_income(raw: &str) -> bool {
    INCOME_RE.is_match(raw)
}

impl Display for Income {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
