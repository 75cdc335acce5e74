//! Contact name value type.

use super::field::{FieldError, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";

// First character must not be a space, so blank input is rejected.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));

/// Validated contact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        if !is_valid_name(raw) {
            return Err(FieldError::new(FieldKind::Name, raw));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for identity checks between contacts.
    pub fn matches_ignore_case(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

/// Returns whether `raw` is an acceptable name.
pub fn is_valid_name(raw: &str) -> bool {
    NAME_RE.is_match(raw)
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
