//! Contact phone number value type.

use super::field::{FieldError, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 8 digits long";

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,}$").expect("valid phone regex"));

/// Validated phone number. Digits only; no country-code `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        if !is_valid_phone(raw) {
            return Err(FieldError::new(FieldKind::Phone, raw));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_RE.is_match(raw)
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
