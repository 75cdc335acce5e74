//! Household size value type.

use super::field::{FieldError, FieldKind};
use std::fmt::{Display, Formatter};

pub const FAMILY_CONSTRAINTS: &str =
    "Family size should be a positive integer made of digits only";

/// Number of people in the contact's household. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Family(u32);

impl Family {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        parse_family(raw)
            .map(Self)
            .ok_or_else(|| FieldError::new(FieldKind::Family, raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

pub fn is_valid_family(raw: &str) -> bool {
    parse_family(raw).is_some()
}

fn parse_family(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|size| *size > 0)
}

impl Display for Family {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
