//! Free-text remark value type.

use super::field::FieldError;
use std::fmt::{Display, Formatter};

pub const REMARK_CONSTRAINTS: &str = "Remarks can take any value";

/// Free-text note about a contact. Empty means no remark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    /// Always succeeds; remarks are unconstrained.
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        debug_assert!(is_valid_remark(raw));
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn is_valid_remark(_raw: &str) -> bool {
    true
}

impl Display for Remark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
