//! Contact email value type.

use super::field::{FieldError, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain. \
The local-part should only contain alphanumeric characters and the special characters +_.-, \
and may not start or end with a special character. \
The domain is made of labels separated by periods. Each label starts and ends with an \
alphanumeric character and may contain hyphens in between. \
The last label must be at least 2 characters long.";

// `[^\W_]` is an alphanumeric character without the underscore.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[^\W_]+([+_.\-][^\W_]+)*@([^\W_]+(-[^\W_]+)*\.)*([^\W_]+(-[^\W_]+)*){2,}$",
    )
    .expect("valid email regex")
});

/// Validated email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        if !is_valid_email(raw) {
            return Err(FieldError::new(FieldKind::Email, raw));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.is_match(raw)
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
