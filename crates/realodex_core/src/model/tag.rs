//! Client role tag.

use super::field::{FieldError, FieldKind};
use std::fmt::{Display, Formatter};

pub const TAG_CONSTRAINTS: &str = "Tags should be either buyer or seller (case-insensitive)";

/// Role a client plays in a deal. Parsed case-insensitively, shown uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Buyer,
    Seller,
}

impl Tag {
    pub const ALL: [Tag; 2] = [Tag::Buyer, Tag::Seller];

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == raw.to_uppercase())
            .ok_or_else(|| FieldError::new(FieldKind::Tag, raw))
    }

    /// Normalized uppercase form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "BUYER",
            Self::Seller => "SELLER",
        }
    }
}

pub fn is_valid_tag_name(raw: &str) -> bool {
    Tag::new(raw).is_ok()
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_tag_name, Tag};

    #[test]
    fn tag_validation_is_case_insensitive_and_exact() {
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("Buyers"));
        assert!(!is_valid_tag_name("Sellers "));
        assert!(!is_valid_tag_name("Invalid Tag"));
        assert!(!is_valid_tag_name("customer"));

        assert!(is_valid_tag_name("buyer"));
        assert!(is_valid_tag_name("seller"));
        assert!(is_valid_tag_name("buYeR"));
        assert!(is_valid_tag_name("seLLer"));
    }

    #[test]
    fn normalizes_to_uppercase() {
        assert_eq!(Tag::new("buYeR").unwrap(), Tag::Buyer);
        assert_eq!(Tag::new("seller").unwrap().to_string(), "SELLER");
    }
}
