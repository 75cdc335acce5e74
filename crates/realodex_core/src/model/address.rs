//! Contact address value type.

use super::field::{FieldError, FieldKind};
use std::fmt::{Display, Formatter};

pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";

/// Validated postal address. Free text that does not start with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(raw: &str) -> Result<Self, FieldError> {
        if !is_valid_address(raw) {
            return Err(FieldError::new(FieldKind::Address, raw));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn is_valid_address(raw: &str) -> bool {
    raw.chars().next().is_some_and(|first| !first.is_whitespace())
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_address, Address};

    #[test]
    fn address_validation() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address(" "));

        assert!(is_valid_address("Blk 456, Den Road, #01-355"));
        assert!(is_valid_address("-"));
        assert!(is_valid_address(
            "Leng Inc; 1234 Market St; San Francisco CA 2349879; USA"
        ));
    }

    #[test]
    fn equality_is_by_value() {
        let address = Address::new("Valid Address").unwrap();
        assert_eq!(address, Address::new("Valid Address").unwrap());
        assert_ne!(address, Address::new("Other Valid Address").unwrap());
    }
}
