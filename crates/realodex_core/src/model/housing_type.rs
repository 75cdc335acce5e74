//! Preferred housing type.

use super::field::{FieldError, FieldKind};
use std::fmt::{Display, Formatter};

pub const HOUSING_TYPE_CONSTRAINTS: &str = "Housing type should be one of HDB, CONDOMINIUM, \
LANDED PROPERTY or GOOD CLASS BUNGALOW (case-insensitive)";

/// Property category a client prefers. Parsed case-insensitively without
/// trimming; `Display` yields the uppercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HousingType {
    Hdb,
    Condominium,
    LandedProperty,
    GoodClassBungalow,
}

impl HousingType {
    pub const ALL: [HousingType; 4] = [
        HousingType::Hdb,
        HousingType::Condominium,
        HousingType::LandedProperty,
        HousingType::GoodClassBungalow,
    ];

    pub fn new(raw: &str) -> Result<Self, FieldError> {
        let normalized = raw.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| FieldError::new(FieldKind::HousingType, raw))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hdb => "HDB",
            Self::Condominium => "CONDOMINIUM",
            Self::LandedProperty => "LANDED PROPERTY",
            Self::GoodClassBungalow => "GOOD CLASS BUNGALOW",
        }
    }

    /// Sentence form used in contact detail views.
    pub fn describe(self) -> String {
        format!("Preferred housing type is {}", self.as_str())
    }
}

pub fn is_valid_housing_type(raw: &str) -> bool {
    HousingType::new(raw).is_ok()
}

impl Display for HousingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_housing_type, HousingType};

    #[test]
    fn housing_type_validation() {
        assert!(!is_valid_housing_type(""));
        assert!(!is_valid_housing_type("HDBB"));
        assert!(!is_valid_housing_type("HDB "));
        assert!(!is_valid_housing_type("H DB"));

        assert!(is_valid_housing_type("hdb"));
        assert!(is_valid_housing_type("CONDOMINIUM"));
        assert!(is_valid_housing_type("landed property"));
        assert!(is_valid_housing_type("good class bungalow"));
    }

    #[test]
    fn describe_uses_uppercase_name() {
        assert_eq!(
            HousingType::new("landed property").unwrap().describe(),
            "Preferred housing type is LANDED PROPERTY"
        );
        assert_eq!(HousingType::new("hdb").unwrap(), HousingType::Hdb);
        assert_ne!(HousingType::Hdb, HousingType::Condominium);
    }
}
