//! Field identities and the shared validation error.
//!
//! # Responsibility
//! - Name every contact field in one closed enumeration.
//! - Carry the rejected raw value plus the field's constraint message.
//!
//! # Invariants
//! - A `FieldError` always displays the constraint message of its own field,
//!   never a generic message.

use std::error::Error;
use std::fmt::{Display, Formatter};

use super::{address, birthday, email, family, housing_type, income, name, phone, remark, tag};

/// Every validated field a contact (or a filter keyphrase) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Phone,
    Income,
    Email,
    Address,
    Family,
    Tag,
    Remark,
    HousingType,
    Birthday,
    /// Month keyphrase used by the birthday filter.
    BirthMonth,
}

impl FieldKind {
    /// Human-readable field label used in missing-field messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Income => "Income",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Family => "Family",
            Self::Tag => "Tag",
            Self::Remark => "Remark",
            Self::HousingType => "HousingType",
            Self::Birthday => "Birthday",
            Self::BirthMonth => "BirthMonth",
        }
    }

    /// Constraint message shown when a raw value fails validation.
    pub fn constraints(self) -> &'static str {
        match self {
            Self::Name => name::NAME_CONSTRAINTS,
            Self::Phone => phone::PHONE_CONSTRAINTS,
            Self::Income => income::INCOME_CONSTRAINTS,
            Self::Email => email::EMAIL_CONSTRAINTS,
            Self::Address => address::ADDRESS_CONSTRAINTS,
            Self::Family => family::FAMILY_CONSTRAINTS,
            Self::Tag => tag::TAG_CONSTRAINTS,
            Self::Remark => remark::REMARK_CONSTRAINTS,
            Self::HousingType => housing_type::HOUSING_TYPE_CONSTRAINTS,
            Self::Birthday => birthday::BIRTHDAY_CONSTRAINTS,
            Self::BirthMonth => birthday::BIRTH_MONTH_CONSTRAINTS,
        }
    }
}

/// Raw value rejected by a field validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    kind: FieldKind,
    value: String,
}

impl FieldError {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Field whose validator rejected the value.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The rejected raw input, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn constraints(&self) -> &'static str {
        self.kind.constraints()
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.constraints())
    }
}

impl Error for FieldError {}
