//! Argument prefixes recognized in command lines.

use crate::model::FieldKind;
use std::fmt::{Display, Formatter};

/// Marker identifying which field an argument value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prefix {
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
}

impl Prefix {
    pub const ALL: [Prefix; 10] = [
        Prefix::Name,
        Prefix::Phone,
        Prefix::Income,
        Prefix::Email,
        Prefix::Address,
        Prefix::Family,
        Prefix::Tag,
        Prefix::Remark,
        Prefix::HousingType,
        Prefix::Birthday,
    ];

    /// Literal text typed by the user, e.g. `n/`.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Name => "n/",
            Self::Phone => "p/",
            Self::Income => "i/",
            Self::Email => "e/",
            Self::Address => "a/",
            Self::Family => "f/",
            Self::Tag => "t/",
            Self::Remark => "r/",
            Self::HousingType => "h/",
            Self::Birthday => "b/",
        }
    }

    pub fn field(self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Name,
            Self::Phone => FieldKind::Phone,
            Self::Income => FieldKind::Income,
            Self::Email => FieldKind::Email,
            Self::Address => FieldKind::Address,
            Self::Family => FieldKind::Family,
            Self::Tag => FieldKind::Tag,
            Self::Remark => FieldKind::Remark,
            Self::HousingType => FieldKind::HousingType,
            Self::Birthday => FieldKind::Birthday,
        }
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

/// Prefixes that can drive a filter. A closed subset of [`Prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterPrefix {
    Name,
    Remark,
    Tag,
    HousingType,
    Birthday,
}

impl FilterPrefix {
    pub const ALL: [FilterPrefix; 5] = [
        FilterPrefix::Name,
        FilterPrefix::Remark,
        FilterPrefix::Tag,
        FilterPrefix::HousingType,
        FilterPrefix::Birthday,
    ];

    pub fn prefix(self) -> Prefix {
        match self {
            Self::Name => Prefix::Name,
            Self::Remark => Prefix::Remark,
            Self::Tag => Prefix::Tag,
            Self::HousingType => Prefix::HousingType,
            Self::Birthday => Prefix::Birthday,
        }
    }

    /// Plain prefixes of every filter prefix, in declaration order.
    pub fn prefixes() -> [Prefix; 5] {
        Self::ALL.map(Self::prefix)
    }
}

impl TryFrom<Prefix> for FilterPrefix {
    type Error = Prefix;

    fn try_from(value: Prefix) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.prefix() == value)
            .ok_or(value)
    }
}
