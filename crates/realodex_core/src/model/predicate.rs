//! Boolean filters over contact records.
//!
//! # Responsibility
//! - Represent each supported filter as a closed enum variant.
//! - Compose filters with logical AND.
//!
//! # Invariants
//! - Keyphrase matching is case-insensitive substring containment; it need
//!   not be a whole word or a prefix.
//! - A tag filter passes when the record's tags are a superset of the target.

use super::{HousingType, Person, Tag};
use chrono::Month;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Test applied to every contact when building the displayed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonPredicate {
    NameContains(String),
    RemarkContains(String),
    TagsMatch(BTreeSet<Tag>),
    HousingTypeMatch(HousingType),
    /// Matches specified birthdays falling in the given month.
    BirthdayInMonth(Month),
    /// Every inner predicate must pass.
    All(Vec<PersonPredicate>),
}

impl PersonPredicate {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            Self::NameContains(keyphrase) => contains_ignore_case(person.name.as_str(), keyphrase),
            Self::RemarkContains(keyphrase) => {
                contains_ignore_case(person.remark.as_str(), keyphrase)
            }
            Self::TagsMatch(tags) => person.tags.is_superset(tags),
            Self::HousingTypeMatch(housing_type) => person.housing_type == *housing_type,
            Self::BirthdayInMonth(month) => person.birthday.birth_month() == Some(*month),
            Self::All(predicates) => predicates.iter().all(|predicate| predicate.test(person)),
        }
    }

    /// Combines predicates with logical AND, flattening nested `All`s.
    pub fn all(predicates: impl IntoIterator<Item = PersonPredicate>) -> Self {
        let mut flat = Vec::new();
        for predicate in predicates {
            match predicate {
                Self::All(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        if flat.len() == 1 {
            if let Some(only) = flat.pop() {
                return only;
            }
        }
        Self::All(flat)
    }
}

fn contains_ignore_case(haystack: &str, keyphrase: &str) -> bool {
    haystack.to_lowercase().contains(&keyphrase.to_lowercase())
}

impl Display for PersonPredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameContains(keyphrase) => write!(f, "name contains `{keyphrase}`"),
            Self::RemarkContains(keyphrase) => write!(f, "remark contains `{keyphrase}`"),
            Self::TagsMatch(tags) => {
                let names = tags.iter().map(|tag| tag.as_str()).collect::<Vec<_>>();
                write!(f, "tags include [{}]", names.join(", "))
            }
            Self::HousingTypeMatch(housing_type) => write!(f, "housing type is {housing_type}"),
            Self::BirthdayInMonth(month) => write!(f, "birthday in {}", month.name()),
            Self::All(predicates) => {
                let parts = predicates.iter().map(ToString::to_string).collect::<Vec<_>>();
                f.write_str(&parts.join(" and "))
            }
        }
    }
}
