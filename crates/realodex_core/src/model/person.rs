//! Contact record.
//!
//! # Invariants
//! - Every field holds an already validated value object.
//! - Two records denote the same client when their names match ignoring case.

use super::{Address, Birthday, Email, Family, HousingType, Income, Name, Phone, Remark, Tag};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// One client in the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub income: Income,
    pub email: Email,
    pub address: Address,
    pub family: Family,
    /// Client roles; sorted, so listing order is stable.
    pub tags: BTreeSet<Tag>,
    pub housing_type: HousingType,
    pub remark: Remark,
    pub birthday: Birthday,
}

impl Person {
    /// Identity check used to reject duplicate clients.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name.matches_ignore_case(&other.name)
    }

    /// Housing preference and birthday countdown, one line each.
    pub fn detail_lines(&self, today: NaiveDate) -> [String; 3] {
        [
            self.housing_type.describe(),
            self.birthday.describe(),
            self.birthday.describe_days_until(today),
        ]
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let tags = self
            .tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{}; Phone: {}; Income: {}; Email: {}; Address: {}; Family: {}; Tags: [{}]; Housing Type: {}",
            self.name,
            self.phone,
            self.income,
            self.email,
            self.address,
            self.family,
            tags,
            self.housing_type
        )?;
        if !self.remark.is_empty() {
            write!(f, "; Remark: {}", self.remark)?;
        }
        if self.birthday.is_specified() {
            write!(f, "; Birthday: {}", self.birthday)?;
        }
        Ok(())
    }
}
