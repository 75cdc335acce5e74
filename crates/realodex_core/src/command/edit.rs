//! Partial update applied by the edit command.

use crate::model::{
    Address, Birthday, Email, Family, HousingType, Income, Name, Person, Phone, Remark, Tag,
};
use std::collections::BTreeSet;

/// Fields to overwrite; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub income: Option<Income>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub family: Option<Family>,
    /// Replaces the whole tag set when present.
    pub tags: Option<BTreeSet<Tag>>,
    pub housing_type: Option<HousingType>,
    pub remark: Option<Remark>,
    pub birthday: Option<Birthday>,
}

impl EditDescriptor {
    pub fn apply(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            income: self.income.clone().unwrap_or_else(|| person.income.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            address: self.address.clone().unwrap_or_else(|| person.address.clone()),
            family: self.family.unwrap_or(person.family),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            housing_type: self.housing_type.unwrap_or(person.housing_type),
            remark: self.remark.clone().unwrap_or_else(|| person.remark.clone()),
            birthday: self.birthday.unwrap_or(person.birthday),
        }
    }
}
