#![allow(dead_code)]

use realodex_core::model::{
    Address, Birthday, Email, Family, HousingType, Income, Name, Person, Phone, Remark, Tag,
};

/// Valid client with the given name; other fields are fixed defaults.
pub fn person(name: &str) -> Person {
    Person {
        name: Name::new(name).unwrap(),
        phone: Phone::new("98765432").unwrap(),
        income: Income::new("5000").unwrap(),
        email: Email::new("client@example.com").unwrap(),
        address: Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        family: Family::new("3").unwrap(),
        tags: [Tag::Buyer].into_iter().collect(),
        housing_type: HousingType::Hdb,
        remark: Remark::default(),
        birthday: Birthday::unspecified(),
    }
}

pub fn with_tags(mut person: Person, tags: &[Tag]) -> Person {
    person.tags = tags.iter().copied().collect();
    person
}

pub fn with_remark(mut person: Person, remark: &str) -> Person {
    person.remark = Remark::new(remark).unwrap();
    person
}

pub fn with_birthday(mut person: Person, birthday: &str) -> Person {
    person.birthday = Birthday::new(birthday).unwrap();
    person
}

pub fn with_housing_type(mut person: Person, housing_type: HousingType) -> Person {
    person.housing_type = housing_type;
    person
}
