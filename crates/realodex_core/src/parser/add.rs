//! `add n/NAME p/PHONE i/INCOME e/EMAIL a/ADDRESS f/FAMILY t/TAG h/HOUSINGTYPE [r/REMARK] [b/BIRTHDAY]`.

use super::error::ParseError;
use super::parser_util::{
    parse_address, parse_birthday, parse_email, parse_family, parse_housing_type, parse_income,
    parse_name, parse_phone, parse_remark, parse_tags, required_value,
};
use super::prefix::Prefix;
use super::prefix_checker::PrefixChecker;
use super::tokenizer::tokenize;
use crate::command::usage::ADD_USAGE;
use crate::command::Command;
use crate::model::{Birthday, Person, Remark};

pub const MESSAGE_UNEXPECTED_PREAMBLE: &str = "Unexpected text before the first field.";

const REQUIRED: [Prefix; 8] = [
    Prefix::Name,
    Prefix::Phone,
    Prefix::Income,
    Prefix::Email,
    Prefix::Address,
    Prefix::Family,
    Prefix::Tag,
    Prefix::HousingType,
];

pub fn parse_add(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &Prefix::ALL);
    let checker = PrefixChecker::new(&map);

    if !checker.empty_preamble() {
        return Err(ParseError::syntax(MESSAGE_UNEXPECTED_PREAMBLE, ADD_USAGE));
    }
    let missing = REQUIRED
        .into_iter()
        .filter(|prefix| !map.contains(*prefix))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ParseError::MissingFields {
            fields: missing,
            usage: ADD_USAGE,
        });
    }
    checker.check_no_duplicates(&Prefix::ALL)?;

    let person = Person {
        name: parse_name(required_value(&map, Prefix::Name, ADD_USAGE)?)?,
        phone: parse_phone(required_value(&map, Prefix::Phone, ADD_USAGE)?)?,
        income: parse_income(required_value(&map, Prefix::Income, ADD_USAGE)?)?,
        email: parse_email(required_value(&map, Prefix::Email, ADD_USAGE)?)?,
        address: parse_address(required_value(&map, Prefix::Address, ADD_USAGE)?)?,
        family: parse_family(required_value(&map, Prefix::Family, ADD_USAGE)?)?,
        tags: parse_tags(map.all_values(Prefix::Tag))?,
        housing_type: parse_housing_type(required_value(&map, Prefix::HousingType, ADD_USAGE)?)?,
        remark: match map.value(Prefix::Remark) {
            Some(raw) => parse_remark(raw)?,
            None => Remark::default(),
        },
        birthday: match map.value(Prefix::Birthday) {
            Some(raw) => parse_birthday(raw)?,
            None => Birthday::unspecified(),
        },
    };
    Ok(Command::Add(person))
}
