//! Shared helpers turning raw argument strings into validated values.
//!
//! Every helper trims its input before validation.

use super::error::ParseError;
use super::prefix::Prefix;
use super::tokenizer::ArgumentMultimap;
use crate::model::{
    Address, Birthday, Email, Family, HousingType, Income, Index, Name, Phone, Remark, Tag,
};
use std::collections::BTreeSet;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parses a 1-based index. Signs, spaces inside and zero are rejected.
pub fn parse_index(raw: &str, usage: &'static str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::syntax(MESSAGE_INVALID_INDEX, usage));
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::syntax(MESSAGE_INVALID_INDEX, usage))
}

/// Value of a prefix that must be present.
pub fn required_value<'m>(
    map: &'m ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> Result<&'m str, ParseError> {
    map.value(prefix).ok_or_else(|| ParseError::MissingFields {
        fields: vec![prefix],
        usage,
    })
}

pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::new(raw.trim())?)
}

pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(raw.trim())?)
}

pub fn parse_income(raw: &str) -> Result<Income, ParseError> {
    Ok(Income::new(raw.trim())?)
}

pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::new(raw.trim())?)
}

pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::new(raw.trim())?)
}

pub fn parse_family(raw: &str) -> Result<Family, ParseError> {
    Ok(Family::new(raw.trim())?)
}

pub fn parse_housing_type(raw: &str) -> Result<HousingType, ParseError> {
    Ok(HousingType::new(raw.trim())?)
}

pub fn parse_remark(raw: &str) -> Result<Remark, ParseError> {
    Ok(Remark::new(raw.trim())?)
}

pub fn parse_birthday(raw: &str) -> Result<Birthday, ParseError> {
    Ok(Birthday::new(raw.trim())?)
}

pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(raw.trim())?)
}

/// Parses every tag value; the first invalid value fails the whole set.
pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values.iter().map(|value| parse_tag(value)).collect()
}
