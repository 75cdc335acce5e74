//! `edit INDEX [n/NAME] [p/PHONE] ... [b/BIRTHDAY]`.

use super::error::ParseError;
use super::parser_util::{
    parse_address, parse_birthday, parse_email, parse_family, parse_housing_type, parse_income,
    parse_index, parse_name, parse_phone, parse_remark, parse_tags,
};
use super::prefix::Prefix;
use super::prefix_checker::PrefixChecker;
use super::tokenizer::tokenize;
use crate::command::usage::EDIT_USAGE;
use crate::command::{Command, EditDescriptor};

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub fn parse_edit(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &Prefix::ALL);
    let checker = PrefixChecker::new(&map);

    let index = parse_index(map.preamble(), EDIT_USAGE)?;
    if !checker.any_present(&Prefix::ALL) {
        return Err(ParseError::syntax(MESSAGE_NOT_EDITED, EDIT_USAGE));
    }
    checker.check_no_duplicates(&Prefix::ALL)?;

    let changes = EditDescriptor {
        name: map.value(Prefix::Name).map(parse_name).transpose()?,
        phone: map.value(Prefix::Phone).map(parse_phone).transpose()?,
        income: map.value(Prefix::Income).map(parse_income).transpose()?,
        email: map.value(Prefix::Email).map(parse_email).transpose()?,
        address: map.value(Prefix::Address).map(parse_address).transpose()?,
        family: map.value(Prefix::Family).map(parse_family).transpose()?,
        tags: if map.contains(Prefix::Tag) {
            Some(parse_tags(map.all_values(Prefix::Tag))?)
        } else {
            None
        },
        housing_type: map
            .value(Prefix::HousingType)
            .map(parse_housing_type)
            .transpose()?,
        remark: map.value(Prefix::Remark).map(parse_remark).transpose()?,
        birthday: map.value(Prefix::Birthday).map(parse_birthday).transpose()?,
    };
    Ok(Command::Edit { index, changes })
}
