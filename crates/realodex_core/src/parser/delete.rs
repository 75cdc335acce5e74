//! `delete INDEX` or `delete n/NAME`.
//!
//! # Invariants
//! - Exactly one of the index preamble and the name prefix is accepted.
//! - Structural checks run before either value is validated.

use super::error::ParseError;
use super::parser_util::{parse_index, parse_name};
use super::prefix::Prefix;
use super::prefix_checker::PrefixChecker;
use super::tokenizer::tokenize;
use crate::command::usage::DELETE_USAGE;
use crate::command::{Command, DeleteTarget};

pub const MESSAGE_INDEX_AND_NAME_PROVIDED: &str =
    "Index and name both provided. Please provide only one of them.";
pub const MESSAGE_NO_FIELDS_PROVIDED: &str =
    "No fields provided. Please provide either an index or a name.";

pub fn parse_delete(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[Prefix::Name]);
    let checker = PrefixChecker::new(&map);
    let has_index = !checker.empty_preamble();

    match (has_index, checker.find_first_present(&[Prefix::Name])) {
        (true, Some(_)) => Err(ParseError::syntax(
            MESSAGE_INDEX_AND_NAME_PROVIDED,
            DELETE_USAGE,
        )),
        (false, None) => Err(ParseError::syntax(MESSAGE_NO_FIELDS_PROVIDED, DELETE_USAGE)),
        (false, Some(prefix)) => {
            checker.check_no_duplicates(&[prefix])?;
            let raw = map.value(prefix).unwrap_or_default();
            Ok(Command::Delete(DeleteTarget::Name(parse_name(raw)?)))
        }
        (true, None) => {
            let index = parse_index(map.preamble(), DELETE_USAGE)?;
            Ok(Command::Delete(DeleteTarget::Index(index)))
        }
    }
}
