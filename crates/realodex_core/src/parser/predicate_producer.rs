//! Turns a filter prefix and its keyphrases into a [`PersonPredicate`].
//!
//! # Responsibility
//! - Dispatch on the filter prefix and validate keyphrases with the field
//!   validators of that prefix.
//!
//! # Invariants
//! - Only [`FilterPrefix`] values reach the producer, so dispatch is total.
//! - Blank keyphrases are ignored; if none remain the filter usage is returned.
//! - Invalid tag, housing type or month keyphrases yield the field's
//!   constraint error rather than an empty match.

use super::error::ParseError;
use super::parser_util::{parse_housing_type, parse_tags};
use super::prefix::FilterPrefix;
use crate::command::usage::FILTER_USAGE;
use crate::model::birthday::parse_birth_month;
use crate::model::PersonPredicate;

pub const MESSAGE_EMPTY_KEYPHRASE: &str = "Filter keyphrases must not be empty.";

pub fn create_predicate(
    prefix: FilterPrefix,
    keyphrases: &[String],
) -> Result<PersonPredicate, ParseError> {
    let keyphrases = keyphrases
        .iter()
        .map(|keyphrase| keyphrase.trim())
        .filter(|keyphrase| !keyphrase.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();
    let Some(first) = keyphrases.first() else {
        return Err(ParseError::syntax(MESSAGE_EMPTY_KEYPHRASE, FILTER_USAGE));
    };

    let predicate = match prefix {
        FilterPrefix::Name => PersonPredicate::NameContains(first.clone()),
        FilterPrefix::Remark => PersonPredicate::RemarkContains(first.clone()),
        FilterPrefix::Tag => PersonPredicate::TagsMatch(parse_tags(&keyphrases)?),
        FilterPrefix::HousingType => PersonPredicate::HousingTypeMatch(parse_housing_type(first)?),
        FilterPrefix::Birthday => PersonPredicate::BirthdayInMonth(parse_birth_month(first)?),
    };
    Ok(predicate)
}
