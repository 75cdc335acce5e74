//! `filter [n/KEYPHRASE] [r/KEYPHRASE] [t/TAG]... [h/HOUSINGTYPE] [b/MONTH]`.

use super::error::ParseError;
use super::predicate_producer::create_predicate;
use super::prefix::FilterPrefix;
use super::prefix_checker::PrefixChecker;
use super::tokenizer::tokenize;
use crate::command::usage::FILTER_USAGE;
use crate::command::Command;
use crate::model::PersonPredicate;

pub const MESSAGE_NO_FILTER: &str = "At least one filter must be provided.";
pub const MESSAGE_UNEXPECTED_PREAMBLE: &str = "Filters must start with a prefix.";

pub fn parse_filter(args: &str) -> Result<Command, ParseError> {
    let prefixes = FilterPrefix::prefixes();
    let map = tokenize(args, &prefixes);
    let checker = PrefixChecker::new(&map);

    if !checker.any_present(&prefixes) {
        return Err(ParseError::syntax(MESSAGE_NO_FILTER, FILTER_USAGE));
    }
    if !checker.empty_preamble() {
        return Err(ParseError::syntax(MESSAGE_UNEXPECTED_PREAMBLE, FILTER_USAGE));
    }
    checker.check_no_duplicates(&prefixes)?;

    if !checker.more_than_one_type_present(&prefixes) {
        let filter = checker
            .find_first_present(&prefixes)
            .and_then(|prefix| FilterPrefix::try_from(prefix).ok())
            .ok_or_else(|| ParseError::syntax(MESSAGE_NO_FILTER, FILTER_USAGE))?;
        let predicate = create_predicate(filter, map.all_values(filter.prefix()))?;
        return Ok(Command::Filter(predicate));
    }

    let predicates = FilterPrefix::ALL
        .into_iter()
        .filter(|filter| map.contains(filter.prefix()))
        .map(|filter| create_predicate(filter, map.all_values(filter.prefix())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Command::Filter(PersonPredicate::all(predicates)))
}
