//! Structural checks over tokenized arguments.
//!
//! # Responsibility
//! - Answer presence / absence / preamble questions before any field is built.
//! - Reject prefixes supplied more often than allowed.
//!
//! # Invariants
//! - The tag prefix may appear up to [`MAX_TAG_OCCURRENCES`] times; every
//!   other prefix at most once.

use super::error::ParseError;
use super::prefix::Prefix;
use super::tokenizer::ArgumentMultimap;

pub const MAX_TAG_OCCURRENCES: usize = 2;

/// Read-only view answering structural questions about one multimap.
#[derive(Debug, Clone, Copy)]
pub struct PrefixChecker<'a> {
    map: &'a ArgumentMultimap,
}

impl<'a> PrefixChecker<'a> {
    pub fn new(map: &'a ArgumentMultimap) -> Self {
        Self { map }
    }

    /// True when at least one of `prefixes` occurs.
    pub fn any_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().any(|prefix| self.map.contains(*prefix))
    }

    /// True when more than one distinct prefix of `prefixes` occurs.
    pub fn more_than_one_type_present(&self, prefixes: &[Prefix]) -> bool {
        let mut present = prefixes
            .iter()
            .filter(|prefix| self.map.contains(**prefix))
            .collect::<Vec<_>>();
        present.sort_unstable();
        present.dedup();
        present.len() > 1
    }

    pub fn empty_preamble(&self) -> bool {
        self.map.preamble().trim().is_empty()
    }

    /// Fails listing every prefix of `prefixes` that occurs too often.
    pub fn check_no_duplicates(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let mut offending: Vec<Prefix> = Vec::new();
        for prefix in prefixes {
            if self.is_duplicated(*prefix) && !offending.contains(prefix) {
                offending.push(*prefix);
            }
        }
        if offending.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(offending))
        }
    }

    /// First prefix of `prefixes`, in the given order, that occurs.
    pub fn find_first_present(&self, prefixes: &[Prefix]) -> Option<Prefix> {
        prefixes
            .iter()
            .copied()
            .find(|prefix| self.map.contains(*prefix))
    }

    fn is_duplicated(&self, prefix: Prefix) -> bool {
        self.map.occurrences(prefix) > max_occurrences(prefix)
    }
}

fn max_occurrences(prefix: Prefix) -> usize {
    match prefix {
        Prefix::Tag => MAX_TAG_OCCURRENCES,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::PrefixChecker;
    use crate::parser::error::ParseError;
    use crate::parser::prefix::Prefix;
    use crate::parser::tokenizer::tokenize;

    #[test]
    fn presence_queries() {
        let map = tokenize(" n/Ann r/nice", &Prefix::ALL);
        let checker = PrefixChecker::new(&map);
        assert!(checker.any_present(&[Prefix::Phone, Prefix::Name]));
        assert!(!checker.any_present(&[Prefix::Phone, Prefix::Tag]));
        assert!(checker.more_than_one_type_present(&[Prefix::Name, Prefix::Remark]));
        assert!(!checker.more_than_one_type_present(&[Prefix::Name, Prefix::Name, Prefix::Tag]));
        assert!(checker.empty_preamble());
    }

    #[test]
    fn non_blank_preamble_is_detected() {
        let map = tokenize("1 n/Ann", &[Prefix::Name]);
        assert!(!PrefixChecker::new(&map).empty_preamble());
    }

    #[test]
    fn tag_may_repeat_twice_but_not_three_times() {
        let twice = tokenize(" t/buyer t/seller", &[Prefix::Tag]);
        assert!(PrefixChecker::new(&twice)
            .check_no_duplicates(&[Prefix::Tag])
            .is_ok());

        let thrice = tokenize(" t/buyer t/seller t/buyer", &[Prefix::Tag]);
        assert_eq!(
            PrefixChecker::new(&thrice).check_no_duplicates(&[Prefix::Tag]),
            Err(ParseError::DuplicatePrefixes(vec![Prefix::Tag]))
        );
    }

    #[test]
    fn other_prefixes_fail_on_second_occurrence() {
        let map = tokenize(" n/James n/John p/1 p/2 t/buyer", &Prefix::ALL);
        assert_eq!(
            PrefixChecker::new(&map).check_no_duplicates(&Prefix::ALL),
            Err(ParseError::DuplicatePrefixes(vec![Prefix::Name, Prefix::Phone]))
        );
    }

    #[test]
    fn find_first_present_respects_caller_order() {
        let map = tokenize(" r/x n/y", &Prefix::ALL);
        let checker = PrefixChecker::new(&map);
        assert_eq!(
            checker.find_first_present(&[Prefix::Tag, Prefix::Remark, Prefix::Name]),
            Some(Prefix::Remark)
        );
        assert_eq!(
            checker.find_first_present(&[Prefix::Name, Prefix::Remark]),
            Some(Prefix::Name)
        );

        let only_b = tokenize(" r/x", &Prefix::ALL);
        assert_eq!(
            PrefixChecker::new(&only_b).find_first_present(&[Prefix::Name, Prefix::Remark]),
            Some(Prefix::Remark)
        );
        assert_eq!(
            PrefixChecker::new(&only_b).find_first_present(&[Prefix::Name, Prefix::Phone]),
            None
        );
    }
}
