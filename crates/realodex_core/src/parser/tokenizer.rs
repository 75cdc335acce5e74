//! Splits raw argument text into a preamble and prefixed values.
//!
//! # Invariants
//! - A prefix is recognized only at the start of the text or right after
//!   whitespace; anything else is literal text.
//! - Every occurrence of a prefix is kept, in input order. Duplicate
//!   detection is left to the prefix checker.
//! - Preamble and values are trimmed.

use super::prefix::Prefix;
use std::collections::BTreeMap;

/// Tokenized arguments of one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: BTreeMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value supplied for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.all_values(prefix).last().map(String::as_str)
    }

    /// Every value supplied for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        !self.all_values(prefix).is_empty()
    }

    pub fn occurrences(&self, prefix: Prefix) -> usize {
        self.all_values(prefix).len()
    }
}

/// Tokenizes `args`, recognizing only the given `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = find_prefix_positions(args, prefixes);
    positions.sort_unstable_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: BTreeMap::new(),
    };

    for (slot, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.marker().len();
        let value_end = positions
            .get(slot + 1)
            .map_or(args.len(), |(next_start, _)| *next_start);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    map
}

fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    for prefix in prefixes {
        if positions.iter().any(|(_, seen)| seen == prefix) {
            continue;
        }
        for (start, _) in args.match_indices(prefix.marker()) {
            let follows_whitespace = args[..start]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if follows_whitespace {
                positions.push((start, *prefix));
            }
        }
    }
    positions
}
