//! One-based position in the displayed contact list.

use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// Position a user types, always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    pub fn from_zero_based(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
