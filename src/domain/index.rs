//! Index into a displayed list of patients.

use std::fmt;

/// A position in a list.
///
/// Users refer to entries one-based (the first patient is `1`); internally
/// the index is stored zero-based. The two conversions keep that boundary
/// explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for `0`, which has no zero-based counterpart.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
