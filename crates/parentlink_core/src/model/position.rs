//! Positions in the caller-visible contact list.

use std::fmt::{Display, Formatter};

/// Zero-based index into the currently visible (filtered) contact list.
///
/// User-facing text shows the one-based form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayPosition(usize);

impl DisplayPosition {
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    /// Returns `None` for `0`, which has no one-based meaning.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl Display for DisplayPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
