//! Output sets: which patterns end at an automaton state.
//!
//! Stored as a `u64` bitmask, so union during failure-link propagation is a
//! single `|`. This caps a pattern set at [`OutputSet::CAPACITY`] entries.

use std::ops::{BitOr, BitOrAssign};

/// Index of a pattern in the order it was supplied to the builder.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct PatternId(u8);

impl PatternId {
    /// Create a pattern id, or `None` if it does not fit an [`OutputSet`].
    #[inline]
    pub fn new(index: usize) -> Option<Self> {
        (index < OutputSet::CAPACITY).then(|| Self(index as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Debug for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of pattern ids.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutputSet(u64);

impl OutputSet {
    /// Maximum number of distinct patterns.
    pub const CAPACITY: usize = u64::BITS as usize;

    pub const EMPTY: Self = Self(0);

    /// Reinterpret raw bits (used when loading binary images).
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn single(id: PatternId) -> Self {
        Self(1 << id.0)
    }

    #[inline]
    pub fn insert(&mut self, id: PatternId) {
        self.0 |= 1 << id.0;
    }

    #[inline]
    pub fn contains(self, id: PatternId) -> bool {
        self.0 & (1 << id.0) != 0
    }

    /// True when every member of `self` is also in `other`.
    #[inline]
    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Highest member, if any.
    pub fn max(self) -> Option<PatternId> {
        (!self.is_empty()).then(|| PatternId((u64::BITS - 1 - self.0.leading_zeros()) as u8))
    }

    /// Members in ascending order.
    #[inline]
    pub fn iter(self) -> OutputIter {
        OutputIter(self.0)
    }
}

impl BitOr for OutputSet {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutputSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<PatternId> for OutputSet {
    fn from_iter<I: IntoIterator<Item = PatternId>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl IntoIterator for OutputSet {
    type Item = PatternId;
    type IntoIter = OutputIter;

    fn into_iter(self) -> OutputIter {
        self.iter()
    }
}

impl std::fmt::Debug for OutputSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ascending iterator over an [`OutputSet`].
///
/// Pops the lowest set bit each step; callers that need to interleave other
/// work between members (like the matcher) can hold on to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputIter(u64);

impl Iterator for OutputIter {
    type Item = PatternId;

    #[inline]
    fn next(&mut self) -> Option<PatternId> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(PatternId(bit as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for OutputIter {}
