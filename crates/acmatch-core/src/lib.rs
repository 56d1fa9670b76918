#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for acmatch.
//!
//! Shared by every stage of the pipeline:
//! - **Alphabet**: [`Symbol`], the 26 lowercase ASCII letters
//! - **Outputs**: [`PatternId`] and the bitmask [`OutputSet`]
//! - **Events**: [`Match`], produced by the matcher
//! - **Errors**: [`Error`], shared by build and match

mod colors;
mod error;
mod output;
mod symbol;

#[cfg(test)]
mod output_tests;
#[cfg(test)]
mod symbol_tests;

pub use colors::Colors;
pub use error::{Error, Input, Result};
pub use output::{OutputIter, OutputSet, PatternId};
pub use symbol::{ALPHABET_SIZE, Symbol, encode, validate};

/// A single pattern occurrence in a text.
///
/// Offsets are 0-based and inclusive on both ends, so a one-letter pattern
/// has `start == end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Match {
    pub pattern: PatternId,
    pub start: usize,
    pub end: usize,
}

impl Match {
    /// Build the event for a pattern of `len` symbols ending at `end`.
    #[inline]
    pub fn ending_at(pattern: PatternId, len: usize, end: usize) -> Self {
        debug_assert!(len > 0 && len <= end + 1, "pattern longer than consumed text");
        Self {
            pattern,
            start: end + 1 - len,
            end,
        }
    }

    /// Number of symbols covered by the occurrence.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}
