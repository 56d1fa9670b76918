//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// Narrow a size to the image's `u32` fields.
///
/// Automata are bounded by the total pattern length, far below `u32::MAX`.
pub(crate) fn ensure_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value)
        .unwrap_or_else(|_| panic!("image encoding: {what} {value} does not fit in u32"))
}
