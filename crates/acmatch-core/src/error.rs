//! Errors shared by automaton construction and matching.

use std::fmt;

/// Which input an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// The pattern at this index.
    Pattern(usize),
    /// The text being matched.
    Text,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Pattern(index) => write!(f, "pattern #{index}"),
            Input::Text => f.write_str("text"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A pattern or text symbol falls outside `a`-`z`.
    #[error("invalid symbol {found:?} in {input} at offset {offset} (expected a-z)")]
    InvalidAlphabet {
        input: Input,
        offset: usize,
        found: char,
    },

    /// More patterns than an output set can hold.
    #[error("too many patterns: {count} (maximum {max})")]
    TooManyPatterns { count: usize, max: usize },

    /// Patterns must contain at least one symbol.
    #[error("pattern #{pattern} is empty")]
    EmptyPattern { pattern: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
