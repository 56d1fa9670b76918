//! Input alphabet.
//!
//! Patterns and texts are restricted to `a`-`z`. Every symbol maps to a dense
//! index in `0..ALPHABET_SIZE` so automaton states can keep their children in
//! a fixed-size array.

use crate::error::{Error, Input, Result};

/// Number of distinct symbols.
pub const ALPHABET_SIZE: usize = 26;

/// A validated input symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Map an ASCII byte to a symbol.
    #[inline]
    pub fn from_byte(byte: u8) -> Option<Self> {
        byte.is_ascii_lowercase().then(|| Self(byte - b'a'))
    }

    /// Map a char to a symbol.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::from_byte)
    }

    /// Symbol at a dense index, if in range.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_SIZE).then(|| Self(index as u8))
    }

    /// Dense index in `0..ALPHABET_SIZE`.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Every symbol, in alphabet order.
    pub fn all() -> impl Iterator<Item = Symbol> {
        (0..ALPHABET_SIZE as u8).map(Symbol)
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.to_char())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Validate and encode a whole input.
///
/// Fails on the first character outside the alphabet; `offset` in the error
/// is the byte offset of that character.
pub fn encode(s: &str, input: Input) -> Result<Vec<Symbol>> {
    s.char_indices()
        .map(|(offset, found)| {
            Symbol::from_char(found).ok_or(Error::InvalidAlphabet {
                input,
                offset,
                found,
            })
        })
        .collect()
}

/// Check that an input is entirely within the alphabet without encoding it.
pub fn validate(s: &str, input: Input) -> Result<()> {
    match s.char_indices().find(|&(_, c)| Symbol::from_char(c).is_none()) {
        Some((offset, found)) => Err(Error::InvalidAlphabet {
            input,
            offset,
            found,
        }),
        None => Ok(()),
    }
}
