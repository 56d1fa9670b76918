//! acmatch compiler: pattern set to Aho-Corasick automaton.
//!
//! Two stages:
//! - `trie` - inserts patterns into a prefix trie, tagging terminal nodes
//! - `compile` - breadth-first failure links and output propagation
//!
//! [`build`] runs both.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod trie;

#[cfg(test)]
pub mod test_utils;

pub use acmatch_core::{Error, Result};
pub use compile::Compiler;
pub use trie::{Trie, TrieBuilder, TrieNode};

use acmatch_automaton::Automaton;

/// Build a compiled automaton from an ordered pattern set.
///
/// Pattern `i` is reported as `PatternId` `i`. Fails before allocating any
/// state if the set is too large, and before compiling if any pattern is
/// empty or contains a symbol outside `a`-`z`.
pub fn build<S: AsRef<str>>(patterns: &[S]) -> Result<Automaton> {
    let trie = TrieBuilder::from_patterns(patterns)?;
    Ok(Compiler::compile(trie))
}
