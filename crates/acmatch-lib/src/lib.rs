//! acmatch: Aho-Corasick multi-pattern matching.
//!
//! Compile a set of lowercase patterns once, then stream any number of texts
//! through the automaton. Every occurrence is reported, including
//! overlapping and nested ones.
//!
//! # Example
//!
//! ```
//! let automaton = acmatch::build(&["he", "she", "his", "hers"])?;
//!
//! for found in acmatch::find(&automaton, "ushers")? {
//!     let word = automaton.pattern(found.pattern);
//!     println!("Word {word} appears from {} to {}", found.start, found.end);
//! }
//! # Ok::<(), acmatch::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub use acmatch_automaton::{Automaton, ImageError, State, StateId, dump};
pub use acmatch_compiler::{Trie, TrieBuilder, build};
pub use acmatch_core::{
    ALPHABET_SIZE, Colors, Error, Input, Match, OutputSet, PatternId, Result, Symbol,
};
pub use acmatch_vm::{Matcher, NoopTracer, PrintTracer, Tracer, Verbosity};

/// Stream `text` through `automaton`.
///
/// Fails with [`Error::InvalidAlphabet`] before producing any event if the
/// text holds a symbol outside `a`-`z`. Each call starts from the root, so
/// repeated calls yield the same events.
pub fn find<'a>(automaton: &'a Automaton, text: &'a str) -> Result<Matcher<'a>> {
    Matcher::new(automaton, text)
}

/// Compile `patterns` and collect every match in `text`.
pub fn find_all<S: AsRef<str>>(patterns: &[S], text: &str) -> Result<Vec<Match>> {
    let automaton = build(patterns)?;
    Ok(find(&automaton, text)?.collect())
}
