//! Streaming matcher for compiled acmatch automata.
//!
//! Feeds a text through an [`acmatch_automaton::Automaton`] one symbol at a
//! time and yields every pattern occurrence as a [`acmatch_core::Match`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{Matcher, NoopTracer, PrintTracer, Tracer, Verbosity};
