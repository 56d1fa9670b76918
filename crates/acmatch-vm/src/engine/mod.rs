//! Match engine.
//!
//! [`Matcher`] drives the automaton over a text and is itself the lazy
//! sequence of match events. A [`Tracer`] observes every step.

mod matcher;
mod trace;

#[cfg(test)]
mod matcher_tests;

pub use matcher::Matcher;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
