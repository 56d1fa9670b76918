//! The match loop.

use acmatch_automaton::{Automaton, StateId};
use acmatch_core::{Input, Match, OutputIter, OutputSet, Result, Symbol, validate};

use super::trace::{NoopTracer, Tracer};

/// Lazy sequence of match events for one text.
///
/// The automaton is only borrowed, so any number of matchers can run over
/// the same automaton at once. Events come out by end position, and by
/// ascending pattern id within one position.
pub struct Matcher<'a, T: Tracer = NoopTracer> {
    automaton: &'a Automaton,
    text: &'a [u8],
    /// Number of symbols consumed so far.
    pos: usize,
    state: StateId,
    /// Outputs of `state` not yet emitted.
    pending: OutputIter,
    tracer: T,
}

impl<'a> Matcher<'a> {
    /// Prepare to match `text`.
    ///
    /// The whole text is checked up front, so an invalid symbol anywhere
    /// fails here and no event is ever produced for it.
    pub fn new(automaton: &'a Automaton, text: &'a str) -> Result<Self> {
        validate(text, Input::Text)?;
        Ok(Self {
            automaton,
            text: text.as_bytes(),
            pos: 0,
            state: automaton.root(),
            pending: OutputSet::EMPTY.iter(),
            tracer: NoopTracer,
        })
    }
}

impl<'a, T: Tracer> Matcher<'a, T> {
    /// Replace the tracer. Intended to be called before the first event.
    pub fn with_tracer<U: Tracer>(self, tracer: U) -> Matcher<'a, U> {
        Matcher {
            automaton: self.automaton,
            text: self.text,
            pos: self.pos,
            state: self.state,
            pending: self.pending,
            tracer,
        }
    }

    /// State reached after the symbols consumed so far.
    pub fn state(&self) -> StateId {
        self.state
    }

    /// Number of symbols consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    fn step(&mut self, symbol: Symbol) {
        let offset = self.pos;
        self.tracer.trace_symbol(offset, symbol, self.state);

        let mut state = self.state;
        let next = loop {
            if let Some(next) = self.automaton.goto(state, symbol) {
                break next;
            }
            let failure = self.automaton.failure(state);
            self.tracer.trace_failure(state, failure);
            state = failure;
        };
        self.tracer.trace_goto(state, symbol, next);

        self.pos += 1;
        self.state = next;
        self.pending = self.automaton.output(next).iter();
    }
}

impl<T: Tracer> Iterator for Matcher<'_, T> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(pattern) = self.pending.next() {
                let len = self.automaton.pattern_len(pattern);
                let found = Match::ending_at(pattern, len, self.pos - 1);
                self.tracer.trace_match(&found);
                return Some(found);
            }

            let &byte = self.text.get(self.pos)?;
            // the text was validated in `new`
            let symbol = Symbol::from_byte(byte)?;
            self.step(symbol);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), None)
    }
}

impl<T: Tracer> std::iter::FusedIterator for Matcher<'_, T> {}
