//! Tracing infrastructure for debugging the match loop.
//!
//! # Design: Zero-Cost Abstraction
//!
//! With `NoopTracer` every trait method is an `#[inline(always)]` empty
//! function, so the calls and their arguments compile away and the matcher
//! carries no tracing state of its own.
//!
//! # Design: Tracer-Owned State
//!
//! A step is reported as several calls (symbol, failure hops, goto). The
//! `PrintTracer` buffers the pieces itself and writes one line when the step
//! completes.

use acmatch_automaton::{Automaton, StateId, width_for_count};
use acmatch_core::{Colors, Match, Symbol};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per symbol and one per match.
    #[default]
    Default,
    /// Also show the failure links followed on each step.
    Verbose,
}

/// Tracer trait for match loop instrumentation.
///
/// Each method is called at a specific point of a step:
/// - `trace_symbol` - before a symbol is consumed
/// - `trace_failure` - for every failure link followed
/// - `trace_goto` - when a defined transition is taken
/// - `trace_match` - before a match event is yielded
pub trait Tracer {
    /// Called before consuming the symbol at `offset` in `state`.
    fn trace_symbol(&mut self, offset: usize, symbol: Symbol, state: StateId);

    /// Called when `from` has no edge for the symbol and falls back to `to`.
    fn trace_failure(&mut self, from: StateId, to: StateId);

    /// Called when the transition `from --symbol--> to` is taken.
    fn trace_goto(&mut self, from: StateId, symbol: Symbol, to: StateId);

    /// Called for every match event.
    fn trace_match(&mut self, found: &Match);
}

impl<T: Tracer + ?Sized> Tracer for &mut T {
    #[inline(always)]
    fn trace_symbol(&mut self, offset: usize, symbol: Symbol, state: StateId) {
        (**self).trace_symbol(offset, symbol, state)
    }

    #[inline(always)]
    fn trace_failure(&mut self, from: StateId, to: StateId) {
        (**self).trace_failure(from, to)
    }

    #[inline(always)]
    fn trace_goto(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        (**self).trace_goto(from, symbol, to)
    }

    #[inline(always)]
    fn trace_match(&mut self, found: &Match) {
        (**self).trace_match(found)
    }
}

/// No-op tracer that gets optimized away completely.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_symbol(&mut self, _offset: usize, _symbol: Symbol, _state: StateId) {}

    #[inline(always)]
    fn trace_failure(&mut self, _from: StateId, _to: StateId) {}

    #[inline(always)]
    fn trace_goto(&mut self, _from: StateId, _symbol: Symbol, _to: StateId) {}

    #[inline(always)]
    fn trace_match(&mut self, _found: &Match) {}
}

/// Symbol being consumed, waiting for its goto.
struct PendingStep {
    offset: usize,
    symbol: Symbol,
    from: StateId,
    hops: Vec<StateId>,
}

/// Tracer that collects a readable log of the match loop.
///
/// ```text
/// 3 e  4 -> 5
///     => he [2, 3]
/// 4 r  5 ~2 -> 8
/// ```
pub struct PrintTracer<'a> {
    automaton: &'a Automaton,
    verbosity: Verbosity,
    lines: Vec<String>,
    pending: Option<PendingStep>,
    offset_width: usize,
    state_width: usize,
    colors: Colors,
}

impl<'a> PrintTracer<'a> {
    pub fn new(text: &str, automaton: &'a Automaton, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            automaton,
            verbosity,
            lines: Vec::new(),
            pending: None,
            offset_width: width_for_count(text.len()),
            state_width: width_for_count(automaton.state_count()),
            colors,
        }
    }

    /// Collected trace lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn add_step(&mut self, step: PendingStep, to: StateId) {
        let c = self.colors;
        let mut line = format!(
            "{} {}  {}",
            c.faint(format_args!("{:>w$}", step.offset, w = self.offset_width)),
            c.pattern(step.symbol),
            c.state(format_args!("{:>w$}", step.from, w = self.state_width)),
        );
        if self.verbosity == Verbosity::Verbose {
            for hop in &step.hops {
                line.push(' ');
                line.push_str(&c.faint(format_args!("~{hop}")));
            }
        }
        line.push_str(&format!(" -> {}", c.state(to)));
        self.lines.push(line);
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_symbol(&mut self, offset: usize, symbol: Symbol, state: StateId) {
        self.pending = Some(PendingStep {
            offset,
            symbol,
            from: state,
            hops: Vec::new(),
        });
    }

    fn trace_failure(&mut self, _from: StateId, to: StateId) {
        if let Some(step) = &mut self.pending {
            step.hops.push(to);
        }
    }

    fn trace_goto(&mut self, _from: StateId, _symbol: Symbol, to: StateId) {
        if let Some(step) = self.pending.take() {
            self.add_step(step, to);
        }
    }

    fn trace_match(&mut self, found: &Match) {
        let c = self.colors;
        let name = self.automaton.pattern(found.pattern);
        self.lines.push(format!(
            "{:indent$}=> {} [{}, {}]",
            "",
            c.pattern(name),
            found.start,
            found.end,
            indent = self.offset_width + 4,
        ));
    }
}
