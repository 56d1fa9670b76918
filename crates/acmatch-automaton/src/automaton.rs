//! State arena for a compiled automaton.
//!
//! States live in a single `Vec` and refer to each other by [`StateId`].
//! Trie edges point away from the root, failure links point back toward it,
//! so the graph has cycles through the root; index references keep that
//! free of ownership concerns.

use acmatch_core::{ALPHABET_SIZE, OutputSet, PatternId, Symbol};

/// Index of a state in the automaton arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The unique entry state.
    pub const ROOT: StateId = StateId(0);

    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Debug for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One automaton state.
///
/// `children` holds literal trie edges only; absent symbols are resolved
/// through `failure` at match time. The root's failure is the root itself
/// and is never followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub children: [Option<StateId>; ALPHABET_SIZE],
    pub failure: StateId,
    /// Patterns ending here, including those inherited through failure links.
    pub output: OutputSet,
    /// Length of the trie path from the root.
    pub depth: u32,
}

impl State {
    /// A fresh state with no edges, failing to the root.
    pub fn new(depth: u32) -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            failure: StateId::ROOT,
            output: OutputSet::EMPTY,
            depth,
        }
    }

    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<StateId> {
        self.children[symbol.index()]
    }

    /// Literal edges in symbol order.
    pub fn edges(&self) -> impl Iterator<Item = (Symbol, StateId)> + '_ {
        Symbol::all().filter_map(|sym| self.child(sym).map(|target| (sym, target)))
    }
}

/// A compiled, immutable Aho-Corasick automaton.
///
/// Produced by the compiler or loaded from a binary image. Matching only
/// ever borrows it, so one automaton can serve any number of concurrent
/// passes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<State>,
    patterns: Vec<String>,
}

impl Automaton {
    /// Assemble an automaton from compiled parts.
    ///
    /// The caller guarantees the structural invariants (see
    /// [`verify`](Self::verify)); images loaded from bytes are checked.
    pub fn new(states: Vec<State>, patterns: Vec<String>) -> Self {
        debug_assert!(!states.is_empty(), "automaton needs a root state");
        Self { states, patterns }
    }

    #[inline]
    pub fn root(&self) -> StateId {
        StateId::ROOT
    }

    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of states, root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn pattern(&self, id: PatternId) -> &str {
        &self.patterns[id.index()]
    }

    /// Symbol length of a pattern (patterns are ASCII, so bytes == symbols).
    #[inline]
    pub fn pattern_len(&self, id: PatternId) -> usize {
        self.patterns[id.index()].len()
    }

    /// Goto function: the literal child, or the root's self-loop.
    ///
    /// `None` means the caller must fall back along the failure link.
    #[inline]
    pub fn goto(&self, state: StateId, symbol: Symbol) -> Option<StateId> {
        match self.state(state).child(symbol) {
            Some(next) => Some(next),
            None if state.is_root() => Some(StateId::ROOT),
            None => None,
        }
    }

    #[inline]
    pub fn failure(&self, state: StateId) -> StateId {
        self.state(state).failure
    }

    #[inline]
    pub fn output(&self, state: StateId) -> OutputSet {
        self.state(state).output
    }

    /// Total transition function.
    ///
    /// Walks failure links until a goto is defined; the root's self-loop
    /// ends every walk.
    pub fn next_state(&self, mut state: StateId, symbol: Symbol) -> StateId {
        loop {
            if let Some(next) = self.goto(state, symbol) {
                return next;
            }
            state = self.failure(state);
        }
    }
}
