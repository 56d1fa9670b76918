//! Breadth-first failure-link construction.

use std::collections::VecDeque;

use acmatch_automaton::{Automaton, State, StateId};
use acmatch_core::Symbol;

use crate::trie::{Trie, TrieNode};

/// Compiler state: the state arena being linked and the BFS frontier.
pub struct Compiler {
    states: Vec<State>,
    queue: VecDeque<StateId>,
}

impl Compiler {
    /// Compile a finished trie into an automaton.
    pub fn compile(trie: Trie) -> Automaton {
        let (nodes, patterns) = trie.into_parts();
        let mut compiler = Self {
            states: nodes.into_iter().map(into_state).collect(),
            queue: VecDeque::new(),
        };

        compiler.link_root_children();
        while let Some(current) = compiler.queue.pop_front() {
            compiler.link_children(current);
        }

        let automaton = Automaton::new(compiler.states, patterns);
        debug_assert!(
            automaton.verify().is_ok(),
            "compiled automaton failed verification: {:?}",
            automaton.verify()
        );
        automaton
    }

    /// Depth-1 nodes fail to the root (already set by `State::new`); absent
    /// root symbols are the root's self-loop and need no state.
    fn link_root_children(&mut self) {
        let root = &self.states[StateId::ROOT.index()];
        for (_, child) in root.edges() {
            self.queue.push_back(child);
        }
    }

    /// Link every literal child of an already-linked node.
    fn link_children(&mut self, current: StateId) {
        let parent_failure = self.states[current.index()].failure;

        for symbol in Symbol::all() {
            let Some(child) = self.states[current.index()].child(symbol) else {
                continue;
            };

            let failure = self.resolve(parent_failure, symbol);
            let inherited = self.states[failure.index()].output;

            let state = &mut self.states[child.index()];
            state.failure = failure;
            state.output |= inherited;

            self.queue.push_back(child);
        }
    }

    /// Walk failure links from `state` until a literal `symbol` edge exists.
    ///
    /// The root ends the walk: its missing edges loop back to itself.
    fn resolve(&self, mut state: StateId, symbol: Symbol) -> StateId {
        loop {
            let current = &self.states[state.index()];
            if let Some(next) = current.child(symbol) {
                return next;
            }
            if state.is_root() {
                return StateId::ROOT;
            }
            state = current.failure;
        }
    }
}

fn into_state(node: TrieNode) -> State {
    let mut state = State::new(node.depth());
    state.children = *node.children();
    state.output = node.tags();
    state
}
