//! Test utilities shared by the compiler test modules.

use acmatch_automaton::{Automaton, dump};
use acmatch_core::Colors;

/// Compile a pattern set that is known to be valid.
pub fn compile(patterns: &[&str]) -> Automaton {
    crate::build(patterns).unwrap_or_else(|e| panic!("patterns {patterns:?} must compile: {e}"))
}

/// Plain-text dump of a compiled pattern set.
pub fn dump_of(patterns: &[&str]) -> String {
    dump(&compile(patterns), Colors::OFF)
}

/// Trie path spelled by every node, indexed by node id.
pub fn paths(trie: &crate::Trie) -> Vec<String> {
    let mut paths = vec![String::new(); trie.nodes().len()];
    let mut stack = vec![acmatch_automaton::StateId::ROOT];
    while let Some(node) = stack.pop() {
        for symbol in acmatch_core::Symbol::all() {
            if let Some(child) = trie.node(node).child(symbol) {
                paths[child.index()] = format!("{}{symbol}", paths[node.index()]);
                stack.push(child);
            }
        }
    }
    paths
}
