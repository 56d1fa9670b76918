//! Automaton compilation: trie to failure-linked automaton.
//!
//! Failure links are computed breadth-first, so a node's parent (and every
//! shallower node) is resolved before the node itself. Each node inherits
//! the output of its failure target as it is linked.

mod compiler;


pub use compiler::Compiler;
