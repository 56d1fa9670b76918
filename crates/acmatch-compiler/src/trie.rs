//! Prefix trie of the pattern set.
//!
//! One node per distinct prefix. Terminal nodes carry the ids of every
//! pattern ending there, so duplicate patterns share a node and both ids
//! survive. Only parent-to-child edges exist at this stage.

use acmatch_automaton::StateId;
use acmatch_core::{ALPHABET_SIZE, Error, Input, OutputSet, PatternId, Result, Symbol, encode};

/// A trie node. Node ids become automaton state ids unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode {
    children: [Option<StateId>; ALPHABET_SIZE],
    tags: OutputSet,
    depth: u32,
}

impl TrieNode {
    fn new(depth: u32) -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            tags: OutputSet::EMPTY,
            depth,
        }
    }

    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<StateId> {
        self.children[symbol.index()]
    }

    pub fn children(&self) -> &[Option<StateId>; ALPHABET_SIZE] {
        &self.children
    }

    /// Patterns whose last symbol lands on this node.
    pub fn tags(&self) -> OutputSet {
        self.tags
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// A completed trie plus the patterns it was built from.
#[derive(Clone, Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    patterns: Vec<String>,
}

impl Trie {
    pub fn root(&self) -> &TrieNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: StateId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Node reached by spelling `prefix` from the root.
    pub fn find(&self, prefix: &str) -> Option<StateId> {
        prefix.bytes().try_fold(StateId::ROOT, |node, byte| {
            self.node(node).child(Symbol::from_byte(byte)?)
        })
    }

    pub(crate) fn into_parts(self) -> (Vec<TrieNode>, Vec<String>) {
        (self.nodes, self.patterns)
    }
}

/// Incremental trie construction.
#[derive(Clone, Debug)]
pub struct TrieBuilder {
    nodes: Vec<TrieNode>,
    patterns: Vec<String>,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieBuilder {
    /// A trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new(0)],
            patterns: Vec::new(),
        }
    }

    /// Build a trie from a whole pattern set.
    ///
    /// The set size is checked before anything is inserted.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Trie> {
        if patterns.len() > OutputSet::CAPACITY {
            return Err(Error::TooManyPatterns {
                count: patterns.len(),
                max: OutputSet::CAPACITY,
            });
        }

        let mut builder = Self::new();
        for pattern in patterns {
            builder.insert(pattern.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Insert the next pattern and return its id.
    ///
    /// The pattern is validated in full before any node is allocated, so a
    /// failed insert leaves the trie untouched.
    pub fn insert(&mut self, pattern: &str) -> Result<PatternId> {
        let index = self.patterns.len();
        let id = PatternId::new(index).ok_or(Error::TooManyPatterns {
            count: index + 1,
            max: OutputSet::CAPACITY,
        })?;
        if pattern.is_empty() {
            return Err(Error::EmptyPattern { pattern: index });
        }
        let symbols = encode(pattern, Input::Pattern(index))?;

        let mut node = StateId::ROOT;
        for symbol in symbols {
            node = match self.nodes[node.index()].child(symbol) {
                Some(child) => child,
                None => self.add_child(node, symbol),
            };
        }
        self.nodes[node.index()].tags.insert(id);
        self.patterns.push(pattern.to_owned());
        Ok(id)
    }

    /// Number of nodes allocated so far, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn finish(self) -> Trie {
        Trie {
            nodes: self.nodes,
            patterns: self.patterns,
        }
    }

    fn add_child(&mut self, parent: StateId, symbol: Symbol) -> StateId {
        let child = StateId::new(self.nodes.len() as u32);
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(TrieNode::new(depth));
        self.nodes[parent.index()].children[symbol.index()] = Some(child);
        child
    }
}
