//! Prefix tree nodes
//!
//! Nodes live in a single arena owned by the `Trie`. Child links are arena
//! handles, so the search can hold a position in the tree while the pass
//! prunes other nodes.

/// Number of child slots per node, one per letter a-z
pub const ALPHABET_SIZE: usize = 26;

/// Handle to a node in its trie's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node, always the first arena slot
    pub const ROOT: Self = Self(0);

    #[inline]
    pub(crate) const fn new(slot: usize) -> Self {
        Self(slot as u32)
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        self.0 as usize
    }
}

/// Map a lowercase ASCII letter to its child slot
#[inline]
#[must_use]
pub const fn letter_slot(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// One branching point of the prefix tree
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) is_end: bool,
    pub(crate) count: u32,
    pub(crate) index: usize,
}

impl TrieNode {
    /// Child reached by `letter`, if any
    #[inline]
    #[must_use]
    pub const fn child(&self, letter: u8) -> Option<NodeId> {
        self.children[letter_slot(letter)]
    }

    /// Whether a word currently ends here
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.is_end
    }

    /// Number of active words passing through this node
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Dictionary index of the word ending here
    #[inline]
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        if self.is_end { Some(self.index) } else { None }
    }

    /// Whether any active word still passes through this node
    #[inline]
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.count > 0
    }
}
