//! Dictionary prefix tree
//!
//! Fixed 26-way branching nodes with per-node active word counts, plus the
//! pass session that prunes and restores words around one search.

mod node;
mod pass;
mod tree;

pub use node::{ALPHABET_SIZE, NodeId, TrieNode, letter_slot};
pub use pass::Pass;
pub use tree::{MIN_WORD_LEN, Trie};
