//! Dictionary prefix tree
//!
//! The trie keeps a per-node count of the active words passing through it.
//! A solve pass prunes each word as it is found, which lets the search skip
//! branches with nothing left to find, then reinserts the found words so the
//! next pass sees the whole dictionary again.

use super::node::{NodeId, TrieNode, letter_slot};
use super::pass::Pass;
use crate::core::WordKey;
use crate::wordlists::{DictionaryError, is_dictionary_word};
use log::debug;

/// Words must be longer than three letters to be searchable
pub const MIN_WORD_LEN: usize = 4;

/// Prefix tree over an immutable word list
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    words: Vec<String>,
    searchable: usize,
}

impl Trie {
    /// Build a trie over `words`
    ///
    /// Every word keeps its position in the list as its dictionary index.
    /// Words of three letters or fewer stay in the list but are not inserted.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` for an empty list and
    /// `DictionaryError::InvalidWord` for any entry that is not lowercase a-z.
    ///
    /// # Examples
    /// ```
    /// use word_box_solver::trie::Trie;
    ///
    /// let trie = Trie::new(["cat", "cats", "at"]).unwrap();
    /// assert!(trie.contains("cats"));
    /// assert!(!trie.contains("cat")); // too short to search for
    /// assert_eq!(trie.word(1), Some("cats"));
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        if let Some((index, word)) = words
            .iter()
            .enumerate()
            .find(|(_, word)| !is_dictionary_word(word))
        {
            return Err(DictionaryError::InvalidWord {
                index,
                word: word.clone(),
            });
        }

        let mut trie = Self {
            nodes: vec![TrieNode::default()],
            words,
            searchable: 0,
        };
        trie.build();

        debug!(
            "Built trie: {} words, {} searchable, {} nodes",
            trie.words.len(),
            trie.searchable,
            trie.nodes.len()
        );

        Ok(trie)
    }

    /// Insert every eligible word from the list
    fn build(&mut self) {
        for index in 0..self.words.len() {
            if self.words[index].len() >= MIN_WORD_LEN {
                let word = std::mem::take(&mut self.words[index]);
                self.insert(&word, index);
                self.words[index] = word;
                self.searchable += 1;
            }
        }
    }

    /// Insert a word, counting it on every node along its path
    ///
    /// The terminal node is marked as a word end carrying `word_id`.
    ///
    /// # Panics
    /// Panics if `word` contains a byte outside `a-z`; `Trie::new` rejects
    /// such words and `rebuild` skips them.
    pub(crate) fn insert(&mut self, word: &str, word_id: usize) {
        let mut node = NodeId::ROOT;
        for letter in word.bytes() {
            let slot = letter_slot(letter);
            let next = match self.nodes[node.slot()].children[slot] {
                Some(child) => child,
                None => {
                    let child = NodeId::new(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[node.slot()].children[slot] = Some(child);
                    child
                }
            };
            node = next;
            self.nodes[node.slot()].count += 1;
        }

        let terminal = &mut self.nodes[node.slot()];
        terminal.is_end = true;
        terminal.index = word_id;
    }

    /// Take one count off every node along `word`'s path
    ///
    /// Structure, word ends and indices are left alone so `rebuild` can
    /// restore the counts. Words not present in the trie are ignored.
    pub fn prune(&mut self, word: &str) {
        let Some(path) = self.node_path(word) else {
            return;
        };

        for node in path {
            let node = &mut self.nodes[node.slot()];
            debug_assert!(node.count > 0, "pruned a node with no active words");
            node.count = node.count.saturating_sub(1);
        }
    }

    /// Reinsert words found during a pass, undoing their pruning
    ///
    /// Keys that are too short or not lowercase a-z were never inserted, so
    /// they are skipped.
    pub(crate) fn rebuild<'a>(&mut self, found: impl IntoIterator<Item = &'a WordKey>) {
        for key in found {
            if key.text.len() >= MIN_WORD_LEN && is_dictionary_word(&key.text) {
                self.insert(&key.text, key.index);
            }
        }
    }

    /// Start a solve pass
    ///
    /// The returned session borrows the trie for the whole pass and restores
    /// every pruned word when it finishes or is dropped.
    pub fn begin_pass(&mut self) -> Pass<'_> {
        Pass::new(self)
    }

    /// Handle of the root node
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Borrow a node
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.slot()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.slot()]
    }

    /// Child of `id` reached by `letter`, if it still has active words
    #[inline]
    #[must_use]
    pub fn live_child(&self, id: NodeId, letter: u8) -> Option<NodeId> {
        self.node(id)
            .child(letter)
            .filter(|&child| self.node(child).is_live())
    }

    /// The word at a dictionary index
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// The full word list, including words too short to search for
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words inserted into the tree
    #[must_use]
    pub const fn len(&self) -> usize {
        self.searchable
    }

    /// Whether no word was long enough to insert
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.searchable == 0
    }

    /// Number of nodes in the tree, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `word` can currently be found
    ///
    /// True when every node on its path is live and a word ends at the last one.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node_path(word).is_some_and(|path| {
            path.iter().all(|&id| self.node(id).is_live())
                && path.last().is_some_and(|&id| self.node(id).is_end())
        })
    }

    /// Nodes visited by `word`, excluding the root
    fn node_path(&self, word: &str) -> Option<Vec<NodeId>> {
        if word.is_empty() || !is_dictionary_word(word) {
            return None;
        }

        let mut path = Vec::with_capacity(word.len());
        let mut node = NodeId::ROOT;
        for letter in word.bytes() {
            node = self.node(node).child(letter)?;
            path.push(node);
        }
        Some(path)
    }

    /// Snapshot of every node's count and word end, for consistency checks
    #[cfg(test)]
    pub(crate) fn state(&self) -> Vec<(u32, bool)> {
        self.nodes.iter().map(|n| (n.count, n.is_end)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        Trie::new(["cat", "cats", "at", "catch", "dog", "dogs"]).unwrap()
    }

    #[test]
    fn short_words_are_not_inserted() {
        let trie = sample();
        assert_eq!(trie.len(), 3);
        assert!(!trie.contains("cat"));
        assert!(!trie.contains("at"));
        assert!(!trie.contains("dog"));
        assert!(trie.contains("cats"));
        assert!(trie.contains("catch"));
        assert!(trie.contains("dogs"));
    }

    #[test]
    fn indices_follow_list_positions() {
        let trie = sample();
        let end = |word: &str| {
            let mut node = trie.root();
            for letter in word.bytes() {
                node = trie.node(node).child(letter).unwrap();
            }
            trie.node(node).index()
        };
        assert_eq!(end("cats"), Some(1));
        assert_eq!(end("catch"), Some(3));
        assert_eq!(end("dogs"), Some(5));
        // "cat" is a prefix node but not a word end
        assert_eq!(end("cat"), None);
    }

    #[test]
    fn counts_reflect_words_through_node() {
        let trie = sample();
        let c = trie.node(trie.root()).child(b'c').unwrap();
        let a = trie.node(c).child(b'a').unwrap();
        let t = trie.node(a).child(b't').unwrap();
        let s = trie.node(t).child(b's').unwrap();

        assert_eq!(trie.node(c).count(), 2);
        assert_eq!(trie.node(t).count(), 2);
        assert_eq!(trie.node(s).count(), 1);
    }

    #[test]
    fn prune_hides_word_and_rebuild_restores_it() {
        let mut trie = sample();
        let before = trie.state();

        trie.prune("cats");
        assert!(!trie.contains("cats"));
        assert!(trie.contains("catch"));
        assert_ne!(trie.state(), before);

        trie.rebuild([&WordKey::new("cats", 1)]);
        assert!(trie.contains("cats"));
        assert_eq!(trie.state(), before);
    }

    #[test]
    fn prune_shared_prefix_keeps_siblings_live() {
        let mut trie = sample();
        trie.prune("cats");
        trie.prune("catch");

        let c = trie.node(trie.root()).child(b'c').unwrap();
        assert!(!trie.node(c).is_live());
        assert_eq!(trie.live_child(trie.root(), b'c'), None);
        assert!(trie.live_child(trie.root(), b'd').is_some());
    }

    #[test]
    fn prune_unknown_word_is_noop() {
        let mut trie = sample();
        let before = trie.state();
        trie.prune("cart");
        trie.prune("zebra");
        trie.prune("");
        trie.prune("Cats");
        assert_eq!(trie.state(), before);
    }

    #[test]
    fn rebuild_skips_short_words() {
        let mut trie = sample();
        let before = trie.state();
        trie.rebuild([&WordKey::new("cat", 0)]);
        assert_eq!(trie.state(), before);
    }

    #[test]
    fn rebuild_skips_keys_outside_the_alphabet() {
        let mut trie = sample();
        let before = trie.state();
        trie.rebuild([
            &WordKey::new("CATS", 1),
            &WordKey::new("caté", 1),
            &WordKey::new("ca ts", 1),
        ]);
        assert_eq!(trie.state(), before);
    }

    #[test]
    fn duplicate_entries_share_a_path() {
        let mut trie = Trie::new(["tree", "tree"]).unwrap();
        let before = trie.state();
        let t = trie.node(trie.root()).child(b't').unwrap();
        assert_eq!(trie.node(t).count(), 2);

        trie.prune("tree");
        assert!(trie.contains("tree"));
        trie.rebuild([&WordKey::new("tree", 1)]);
        assert_eq!(trie.state(), before);
    }

    #[test]
    fn empty_list_rejected() {
        let words: Vec<String> = Vec::new();
        assert!(matches!(Trie::new(words), Err(DictionaryError::Empty)));
    }

    #[test]
    fn invalid_word_rejected() {
        let result = Trie::new(["good", "Bad", "fine"]);
        assert!(matches!(
            result,
            Err(DictionaryError::InvalidWord { index: 1, .. })
        ));
        assert!(Trie::new(["naïve"]).is_err());
    }

    #[test]
    fn word_lookup() {
        let trie = sample();
        assert_eq!(trie.word(0), Some("cat"));
        assert_eq!(trie.word(99), None);
        assert_eq!(trie.words().len(), 6);
    }

    #[test]
    fn embedded_dictionary_builds() {
        let trie = Trie::new(crate::wordlists::WORDS.iter().copied()).unwrap();
        assert!(trie.contains("quest"));
        assert!(trie.node_count() > trie.len());
    }
}
