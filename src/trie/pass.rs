//! Solve pass sessions
//!
//! A `Pass` holds the trie exclusively while a search runs. Claiming a word
//! records it, clears its word end and prunes it; finishing (or dropping) the
//! pass reinserts everything claimed, leaving the trie as it was.

use super::node::NodeId;
use super::tree::Trie;
use crate::core::{Coord, FoundWords, WordKey};
use log::trace;

/// One solve pass over a trie
#[derive(Debug)]
pub struct Pass<'t> {
    trie: &'t mut Trie,
    found: FoundWords,
    restored: bool,
}

impl<'t> Pass<'t> {
    pub(crate) fn new(trie: &'t mut Trie) -> Self {
        Self {
            trie,
            found: FoundWords::new(),
            restored: false,
        }
    }

    /// Read access to the trie being searched
    #[inline]
    #[must_use]
    pub fn trie(&self) -> &Trie {
        &*self.trie
    }

    /// Words claimed so far in this pass
    #[must_use]
    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    /// Claim the word ending at `node`, if there is one
    ///
    /// Records `path` for the word, clears the word end so no other route can
    /// report it again this pass, and prunes the word from the root. Returns
    /// whether a word was claimed.
    pub fn claim(&mut self, node: NodeId, path: &[Coord]) -> bool {
        let Some(index) = self.trie.node(node).index() else {
            return false;
        };
        let Some(text) = self.trie.word(index).map(str::to_string) else {
            return false;
        };

        self.trie.node_mut(node).is_end = false;
        self.trie.prune(&text);
        trace!("Found '{text}' along {path:?}");

        self.found.insert(WordKey::new(text, index), path.to_vec());
        true
    }

    /// End the pass, restoring the trie and returning what was found
    #[must_use]
    pub fn finish(mut self) -> FoundWords {
        self.restore();
        std::mem::take(&mut self.found)
    }

    fn restore(&mut self) {
        if !self.restored {
            self.trie.rebuild(self.found.keys());
            self.restored = true;
        }
    }
}

impl Drop for Pass<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(trie: &Trie, word: &str) -> NodeId {
        let mut node = trie.root();
        for letter in word.bytes() {
            node = trie.node(node).child(letter).unwrap();
        }
        node
    }

    #[test]
    fn claim_records_and_prunes() {
        let mut trie = Trie::new(["cats", "catch"]).unwrap();
        let node = terminal(&trie, "cats");

        let mut pass = trie.begin_pass();
        assert!(pass.claim(node, &[(0, 0), (0, 1), (1, 0), (1, 1)]));
        assert!(!pass.trie().contains("cats"));
        assert!(pass.trie().contains("catch"));
        assert!(!pass.trie().node(node).is_end());

        // A second route to the same word is not claimed again
        assert!(!pass.claim(node, &[(1, 1)]));
        assert_eq!(pass.found().len(), 1);
    }

    #[test]
    fn claim_on_prefix_node_does_nothing() {
        let mut trie = Trie::new(["cats"]).unwrap();
        let node = terminal(&trie, "cat");

        let mut pass = trie.begin_pass();
        assert!(!pass.claim(node, &[(0, 0)]));
        assert!(pass.found().is_empty());
    }

    #[test]
    fn finish_restores_trie() {
        let mut trie = Trie::new(["cats", "catch", "dogs"]).unwrap();
        let before = trie.state();
        let cats = terminal(&trie, "cats");
        let dogs = terminal(&trie, "dogs");

        let mut pass = trie.begin_pass();
        pass.claim(cats, &[(0, 0)]);
        pass.claim(dogs, &[(1, 1)]);
        let found = pass.finish();

        assert_eq!(found.len(), 2);
        assert_eq!(found.path(&WordKey::new("dogs", 2)), Some(&[(1, 1)][..]));
        assert_eq!(trie.state(), before);
    }

    #[test]
    fn dropped_pass_still_restores() {
        let mut trie = Trie::new(["cats", "catch"]).unwrap();
        let before = trie.state();
        let catch = terminal(&trie, "catch");

        {
            let mut pass = trie.begin_pass();
            pass.claim(catch, &[(0, 0)]);
        }

        assert_eq!(trie.state(), before);
        assert!(trie.contains("catch"));
    }
}
