//! Search results
//!
//! `FoundWords` maps each discovered dictionary word to the cell path that
//! spelled it. Keys carry the dictionary index alongside the text so two list
//! entries with the same spelling stay distinct.

use super::grid::Coord;
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifies a dictionary word: its text and its position in the word list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordKey {
    pub text: String,
    pub index: usize,
}

impl WordKey {
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

impl fmt::Display for WordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Words found in one pass, each with the path it was found along
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundWords {
    entries: FxHashMap<WordKey, Vec<Coord>>,
}

impl FoundWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word and its path
    ///
    /// Returns `false` (and keeps the first path) if the key was already present.
    pub fn insert(&mut self, key: WordKey, path: Vec<Coord>) -> bool {
        match self.entries.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(path);
                true
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Path recorded for a key
    #[must_use]
    pub fn path(&self, key: &WordKey) -> Option<&[Coord]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Path recorded for a word, looked up by text alone
    #[must_use]
    pub fn path_of(&self, text: &str) -> Option<&[Coord]> {
        self.entries
            .iter()
            .find(|(key, _)| key.text == text)
            .map(|(_, path)| path.as_slice())
    }

    #[must_use]
    pub fn contains_word(&self, text: &str) -> bool {
        self.entries.keys().any(|key| key.text == text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &WordKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordKey, &[Coord])> {
        self.entries.iter().map(|(key, path)| (key, path.as_slice()))
    }

    /// Found words in alphabetical order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(|key| key.text.as_str()).collect();
        words.sort_unstable();
        words
    }

    /// Entries ordered longest word first, ties broken alphabetically
    #[must_use]
    pub fn longest_first(&self) -> Vec<(&WordKey, &[Coord])> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| {
            b.text
                .len()
                .cmp(&a.text.len())
                .then_with(|| a.text.cmp(&b.text))
                .then_with(|| a.index.cmp(&b.index))
        });
        entries
    }

    /// Length in letters of the longest word found
    #[must_use]
    pub fn longest_len(&self) -> usize {
        self.entries.keys().map(|key| key.text.len()).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a FoundWords {
    type Item = (&'a WordKey, &'a Vec<Coord>);
    type IntoIter = std::collections::hash_map::Iter<'a, WordKey, Vec<Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
