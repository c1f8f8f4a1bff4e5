//! Dictionaries for word box solving
//!
//! Provides the embedded default dictionary and a loader for custom word
//! lists. A solver cannot run without a dictionary, so every failure here is
//! surfaced to the caller instead of degrading to an empty list.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use std::fmt;
use std::io;

/// Error type for dictionary loading and trie construction
#[derive(Debug)]
pub enum DictionaryError {
    Io(io::Error),
    Empty,
    InvalidWord { index: usize, word: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read word list: {err}"),
            Self::Empty => write!(f, "Word list contains no usable words"),
            Self::InvalidWord { index, word } => {
                write!(f, "Word {index} ('{word}') must contain only letters a-z")
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Whether a word can be stored in the trie (non-empty, letters a-z only)
#[inline]
#[must_use]
pub fn is_dictionary_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(
                is_dictionary_word(word),
                "Word '{word}' contains characters outside a-z"
            );
        }
    }

    #[test]
    fn embedded_list_has_searchable_words() {
        assert!(WORDS.iter().any(|w| w.len() > 3));
        assert!(WORDS.contains(&"cats"));
        assert!(WORDS.contains(&"quest"));
    }

    #[test]
    fn dictionary_word_check() {
        assert!(is_dictionary_word("crane"));
        assert!(!is_dictionary_word(""));
        assert!(!is_dictionary_word("Crane"));
        assert!(!is_dictionary_word("can't"));
        assert!(!is_dictionary_word("two words"));
    }

    #[test]
    fn error_messages() {
        let err = DictionaryError::InvalidWord {
            index: 4,
            word: "x1".to_string(),
        };
        assert_eq!(err.to_string(), "Word 4 ('x1') must contain only letters a-z");
        assert_eq!(
            DictionaryError::Empty.to_string(),
            "Word list contains no usable words"
        );
    }
}
