//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{DictionaryError, is_dictionary_word};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines and lines
/// starting with `#` are skipped, as are entries containing anything other
/// than letters (with a warning). The order of the remaining words is kept,
/// since a word's position is its dictionary index.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, and
/// `DictionaryError::Empty` if no usable word remains.
///
/// # Examples
/// ```no_run
/// use word_box_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("Read word list {} ({} bytes)", path.display(), content.len());

    let words = words_from_lines(content.lines());
    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }

    Ok(words)
}

/// Convert an embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_box_solver::wordlists::loader::words_from_slice;
/// use word_box_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let word = trimmed.to_lowercase();
            if is_dictionary_word(&word) {
                Some(word)
            } else {
                warn!("Skipping word list line {}: '{trimmed}'", line_no + 1);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "Slate", " irate "];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "don't", "", "# comment", "x-ray", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "slate"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/a/real/word/list.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }

    #[test]
    fn load_from_file_keeps_order() {
        let path = std::env::temp_dir().join(format!(
            "word_box_solver_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# header").unwrap();
            writeln!(file, "zebra").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "Apple").unwrap();
            writeln!(file, "b4d").unwrap();
            writeln!(file, "mango").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn load_from_file_without_words_is_empty_error() {
        let path = std::env::temp_dir().join(format!(
            "word_box_solver_loader_empty_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "# nothing here\n\n123\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DictionaryError::Empty)));
    }
}
