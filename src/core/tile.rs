//! Grid cell tokens
//!
//! A Tile holds one or two lowercase letters. Two-letter tiles model the
//! ligature cells some games print as a single square, such as "qu".

use std::fmt;

/// Largest number of letters a single tile may carry
pub const MAX_TILE_LETTERS: usize = 2;

/// One cell of a letter grid
///
/// Letters are stored as lowercase ASCII bytes. The `VISITED` sentinel has no
/// letters at all, so it can never compare equal to a real tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    letters: [u8; MAX_TILE_LETTERS],
    len: u8,
}

/// Error type for invalid cell tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    Empty,
    TooLong(usize),
    InvalidCharacters,
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Tile must contain at least one letter"),
            Self::TooLong(len) => {
                write!(f, "Tile must hold at most {MAX_TILE_LETTERS} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Tile must contain only letters a-z"),
        }
    }
}

impl std::error::Error for TileError {}

impl Tile {
    /// Marker written into a cell while the search is standing on it
    pub(crate) const VISITED: Self = Self {
        letters: [0; MAX_TILE_LETTERS],
        len: 0,
    };

    /// The common `qu` ligature
    pub const QU: Self = Self {
        letters: [b'q', b'u'],
        len: 2,
    };

    /// Create a tile from a 1-2 letter token
    ///
    /// Upper case input is folded to lower case.
    ///
    /// # Errors
    /// Returns `TileError` if the token is empty, longer than two letters, or
    /// contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_box_solver::core::Tile;
    ///
    /// let tile = Tile::new("Qu").unwrap();
    /// assert_eq!(tile.to_string(), "qu");
    /// assert!(Tile::new("q1").is_err());
    /// ```
    pub fn new(token: &str) -> Result<Self, TileError> {
        let token = token.trim();

        if token.is_empty() {
            return Err(TileError::Empty);
        }

        if !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(TileError::InvalidCharacters);
        }

        if token.len() > MAX_TILE_LETTERS {
            return Err(TileError::TooLong(token.len()));
        }

        let mut letters = [0; MAX_TILE_LETTERS];
        for (slot, byte) in letters.iter_mut().zip(token.bytes()) {
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self {
            letters,
            len: token.len() as u8,
        })
    }

    /// Create a single-letter tile
    ///
    /// # Errors
    /// Returns `TileError::InvalidCharacters` if `letter` is not an ASCII letter.
    pub fn from_letter(letter: u8) -> Result<Self, TileError> {
        if !letter.is_ascii_alphabetic() {
            return Err(TileError::InvalidCharacters);
        }

        Ok(Self {
            letters: [letter.to_ascii_lowercase(), 0],
            len: 1,
        })
    }

    /// The letters on this tile, as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len as usize]
    }

    /// Number of letters on this tile (0 only for the visited marker)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether this cell currently holds the visited marker
    #[inline]
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.len == 0
    }

    /// Whether this is a two-letter ligature tile
    #[inline]
    #[must_use]
    pub const fn is_ligature(&self) -> bool {
        self.len > 1
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_visited() {
            return write!(f, ".");
        }
        for &letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qu_constant_matches_parsed() {
        assert_eq!(Tile::QU, Tile::new("qu").unwrap());
        assert!(Tile::QU.is_ligature());
    }

    #[test]
    fn tile_single_letter() {
        let tile = Tile::new("c").unwrap();
        assert_eq!(tile.letters(), b"c");
        assert_eq!(tile.len(), 1);
        assert!(!tile.is_ligature());
    }

    #[test]
    fn tile_ligature() {
        let tile = Tile::new("qu").unwrap();
        assert_eq!(tile.letters(), b"qu");
        assert!(tile.is_ligature());
        assert_eq!(tile.to_string(), "qu");
    }

    #[test]
    fn tile_uppercase_normalized() {
        assert_eq!(Tile::new("E").unwrap(), Tile::new("e").unwrap());
        assert_eq!(Tile::new("QU").unwrap().letters(), b"qu");
    }

    #[test]
    fn tile_rejects_bad_tokens() {
        assert_eq!(Tile::new(""), Err(TileError::Empty));
        assert_eq!(Tile::new("  "), Err(TileError::Empty));
        assert_eq!(Tile::new("abc"), Err(TileError::TooLong(3)));
        assert_eq!(Tile::new("0"), Err(TileError::InvalidCharacters));
        assert_eq!(Tile::new("|"), Err(TileError::InvalidCharacters));
        assert_eq!(Tile::new("é"), Err(TileError::InvalidCharacters));
    }

    #[test]
    fn visited_marker_differs_from_every_letter() {
        for letter in b'a'..=b'z' {
            let tile = Tile::from_letter(letter).unwrap();
            assert_ne!(tile, Tile::VISITED);
            assert!(!tile.is_visited());
        }
        assert!(Tile::VISITED.is_visited());
        assert_eq!(Tile::VISITED.to_string(), ".");
    }

    #[test]
    fn from_letter_rejects_digits() {
        assert!(Tile::from_letter(b'1').is_err());
        assert_eq!(Tile::from_letter(b'Z').unwrap().letters(), b"z");
    }
}
