//! Letter grid representation
//!
//! A `LetterGrid` is a non-empty, rectangular, row-major array of tiles. The
//! search uses the grid itself as its visited set, so every mutation goes
//! through crate-private methods that the solver pairs with a restore.

use super::tile::{Tile, TileError};
use std::fmt;

/// A `(row, col)` cell coordinate
pub type Coord = (usize, usize);

/// The eight neighbour offsets, in the order the search visits them
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Smallest number of rows and columns the playable check accepts
pub const MIN_PLAYABLE_SIDE: usize = 2;

/// Smallest number of cells the playable check accepts
pub const MIN_PLAYABLE_CELLS: usize = 4;

/// Error type for malformed grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    EmptyRow {
        row: usize,
    },
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidTile {
        row: usize,
        col: usize,
        token: String,
        reason: TileError,
    },
    NotPlayable {
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid has no rows"),
            Self::EmptyRow { row } => write!(f, "Row {row} has no tiles"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {row} has {found} tiles, expected {expected} like the first row"
            ),
            Self::InvalidTile {
                row,
                col,
                token,
                reason,
            } => write!(f, "Invalid tile '{token}' at ({row}, {col}): {reason}"),
            Self::NotPlayable { rows, cols } => write!(
                f,
                "A {rows}x{cols} grid is too small, need at least \
                 {MIN_PLAYABLE_SIDE}x{MIN_PLAYABLE_SIDE} and {MIN_PLAYABLE_CELLS} cells"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular grid of letter tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl LetterGrid {
    /// Build a grid from rows of string tokens
    ///
    /// # Errors
    /// Returns `GridError` if there are no rows, a row is empty, rows differ
    /// in length, or a token is not a valid tile.
    ///
    /// # Examples
    /// ```
    /// use word_box_solver::core::LetterGrid;
    ///
    /// let grid = LetterGrid::new(&[vec!["c", "a"], vec!["t", "s"]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    ///
    /// assert!(LetterGrid::new(&[vec!["c", "a"], vec!["t"]]).is_err());
    /// ```
    pub fn new<R, S>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let first = rows.first().ok_or(GridError::Empty)?;
        let cols = first.as_ref().len();

        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (row, tokens) in rows.iter().enumerate() {
            let tokens = tokens.as_ref();
            if tokens.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if tokens.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: tokens.len(),
                });
            }

            for (col, token) in tokens.iter().enumerate() {
                let token = token.as_ref();
                let tile = Tile::new(token).map_err(|reason| GridError::InvalidTile {
                    row,
                    col,
                    token: token.to_string(),
                    reason,
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            rows: rows.len(),
            cols,
        })
    }

    /// Build a grid from tiles already laid out row-major
    pub(crate) fn from_tiles(tiles: Vec<Tile>, cols: usize) -> Self {
        debug_assert!(cols > 0 && !tiles.is_empty() && tiles.len() % cols == 0);
        Self {
            rows: tiles.len() / cols,
            tiles,
            cols,
        }
    }

    /// Parse a grid from text
    ///
    /// Rows are separated by `/` or newlines. Within a row, tokens are
    /// separated by whitespace; a row without whitespace is read one letter
    /// per tile. Blank rows are ignored.
    ///
    /// # Errors
    /// Returns `GridError` under the same conditions as [`LetterGrid::new`].
    ///
    /// # Examples
    /// ```
    /// use word_box_solver::core::LetterGrid;
    ///
    /// let compact = LetterGrid::parse("ca/ts").unwrap();
    /// let spaced = LetterGrid::parse("c a\nt s").unwrap();
    /// assert_eq!(compact, spaced);
    ///
    /// let ligature = LetterGrid::parse("qu e / e n").unwrap();
    /// assert!(ligature.get((0, 0)).unwrap().is_ligature());
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<String>> = text
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                if line.contains(char::is_whitespace) {
                    line.split_whitespace().map(str::to_string).collect()
                } else {
                    line.chars().map(String::from).collect()
                }
            })
            .collect();

        Self::new(&rows)
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Get the tile at a coordinate, or `None` if it is outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, (row, col): Coord) -> Option<Tile> {
        if row < self.rows && col < self.cols {
            Some(self.tiles[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate over every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Step from `coord` by `offset`, staying inside the grid
    #[inline]
    #[must_use]
    pub fn neighbor(&self, (row, col): Coord, (d_row, d_col): (isize, isize)) -> Option<Coord> {
        let row = row.checked_add_signed(d_row)?;
        let col = col.checked_add_signed(d_col)?;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Overwrite a cell, returning the previous tile
    ///
    /// Only the search calls this, always followed by restoring the original.
    #[inline]
    pub(crate) fn replace(&mut self, (row, col): Coord, tile: Tile) -> Tile {
        std::mem::replace(&mut self.tiles[row * self.cols + col], tile)
    }

    /// Whether any cell still holds the visited marker
    #[must_use]
    pub fn has_visited_cells(&self) -> bool {
        self.tiles.iter().any(Tile::is_visited)
    }

    /// Whether the grid is large enough to be worth solving
    ///
    /// Mirrors the check a capture front end applies before handing a grid
    /// over: at least two rows, two columns and four cells.
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.rows >= MIN_PLAYABLE_SIDE
            && self.cols >= MIN_PLAYABLE_SIDE
            && self.cell_count() >= MIN_PLAYABLE_CELLS
    }

    /// Reject grids that fail [`LetterGrid::is_playable`]
    ///
    /// # Errors
    /// Returns `GridError::NotPlayable` for grids that are too small.
    pub fn ensure_playable(&self) -> Result<(), GridError> {
        if self.is_playable() {
            Ok(())
        } else {
            Err(GridError::NotPlayable {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Concatenate the letters along a path
    ///
    /// Returns `None` if a coordinate is outside the grid or holds the
    /// visited marker.
    #[must_use]
    pub fn spell(&self, path: &[Coord]) -> Option<String> {
        let mut word = String::with_capacity(path.len() + 1);
        for &coord in path {
            let tile = self.get(coord).filter(|tile| !tile.is_visited())?;
            word.extend(tile.letters().iter().map(|&b| char::from(b)));
        }
        Some(word)
    }

    /// Check that `path` is a legal route spelling `word`
    ///
    /// A legal route has every step within one cell (diagonals included),
    /// never repeats a cell, and reads `word` exactly.
    #[must_use]
    pub fn is_valid_path(&self, path: &[Coord], word: &str) -> bool {
        let adjacent = path.windows(2).all(|step| {
            let (a, b) = (step[0], step[1]);
            a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
        });

        let mut seen = vec![false; self.cell_count()];
        let distinct = path.iter().all(|&(row, col)| {
            if row >= self.rows || col >= self.cols {
                return false;
            }
            !std::mem::replace(&mut seen[row * self.cols + col], true)
        });

        adjacent && distinct && self.spell(path).is_some_and(|spelled| spelled == word)
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.tiles.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, tile) in line.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}
