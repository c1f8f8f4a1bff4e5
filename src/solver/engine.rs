//! Grid search
//!
//! Depth-first search from every cell, following trie branches that still
//! have active words. The grid doubles as the visited set: a cell holds the
//! visited marker while the search stands on it and gets its tile back on
//! the way out.

use super::cancel::CancelFlag;
use crate::core::{Coord, FoundWords, LetterGrid, NEIGHBOR_OFFSETS, Tile};
use crate::trie::{NodeId, Pass, Trie};
use log::debug;
use std::fmt;
use std::time::Instant;

/// Error type for a solve that did not complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    NoGrid,
    Cancelled,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGrid => write!(f, "No letter grid has been set"),
            Self::Cancelled => write!(f, "Solve was cancelled"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Word box solver bound to a dictionary trie
///
/// Holding the trie mutably for its whole lifetime means no other pass can
/// run on the same trie while this solver exists.
pub struct Solver<'t> {
    trie: &'t mut Trie,
    grid: Option<LetterGrid>,
    found: FoundWords,
    cancel: Option<CancelFlag>,
}

impl<'t> Solver<'t> {
    /// Create a solver over `trie` with no grid yet
    pub fn new(trie: &'t mut Trie) -> Self {
        Self {
            trie,
            grid: None,
            found: FoundWords::new(),
            cancel: None,
        }
    }

    /// Watch `flag` during every solve
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Replace the grid to solve
    pub fn set_grid(&mut self, grid: LetterGrid) {
        self.grid = Some(grid);
    }

    /// The current grid
    #[must_use]
    pub const fn grid(&self) -> Option<&LetterGrid> {
        self.grid.as_ref()
    }

    /// Words found by the last completed solve
    #[must_use]
    pub const fn found_words(&self) -> &FoundWords {
        &self.found
    }

    /// The dictionary this solver searches
    #[must_use]
    pub fn trie(&self) -> &Trie {
        &*self.trie
    }

    /// Find every dictionary word in the current grid
    ///
    /// Previous results are cleared first. The trie is restored before this
    /// returns, whether or not the pass completed.
    ///
    /// # Errors
    /// Returns `SolveError::NoGrid` if no grid was set, and
    /// `SolveError::Cancelled` if the cancel flag was raised mid-pass.
    ///
    /// # Examples
    /// ```
    /// use word_box_solver::core::LetterGrid;
    /// use word_box_solver::solver::Solver;
    /// use word_box_solver::trie::Trie;
    ///
    /// let mut trie = Trie::new(["cat", "cats", "at"]).unwrap();
    /// let mut solver = Solver::new(&mut trie);
    /// solver.set_grid(LetterGrid::parse("ca/ts").unwrap());
    ///
    /// let found = solver.solve().unwrap();
    /// assert_eq!(found.words(), vec!["cats"]);
    /// assert_eq!(found.path_of("cats").unwrap(), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    /// ```
    pub fn solve(&mut self) -> Result<&FoundWords, SolveError> {
        self.found.clear();
        let grid = self.grid.as_mut().ok_or(SolveError::NoGrid)?;
        self.found = search(self.trie, grid, self.cancel.as_ref())?;
        Ok(&self.found)
    }
}

/// Run one full pass over `grid`
///
/// Starts a DFS from every cell in row-major order and returns each word
/// found with the first path that reached it. The grid and the trie are both
/// back in their original state when this returns.
///
/// # Errors
/// Returns `SolveError::Cancelled` if `cancel` was raised before the pass
/// finished.
pub fn search(
    trie: &mut Trie,
    grid: &mut LetterGrid,
    cancel: Option<&CancelFlag>,
) -> Result<FoundWords, SolveError> {
    let start = Instant::now();
    let (rows, cols) = (grid.rows(), grid.cols());
    let root = trie.root();

    let mut walk = Search {
        path: Vec::with_capacity(grid.cell_count()),
        pass: trie.begin_pass(),
        grid,
        cancel,
    };

    for coord in walk.grid.coords() {
        walk.dfs(root, coord);
    }

    if walk.is_cancelled() {
        debug!("Search of {rows}x{cols} grid cancelled after {:?}", start.elapsed());
        return Err(SolveError::Cancelled);
    }

    let found = walk.pass.finish();
    debug!(
        "Searched {rows}x{cols} grid: {} words in {:?}",
        found.len(),
        start.elapsed()
    );

    Ok(found)
}

/// State of one pass: the trie session, the grid used as visited set, and
/// the path walked so far
struct Search<'a> {
    pass: Pass<'a>,
    grid: &'a mut LetterGrid,
    path: Vec<Coord>,
    cancel: Option<&'a CancelFlag>,
}

impl Search<'_> {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(CancelFlag::is_cancelled)
    }

    fn dfs(&mut self, node: NodeId, coord: Coord) {
        if self.is_cancelled() {
            return;
        }

        let Some(tile) = self.grid.get(coord) else {
            return;
        };
        if tile.is_visited() {
            return;
        }

        let letters = tile.letters();
        let trie = self.pass.trie();
        let Some(mut next) = trie.live_child(node, letters[0]) else {
            return;
        };

        self.grid.replace(coord, Tile::VISITED);

        // A ligature only matches when both of its letters do
        if let Some(&second) = letters.get(1) {
            if let Some(child) = trie.live_child(next, second) {
                next = child;
            } else {
                self.grid.replace(coord, tile);
                return;
            }
        }

        self.path.push(coord);
        self.pass.claim(next, &self.path);

        for offset in NEIGHBOR_OFFSETS {
            if let Some(neighbor) = self.grid.neighbor(coord, offset) {
                self.dfs(next, neighbor);
            }
        }

        self.grid.replace(coord, tile);
        self.path.pop();
    }
}
