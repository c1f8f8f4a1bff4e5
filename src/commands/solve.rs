//! Grid solving command
//!
//! Parses a grid, checks it is playable, and runs one solve pass.

use crate::core::{FoundWords, LetterGrid};
use crate::solver::Solver;
use crate::trie::Trie;
use log::info;
use std::time::{Duration, Instant};

/// Configuration for solving a grid
pub struct SolveConfig {
    pub grid: String,
    pub require_playable: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(grid: String) -> Self {
        Self {
            grid,
            require_playable: true,
        }
    }
}

/// Result of solving a grid
pub struct SolveResult {
    pub grid: LetterGrid,
    pub found: FoundWords,
    pub duration: Duration,
}

impl SolveResult {
    /// Total letters across all found words
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.found.keys().map(|key| key.text.len()).sum()
    }
}

/// Solve a grid given as text
///
/// # Errors
///
/// Returns an error if:
/// - The grid text is malformed (empty, ragged, or has non-letter tiles)
/// - The grid is too small to play and `require_playable` is set
/// - The solve does not complete
pub fn solve_grid(config: SolveConfig, trie: &mut Trie) -> Result<SolveResult, String> {
    let grid = LetterGrid::parse(&config.grid).map_err(|e| format!("Invalid grid: {e}"))?;

    if config.require_playable {
        grid.ensure_playable()
            .map_err(|e| format!("Invalid grid: {e}"))?;
    }

    let start = Instant::now();
    let mut solver = Solver::new(trie);
    solver.set_grid(grid.clone());
    let found = solver.solve().map_err(|e| e.to_string())?.clone();
    let duration = start.elapsed();

    info!(
        "Solved {}x{} grid: {} words in {:.2?}",
        grid.rows(),
        grid.cols(),
        found.len(),
        duration
    );

    Ok(SolveResult {
        grid,
        found,
        duration,
    })
}
