//! Formatting utilities for terminal output

use crate::core::{Coord, LetterGrid};

/// Format a path as `(row,col)` steps joined by arrows
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(|(row, col)| format!("({row},{col})"))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Render the grid with each path cell replaced by its step number
///
/// Cells off the path show their letters. Every cell is padded to the same
/// width so columns line up.
#[must_use]
pub fn render_path(grid: &LetterGrid, path: &[Coord]) -> Vec<String> {
    let width = grid
        .coords()
        .filter_map(|coord| grid.get(coord))
        .map(|tile| tile.len())
        .max()
        .unwrap_or(1)
        .max(path.len().to_string().len());

    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let cell = path.iter().position(|&step| step == (row, col)).map_or_else(
                        || {
                            grid.get((row, col))
                                .map_or_else(String::new, |tile| tile.to_string())
                        },
                        |step| (step + 1).to_string(),
                    );
                    format!("{cell:>width$}")
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
