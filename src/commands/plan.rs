//! Stroke planning command
//!
//! Solves a grid and lays the found words out as screen gestures over a
//! uniformly spaced cell layout.

use super::solve::{SolveConfig, solve_grid};
use crate::automation::{CellPositions, Point, Stroke, plan_strokes};
use crate::trie::Trie;

/// Configuration for planning strokes
pub struct PlanConfig {
    pub grid: String,
    pub window_origin: Point,
    pub first_cell: Point,
    pub spacing: i32,
}

/// Result of planning strokes
pub struct PlanResult {
    pub strokes: Vec<Stroke>,
    pub rows: usize,
    pub cols: usize,
}

impl PlanResult {
    /// Total pointer positions across all strokes
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.strokes.iter().map(|s| s.points.len()).sum()
    }
}

/// Solve a grid and plan a stroke per found word
///
/// # Errors
///
/// Returns an error if the grid cannot be solved or a path falls outside the
/// cell layout.
pub fn plan_grid(config: PlanConfig, trie: &mut Trie) -> Result<PlanResult, String> {
    let solved = solve_grid(SolveConfig::new(config.grid), trie)?;
    let (rows, cols) = (solved.grid.rows(), solved.grid.cols());

    let positions = CellPositions::uniform(rows, cols, config.first_cell, config.spacing);
    let strokes = plan_strokes(&solved.found, &positions, config.window_origin)
        .map_err(|e| format!("Cannot plan strokes: {e}"))?;

    Ok(PlanResult {
        strokes,
        rows,
        cols,
    })
}

/// Parse an `X,Y` pixel pair
///
/// # Errors
///
/// Returns an error unless the input is two comma-separated integers.
pub fn parse_point(text: &str) -> Result<Point, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("Expected X,Y but got '{text}'"))?;

    let x = x.trim().parse().map_err(|e| format!("Invalid x in '{text}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("Invalid y in '{text}': {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_orders_and_translates() {
        let mut trie = Trie::new(["cats", "scat", "acts"]).unwrap();
        let config = PlanConfig {
            grid: "ca/ts".to_string(),
            window_origin: (100, 100),
            first_cell: (20, 20),
            spacing: 40,
        };

        let result = plan_grid(config, &mut trie).unwrap();

        assert_eq!((result.rows, result.cols), (2, 2));
        assert_eq!(result.strokes.len(), 3);
        assert_eq!(result.total_points(), 12);
        let cats = result
            .strokes
            .iter()
            .find(|s| s.word.text == "cats")
            .unwrap();
        assert_eq!(cats.start(), Some((120, 120)));
        assert_eq!(cats.end(), Some((160, 160)));
    }

    #[test]
    fn plan_rejects_bad_grid() {
        let mut trie = Trie::new(["cats"]).unwrap();
        let config = PlanConfig {
            grid: "c".to_string(),
            window_origin: (0, 0),
            first_cell: (0, 0),
            spacing: 10,
        };
        assert!(plan_grid(config, &mut trie).is_err());
    }

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("10,20"), Ok((10, 20)));
        assert_eq!(parse_point(" -5 , 7 "), Ok((-5, 7)));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("1,2,3").is_err());
    }
}
