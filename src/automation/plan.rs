//! Stroke planning
//!
//! Turns found words into the pointer gestures that enter them: press on the
//! first cell, drag through the rest, release. Longest words go first.

use super::positions::{CellPositions, PlanError, Point};
use crate::core::{FoundWords, WordKey};

/// One word's gesture in absolute screen pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub word: WordKey,
    pub points: Vec<Point>,
}

impl Stroke {
    /// Where the pointer is pressed
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Where the pointer is released
    #[must_use]
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }
}

/// Plan a stroke for every found word
///
/// Paths are translated through `positions` and offset by `window_origin`,
/// the screen position of the window the cell table is relative to. Strokes
/// come out longest word first, ties alphabetical.
///
/// # Errors
/// Returns `PlanError::OutOfTable` if a path visits a cell the table does not
/// cover.
///
/// # Examples
/// ```
/// use word_box_solver::automation::{CellPositions, plan_strokes};
/// use word_box_solver::core::LetterGrid;
/// use word_box_solver::solver::Solver;
/// use word_box_solver::trie::Trie;
///
/// let mut trie = Trie::new(["cats"]).unwrap();
/// let mut solver = Solver::new(&mut trie);
/// solver.set_grid(LetterGrid::parse("ca/ts").unwrap());
/// let found = solver.solve().unwrap();
///
/// let table = CellPositions::uniform(2, 2, (10, 10), 20);
/// let strokes = plan_strokes(found, &table, (100, 200)).unwrap();
/// assert_eq!(strokes[0].points, vec![(110, 210), (130, 210), (110, 230), (130, 230)]);
/// ```
pub fn plan_strokes(
    found: &FoundWords,
    positions: &CellPositions,
    window_origin: Point,
) -> Result<Vec<Stroke>, PlanError> {
    let (left, top) = window_origin;

    found
        .longest_first()
        .into_iter()
        .map(|(key, path)| {
            let points = path
                .iter()
                .map(|&(row, col)| {
                    positions
                        .get((row, col))
                        .map(|(x, y)| (left + x, top + y))
                        .ok_or(PlanError::OutOfTable { row, col })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Stroke {
                word: key.clone(),
                points,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found() -> FoundWords {
        let mut found = FoundWords::new();
        found.insert(WordKey::new("seat", 4), vec![(1, 1), (0, 1), (0, 0), (1, 0)]);
        found.insert(WordKey::new("east", 2), vec![(0, 1), (0, 0), (1, 1), (1, 0)]);
        found.insert(WordKey::new("tease", 9), vec![(0, 0)]);
        found
    }

    #[test]
    fn strokes_longest_first() {
        let table = CellPositions::uniform(2, 2, (0, 0), 10);
        let strokes = plan_strokes(&found(), &table, (0, 0)).unwrap();
        let order: Vec<&str> = strokes.iter().map(|s| s.word.text.as_str()).collect();
        assert_eq!(order, vec!["tease", "east", "seat"]);
    }

    #[test]
    fn points_offset_by_window_origin() {
        let table = CellPositions::uniform(2, 2, (5, 5), 10);
        let strokes = plan_strokes(&found(), &table, (1000, 500)).unwrap();
        let seat = strokes.iter().find(|s| s.word.text == "seat").unwrap();

        assert_eq!(
            seat.points,
            vec![(1015, 515), (1015, 505), (1005, 505), (1005, 515)]
        );
        assert_eq!(seat.start(), Some((1015, 515)));
        assert_eq!(seat.end(), Some((1005, 515)));
    }

    #[test]
    fn path_outside_table_rejected() {
        let table = CellPositions::uniform(1, 1, (0, 0), 10);
        let result = plan_strokes(&found(), &table, (0, 0));
        assert!(matches!(result, Err(PlanError::OutOfTable { .. })));
    }

    #[test]
    fn nothing_found_plans_nothing() {
        let table = CellPositions::uniform(2, 2, (0, 0), 10);
        assert!(plan_strokes(&FoundWords::new(), &table, (0, 0)).unwrap().is_empty());
    }
}
