//! Cell position tables
//!
//! A capture layer locates every grid cell on screen and reports its centre
//! relative to the captured window. This table is the only thing the stroke
//! planner needs from it.

use crate::core::Coord;
use std::fmt;

/// A pixel position `(x, y)`
pub type Point = (i32, i32);

/// Error type for invalid position tables and plans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    EmptyTable,
    RaggedTable { row: usize },
    OutOfTable { row: usize, col: usize },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "Cell position table is empty"),
            Self::RaggedTable { row } => {
                write!(f, "Cell position table row {row} differs in length from row 0")
            }
            Self::OutOfTable { row, col } => {
                write!(f, "Cell ({row}, {col}) has no screen position")
            }
        }
    }
}

impl std::error::Error for PlanError {}

/// Window-relative pixel centre of every grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellPositions {
    points: Vec<Point>,
    rows: usize,
    cols: usize,
}

impl CellPositions {
    /// Build a table from rows of cell centres
    ///
    /// # Errors
    /// Returns `PlanError::EmptyTable` if there are no cells and
    /// `PlanError::RaggedTable` if rows differ in length.
    pub fn new(table: &[Vec<Point>]) -> Result<Self, PlanError> {
        let cols = table.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(PlanError::EmptyTable);
        }

        if let Some(row) = table.iter().position(|line| line.len() != cols) {
            return Err(PlanError::RaggedTable { row });
        }

        Ok(Self {
            points: table.concat(),
            rows: table.len(),
            cols,
        })
    }

    /// Evenly spaced cells, the first centred on `first_center`
    ///
    /// # Examples
    /// ```
    /// use word_box_solver::automation::CellPositions;
    ///
    /// let table = CellPositions::uniform(4, 4, (30, 40), 60);
    /// assert_eq!(table.get((0, 0)), Some((30, 40)));
    /// assert_eq!(table.get((1, 2)), Some((150, 100)));
    /// ```
    #[must_use]
    pub fn uniform(rows: usize, cols: usize, first_center: Point, spacing: i32) -> Self {
        let (x0, y0) = first_center;
        let points = (0..rows)
            .flat_map(|row| {
                (0..cols).map(move |col| (x0 + col as i32 * spacing, y0 + row as i32 * spacing))
            })
            .collect();

        Self { points, rows, cols }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Centre of a cell, or `None` outside the table
    #[must_use]
    pub fn get(&self, (row, col): Coord) -> Option<Point> {
        (row < self.rows && col < self.cols).then(|| self.points[row * self.cols + col])
    }
}
