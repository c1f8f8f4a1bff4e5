//! Automation planning
//!
//! Maps solved paths onto screen coordinates for whatever drives the pointer.
//! Capturing the window and moving the mouse are left to the caller.

mod plan;
mod positions;

pub use plan::{Stroke, plan_strokes};
pub use positions::{CellPositions, PlanError, Point};
