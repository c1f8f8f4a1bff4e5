//! Word box solving
//!
//! This module contains the grid search and its cancellation support.

mod cancel;
mod engine;

pub use cancel::CancelFlag;
pub use engine::{SolveError, Solver, search};
