//! Command implementations

pub mod benchmark;
pub mod plan;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, random_grid, run_benchmark};
pub use plan::{PlanConfig, PlanResult, parse_point, plan_grid};
pub use solve::{SolveConfig, SolveResult, solve_grid};
