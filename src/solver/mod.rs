pub mod config;
mod core;
mod errors;
mod types;

pub use config::SolverConfig;
pub use core::ExpressionSolver;
pub use errors::SolverError;
pub use types::{Node, Puzzle, SearchOutcome, SearchStats, Solution};
