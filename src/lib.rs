//! Cifras - A countdown-style numbers solver
//!
//! This library finds an arithmetic expression over a pool of numbers that
//! hits a target exactly, or the closest value reachable, using `+`, `-`,
//! `×` and exact integer `÷`. It also carries the small amount of game logic
//! around it: dealing rounds, scoring, and checking letters-round words.

pub mod expression;
pub mod game;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, Value};
pub use solver::{ExpressionSolver, Puzzle, SearchOutcome, SearchStats, Solution, SolverConfig, SolverError};
pub use utils::{UtilsError, parse_number_pool, parse_target};

/// Solve a round with the default solver.
///
/// Returns `None` only when `numbers` is empty. Otherwise the result is an
/// exact match when one exists, else the closest value found.
///
/// # Examples
///
/// ```
/// let solution = cifras::solve(&[10, 2], 5);
/// assert_eq!(solution.map(|s| s.rendering), Some("(10 ÷ 2)".to_string()));
/// ```
pub fn solve(numbers: &[u64], target: i64) -> Option<Solution> {
    ExpressionSolver::default().solve(numbers, target)
}

/// Parse a textual pool such as `"25,50,75,100,3,6"` and solve it.
///
/// # Errors
///
/// This function will return an error if:
/// * The pool is empty
/// * Any pool entry is not a non-negative integer
///
/// # Examples
///
/// ```
/// use cifras::find_solution;
///
/// match find_solution("1 1 1", 100) {
///     Ok(solution) => println!("{} = {}", solution.rendering, solution.value),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(pool: &str, target: i64) -> Result<Solution, SolverError> {
    let numbers = parse_number_pool(pool)?;
    solve(&numbers, target).ok_or(SolverError::EmptyPool)
}
