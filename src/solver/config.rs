use std::time::Duration;

/// Configuration for the numbers solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Wall-clock budget for one solve call. `None` runs the search to
    /// completion.
    pub deadline: Option<Duration>,
}

impl SolverConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(timeout),
        }
    }
}
