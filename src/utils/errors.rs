use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Number pool cannot be empty")]
    EmptyPool,
    #[error("Not a non-negative integer: '{0}'")]
    InvalidNumber(String),
    #[error("Target must be an integer: '{0}'")]
    InvalidTarget(String),
}
