use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Number pool is empty")]
    EmptyPool,
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
}
