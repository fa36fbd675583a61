use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parses a pool such as `25,50,75,100,3,6` or `25 50 75 100 3 6`.
///
/// # Errors
///
/// Returns an error if the pool is empty or any entry is not a
/// non-negative integer.
pub fn parse_number_pool(pool: &str) -> Result<Vec<u64>, UtilsError> {
    debug!("Parsing number pool: '{}'", pool);

    let numbers = pool
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u64>().map_err(|_| {
                warn!("Pool entry is not a non-negative integer: '{}'", token);
                UtilsError::InvalidNumber(token.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        warn!("Number pool is empty");
        return Err(UtilsError::EmptyPool);
    }

    debug!("Parsed {} numbers", numbers.len());
    Ok(numbers)
}

/// # Errors
///
/// Returns an error if the text is not a (possibly negative) integer.
pub fn parse_target(target: &str) -> Result<i64, UtilsError> {
    target.trim().parse::<i64>().map_err(|_| {
        warn!("Target is not an integer: '{}'", target);
        UtilsError::InvalidTarget(target.to_string())
    })
}
