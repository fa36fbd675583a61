use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::constants::{
    CLOSE_DISTANCE, CLOSE_POINTS, EXACT_POINTS, LARGE_NUMBERS, MAX_TARGET, MIN_TARGET,
    SMALL_NUMBERS,
};
use crate::game::errors::GameError;
use crate::solver::Puzzle;

/// Draws `count` numbers from `pool` without replacement.
fn draw<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[u64],
    count: usize,
    name: &'static str,
) -> Result<Vec<u64>, GameError> {
    if count > pool.len() {
        return Err(GameError::TooManyNumbers {
            pool: name,
            requested: count,
            available: pool.len(),
        });
    }

    let mut available = pool.to_vec();
    let mut drawn = Vec::with_capacity(count);
    for _ in 0..count {
        let idx = rng.random_range(0..available.len());
        drawn.push(available.swap_remove(idx));
    }
    Ok(drawn)
}

/// Generates a numbers round: `large` numbers from the large pool, `small`
/// from the small pool, shuffled, and a target in `100..=999`.
///
/// # Errors
///
/// Returns an error if either count exceeds its pool or both are zero.
pub fn generate_numbers_round<R: Rng + ?Sized>(
    rng: &mut R,
    large: usize,
    small: usize,
) -> Result<Puzzle, GameError> {
    if large == 0 && small == 0 {
        return Err(GameError::EmptyRound);
    }

    let mut numbers = draw(rng, &LARGE_NUMBERS, large, "large")?;
    numbers.extend(draw(rng, &SMALL_NUMBERS, small, "small")?);
    numbers.shuffle(rng);

    let target = rng.random_range(MIN_TARGET..=MAX_TARGET);
    debug!("Generated numbers round {:?} -> {}", numbers, target);

    Ok(Puzzle { numbers, target })
}

/// Points for a numbers round. `result` is `None` when the player did not
/// combine anything.
pub fn score_numbers_round(result: Option<i64>, target: i64) -> u32 {
    let Some(result) = result else {
        return 0;
    };
    match result.abs_diff(target) {
        0 => EXACT_POINTS,
        d if d <= CLOSE_DISTANCE => CLOSE_POINTS,
        _ => 0,
    }
}
