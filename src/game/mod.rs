//! Round generation and scoring around the solver

pub mod constants;
mod errors;
mod letters;
mod numbers;

pub use errors::{GameError, WordRejection};
pub use letters::{Dictionary, find_best_word, generate_letters, validate_word};
pub use numbers::{generate_numbers_round, score_numbers_round};

#[cfg(test)]
mod tests;
