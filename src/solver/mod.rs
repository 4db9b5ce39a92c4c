//! Combination solving
//!
//! Candidate-set filtering and the strategies that pick guesses from it.

mod candidates;
mod engine;
pub mod strategy;

pub use candidates::{
    filter_combinations, generate_all_combinations, rng_from_seed, select_random_combination,
};
pub use engine::{GuessStep, Solver};
pub use strategy::{FirstStrategy, RandomStrategy, Strategy, StrategyType};
