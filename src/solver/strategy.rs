//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::candidates::{rng_from_seed, select_random_combination};
use crate::core::Combination;
use rand::rngs::StdRng;

/// A strategy for choosing the next guess from the remaining candidates
pub trait Strategy {
    /// Select a guess from the candidate set
    ///
    /// Returns `None` if no candidates remain.
    fn select_guess(&mut self, candidates: &[Combination]) -> Option<Combination>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Uniform random pick among candidates (default)
    Random(RandomStrategy),
    /// Lowest remaining candidate
    First(FirstStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, candidates: &[Combination]) -> Option<Combination> {
        match self {
            Self::Random(s) => s.select_guess(candidates),
            Self::First(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: [&'static str; 2] = ["random", "first"];

    /// Create strategy from name string
    ///
    /// Supported names: "random", "first".
    /// Defaults to random if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            _ => Self::Random(RandomStrategy::new(seed)),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::First(_) => "first",
        }
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates. Every pick is consistent
/// with all feedback so far, so each guess may be the secret.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy, reproducible when `seed` is given
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: rng_from_seed(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&mut self, candidates: &[Combination]) -> Option<Combination> {
        select_random_combination(candidates, &mut self.rng)
    }
}

/// First-candidate strategy
///
/// Always guesses the lowest remaining candidate. Deterministic, which makes
/// it handy for reproducible runs.
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess(&mut self, candidates: &[Combination]) -> Option<Combination> {
        candidates.iter().min().copied()
    }
}
