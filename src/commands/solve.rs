//! Combination solving command
//!
//! Lets the computer solve a known secret and returns the solution path.

use crate::core::{Combination, Level, Score};
use crate::error::{GameError, Result};
use crate::solver::{GuessStep, Solver, Strategy};

/// Configuration for solving a combination
pub struct SolveConfig {
    pub secret: String,
    pub level: Level,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, level: Level, max_guesses: usize) -> Self {
        Self {
            secret,
            level,
            max_guesses,
        }
    }
}

/// Result of solving a combination
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Combination,
    pub level: Level,
}

/// Solve the configured secret with the given strategy
///
/// # Errors
///
/// Returns `GameError::InvalidCombination` if the secret is not a valid
/// combination for the level.
pub fn solve_secret<S: Strategy>(config: &SolveConfig, strategy: S) -> Result<SolveResult> {
    let secret = Combination::parse(&config.secret, config.level)?;
    solve_combination(secret, config.level, config.max_guesses, strategy)
}

/// Solve an already validated secret
///
/// # Errors
///
/// Returns `GameError::NoCandidates` if the solver runs out of candidates,
/// which cannot happen when `secret` belongs to `level`.
pub fn solve_combination<S: Strategy>(
    secret: Combination,
    level: Level,
    max_guesses: usize,
    strategy: S,
) -> Result<SolveResult> {
    let mut solver = Solver::new(strategy, level);
    let mut success = false;

    for _ in 0..max_guesses {
        let guess = solver.next_guess().ok_or(GameError::NoCandidates)?;
        let score = Score::calculate(&guess, &secret);
        solver.record(guess, score);

        if score.is_perfect() {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        guesses: solver.history().to_vec(),
        secret,
        level,
    })
}
