//! Main solver interface

use super::candidates::{filter_combinations, generate_all_combinations};
use super::strategy::Strategy;
use crate::core::{Combination, Level, Score};
use log::{debug, info};

/// One recorded guess and its effect on the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessStep {
    pub guess: Combination,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Computer-side guesser
///
/// Owns the candidate set for one game and narrows it with each
/// (guess, score) pair. The full combination list is kept so the game can
/// be undone or restarted without regenerating it.
pub struct Solver<S: Strategy> {
    strategy: S,
    level: Level,
    all_combinations: Vec<Combination>,
    candidates: Vec<Combination>,
    history: Vec<GuessStep>,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver for a level with every combination as a candidate
    pub fn new(strategy: S, level: Level) -> Self {
        let all_combinations = generate_all_combinations(level);
        let candidates = all_combinations.clone();

        Self {
            strategy,
            level,
            all_combinations,
            candidates,
            history: Vec::new(),
        }
    }

    /// Level this solver plays at
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Pick the next guess
    ///
    /// Returns `None` if no candidates remain, which means the feedback so
    /// far was inconsistent.
    pub fn next_guess(&mut self) -> Option<Combination> {
        // If only one candidate remains, just guess it
        if let [only] = self.candidates.as_slice() {
            return Some(*only);
        }

        let guess = self.strategy.select_guess(&self.candidates);
        if let Some(guess) = guess {
            debug!(
                "guess {guess} chosen from {} candidates",
                self.candidates.len()
            );
        }
        guess
    }

    /// Record the score for a guess and filter the candidate set
    ///
    /// Returns the number of candidates remaining.
    pub fn record(&mut self, guess: Combination, score: Score) -> usize {
        let before = self.candidates.len();
        filter_combinations(&mut self.candidates, &guess, score);

        let after = self.candidates.len();
        self.history.push(GuessStep {
            guess,
            score,
            candidates_before: before,
            candidates_after: after,
        });
        debug!("{guess} scored {score}: {before} -> {after} candidates");
        if after == 0 {
            info!("no combination is consistent with the feedback given");
        }
        after
    }

    /// Undo the last recorded guess
    ///
    /// The candidate set is rebuilt from scratch by replaying the remaining
    /// history. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }

        self.candidates.clone_from(&self.all_combinations);
        for step in &self.history {
            filter_combinations(&mut self.candidates, &step.guess, step.score);
        }
        true
    }

    /// Forget all feedback and start over
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates.clone_from(&self.all_combinations);
    }

    /// Combinations still consistent with every score
    pub fn candidates(&self) -> &[Combination] {
        &self.candidates
    }

    /// Count of remaining candidates
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Size of the initial candidate set
    pub fn total(&self) -> usize {
        self.all_combinations.len()
    }

    /// Guesses recorded so far, oldest first
    pub fn history(&self) -> &[GuessStep] {
        &self.history
    }

    /// Check whether the feedback has ruled out every combination
    pub fn is_exhausted(&self) -> bool {
        self.candidates.is_empty()
    }
}
