//! Game configuration
//!
//! Settings that would otherwise be asked for interactively, or that make
//! runs reproducible.

use crate::core::Level;
use crate::solver::StrategyType;

/// Default bound on computer guesses for non-interactive solving
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Configuration shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed level; `None` asks the player each game
    pub level: Option<Level>,
    /// RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
    /// Strategy name understood by [`StrategyType::from_name`]
    pub strategy: String,
    /// Guess bound for computer games in `solve` and `benchmark`
    pub max_guesses: usize,
}

impl GameConfig {
    /// Build the configured guessing strategy
    #[must_use]
    pub fn strategy(&self) -> StrategyType {
        StrategyType::from_name(&self.strategy, self.seed)
    }

    /// Same configuration with the seed shifted by `offset`
    ///
    /// Lets independent games draw different but reproducible sequences.
    #[must_use]
    pub fn with_seed_offset(&self, offset: u64) -> Self {
        Self {
            seed: self.seed.map(|seed| seed.wrapping_add(offset)),
            ..self.clone()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level: None,
            seed: None,
            strategy: "random".to_string(),
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}
