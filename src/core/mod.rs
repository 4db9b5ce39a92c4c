//! Core domain types for DigitMind
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod combination;
mod level;
mod score;

pub use combination::{Combination, CombinationError, DIGITS};
pub use level::{Level, LevelError};
pub use score::{Score, ScoreError};
