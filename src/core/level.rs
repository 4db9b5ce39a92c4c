//! Difficulty level
//!
//! The level is the number of digit values in play: a level of 6 means every
//! position holds a digit from 0 to 5.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when building a [`Level`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    /// Value outside the supported range
    #[error("level must be between {min} and {max}, got {0}", min = Level::MIN, max = Level::MAX)]
    OutOfRange(u8),

    /// Text that is not a number
    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Number of distinct digit values available (4 to 10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Smallest level: exactly enough digits to fill a combination
    pub const MIN: u8 = 4;

    /// Largest level: every decimal digit
    pub const MAX: u8 = 10;

    /// Hardest level, used when none is chosen
    pub const HARDEST: Self = Self(Self::MAX);

    /// Create a level, rejecting values outside `MIN..=MAX`
    ///
    /// # Errors
    /// Returns `LevelError::OutOfRange` for values below 4 or above 10.
    ///
    /// # Examples
    /// ```
    /// use digitmind::core::Level;
    ///
    /// assert_eq!(Level::new(6).unwrap().value(), 6);
    /// assert!(Level::new(3).is_err());
    /// assert!(Level::new(11).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, LevelError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(LevelError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Raw digit count
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Highest digit allowed at this level
    #[inline]
    #[must_use]
    pub const fn max_digit(self) -> u8 {
        self.0 - 1
    }

    /// Check whether `digit` is in play at this level
    #[inline]
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        digit < self.0
    }

    /// Number of distinct combinations at this level
    ///
    /// n × (n-1) × (n-2) × (n-3): 24 at level 4, 5040 at level 10.
    #[must_use]
    pub const fn combination_count(self) -> usize {
        let n = self.0 as usize;
        n * (n - 1) * (n - 2) * (n - 3)
    }

    /// Iterate over every supported level
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u8 = trimmed
            .parse()
            .map_err(|_| LevelError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }
}
