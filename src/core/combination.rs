//! Digit combination representation
//!
//! A combination is a sequence of 4 distinct digits, each below the level.

use super::Level;
use std::fmt;
use thiserror::Error;

/// Number of positions in a combination
pub const DIGITS: usize = 4;

/// Error type for invalid combinations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombinationError {
    #[error("combination must be exactly {len} digits, got {0}", len = DIGITS)]
    InvalidLength(usize),

    #[error("'{0}' is not a digit")]
    NotADigit(char),

    #[error("digit {digit} is out of range (0 to {max})")]
    OutOfRange { digit: u8, max: u8 },

    #[error("digit {0} appears more than once")]
    RepeatedDigit(u8),
}

/// A secret or guessed combination of 4 distinct digits
///
/// Ordering is lexicographic over the digits, which matches the order in
/// which combinations are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination([u8; DIGITS]);

impl Combination {
    /// Create a combination from raw digits, validating against a level
    ///
    /// # Errors
    /// Returns `CombinationError` if a digit is not below the level or a
    /// digit is repeated.
    ///
    /// # Examples
    /// ```
    /// use digitmind::core::{Combination, Level};
    ///
    /// let level = Level::new(6).unwrap();
    /// assert!(Combination::new([0, 1, 2, 5], level).is_ok());
    /// assert!(Combination::new([0, 1, 2, 6], level).is_err());
    /// assert!(Combination::new([0, 1, 1, 2], level).is_err());
    /// ```
    pub fn new(digits: [u8; DIGITS], level: Level) -> Result<Self, CombinationError> {
        let mut seen = [false; Level::MAX as usize];

        for &digit in &digits {
            if !level.contains(digit) {
                return Err(CombinationError::OutOfRange {
                    digit,
                    max: level.max_digit(),
                });
            }
            if seen[digit as usize] {
                return Err(CombinationError::RepeatedDigit(digit));
            }
            seen[digit as usize] = true;
        }

        Ok(Self(digits))
    }

    /// Build a combination the caller already knows to be valid
    pub(crate) const fn from_digits_unchecked(digits: [u8; DIGITS]) -> Self {
        Self(digits)
    }

    /// Parse a combination such as `"0123"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CombinationError` for wrong length, non-digit characters,
    /// out-of-range digits, or repeated digits.
    ///
    /// # Examples
    /// ```
    /// use digitmind::core::{Combination, Level};
    ///
    /// let level = Level::new(10).unwrap();
    /// let combo = Combination::parse("9071", level).unwrap();
    /// assert_eq!(combo.digits(), &[9, 0, 7, 1]);
    /// assert_eq!(combo.to_string(), "9071");
    /// ```
    pub fn parse(text: &str, level: Level) -> Result<Self, CombinationError> {
        let chars: Vec<char> = text.trim().chars().collect();

        if chars.len() != DIGITS {
            return Err(CombinationError::InvalidLength(chars.len()));
        }

        let mut digits = [0u8; DIGITS];
        for (slot, &ch) in digits.iter_mut().zip(&chars) {
            let value = ch.to_digit(10).ok_or(CombinationError::NotADigit(ch))?;
            *slot = value as u8;
        }

        Self::new(digits, level)
    }

    /// Get the digits as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGITS] {
        &self.0
    }

    /// Check whether the combination holds `digit` anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
