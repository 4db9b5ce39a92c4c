//! Score calculation and representation
//!
//! A score is the feedback for a guess: how many digits sit in the right
//! position, and how many of the remaining digits occur elsewhere in the code.

use super::{Combination, DIGITS, Level};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for scores that no pair of combinations can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("counts must add up to at most {max}, got {right} + {wrong}", max = DIGITS)]
    TooManyMatches { right: u8, wrong: u8 },

    #[error("{right} right and {wrong} wrong is impossible with distinct digits")]
    Impossible { right: u8, wrong: u8 },

    #[error("invalid score '{0}', expected two counts such as '1 2'")]
    Malformed(String),
}

/// Feedback for a guess against a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    right_position: u8,
    wrong_position: u8,
}

impl Score {
    /// Every digit in the right position
    pub const PERFECT: Self = Self {
        right_position: DIGITS as u8,
        wrong_position: 0,
    };

    /// Create a score from feedback counts, rejecting impossible pairs
    ///
    /// # Errors
    /// Returns `ScoreError::TooManyMatches` when the counts exceed the number
    /// of positions, and `ScoreError::Impossible` for three right and one
    /// wrong: with distinct digits the last digit would have to be in its
    /// own place.
    ///
    /// # Examples
    /// ```
    /// use digitmind::core::Score;
    ///
    /// assert!(Score::new(1, 2).is_ok());
    /// assert!(Score::new(3, 2).is_err());
    /// assert!(Score::new(3, 1).is_err());
    /// ```
    pub const fn new(right_position: u8, wrong_position: u8) -> Result<Self, ScoreError> {
        if right_position as usize + wrong_position as usize > DIGITS {
            return Err(ScoreError::TooManyMatches {
                right: right_position,
                wrong: wrong_position,
            });
        }
        if right_position as usize == DIGITS - 1 && wrong_position == 1 {
            return Err(ScoreError::Impossible {
                right: right_position,
                wrong: wrong_position,
            });
        }
        Ok(Self {
            right_position,
            wrong_position,
        })
    }

    /// Digits in the correct position
    #[inline]
    #[must_use]
    pub const fn right_position(self) -> u8 {
        self.right_position
    }

    /// Digits present in the code but in another position
    #[inline]
    #[must_use]
    pub const fn wrong_position(self) -> u8 {
        self.wrong_position
    }

    /// Check if every digit is in the right position
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.right_position as usize == DIGITS
    }

    /// Calculate the score when `guess` is tried against `code`
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches and remove those digits
    ///    from the pool of available code digits
    /// 2. Second pass: count the remaining guess digits still in the pool,
    ///    consuming each pooled digit at most once
    ///
    /// # Examples
    /// ```
    /// use digitmind::core::{Combination, Level, Score};
    ///
    /// let level = Level::new(10).unwrap();
    /// let guess = Combination::parse("0123", level).unwrap();
    /// let code = Combination::parse("0312", level).unwrap();
    ///
    /// let score = Score::calculate(&guess, &code);
    /// assert_eq!(score.right_position(), 1); // 0
    /// assert_eq!(score.wrong_position(), 3); // 1, 2, 3
    /// ```
    #[must_use]
    pub fn calculate(guess: &Combination, code: &Combination) -> Self {
        let guess = guess.digits();
        let code = code.digits();

        let mut matched = [false; DIGITS];
        let mut available = [0u8; Level::MAX as usize];
        let mut right_position = 0u8;
        let mut wrong_position = 0u8;

        // First pass: exact matches
        // Allow: Index needed to access guess[i], code[i], and set matched[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..DIGITS {
            if guess[i] == code[i] {
                right_position += 1;
                matched[i] = true;
            } else {
                available[code[i] as usize] += 1;
            }
        }

        // Second pass: present elsewhere, without reusing a code digit
        #[allow(clippy::needless_range_loop)]
        for i in 0..DIGITS {
            if matched[i] {
                continue;
            }
            let slot = &mut available[guess[i] as usize];
            if *slot > 0 {
                *slot -= 1;
                wrong_position += 1;
            }
        }

        Self {
            right_position,
            wrong_position,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} right, {} wrong",
            self.right_position, self.wrong_position
        )
    }
}

impl FromStr for Score {
    type Err = ScoreError;

    /// Parse feedback such as `"1 2"`, `"1,2"` or `"12"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScoreError::Malformed(s.trim().to_string());

        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();

        let (right, wrong) = match parts.as_slice() {
            [right, wrong] => (
                right.parse::<u8>().map_err(|_| malformed())?,
                wrong.parse::<u8>().map_err(|_| malformed())?,
            ),
            [pair] if pair.len() == 2 && pair.chars().all(|c| c.is_ascii_digit()) => {
                let bytes = pair.as_bytes();
                (bytes[0] - b'0', bytes[1] - b'0')
            }
            _ => return Err(malformed()),
        };

        Self::new(right, wrong)
    }
}
