//! DigitMind
//!
//! A Mastermind-style deduction game over combinations of 4 distinct digits.
//! The computer guesses by keeping every combination consistent with the
//! scores seen so far and picking among them.
//!
//! # Quick Start
//!
//! ```rust
//! use digitmind::core::{Combination, Level, Score};
//! use digitmind::solver::{FirstStrategy, Solver};
//!
//! let level = Level::new(6).unwrap();
//! let secret = Combination::parse("5203", level).unwrap();
//! let mut solver = Solver::new(FirstStrategy, level);
//!
//! let guess = solver.next_guess().unwrap();
//! let score = Score::calculate(&guess, &secret);
//! solver.record(guess, score);
//! assert!(solver.candidates().contains(&secret));
//! ```

// Core domain types
pub mod core;

// Candidate filtering and guess selection
pub mod solver;

// Command implementations
pub mod commands;

// Settings shared by commands
pub mod config;

// Session errors
pub mod error;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
