//! Interactive terminal interface
//!
//! A ratatui front end for the mode where the computer guesses the
//! player's combination.

mod app;
mod rendering;

pub use app::{App, InputMode, MessageStyle, run_tui};
