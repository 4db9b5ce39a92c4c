//! Error types for game sessions

use crate::core::CombinationError;
use std::io;
use thiserror::Error;

/// Errors that end a game session
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from or writing to the console failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Standard input reached end of file
    #[error("input closed")]
    InputClosed,

    /// A combination supplied on the command line was rejected
    #[error("invalid combination: {0}")]
    InvalidCombination(#[from] CombinationError),

    /// The solver ran out of candidates
    #[error("no candidates remain")]
    NoCandidates,
}

/// Result alias for game sessions
pub type Result<T> = std::result::Result<T, GameError>;
