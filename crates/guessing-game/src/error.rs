//! Error types for the guessing game.

use thiserror::Error;

/// Errors surfaced while running a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The guess source ran out before the game finished.
    #[error("Ran out of guesses before the game finished")]
    InputExhausted,

    /// Reading guesses or writing messages failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
