//! Ports through which the game engine talks to the outside world.
//!
//! The engine depends only on these traits; adapters for the terminal,
//! for files and for randomness live in sibling modules.

use crate::error::GameError;

/// Source of player guesses.
pub trait GuessSource {
    /// Read the next guess.
    ///
    /// Returns [`GameError::InputExhausted`] once no further guess can
    /// ever arrive.
    fn read_guess(&mut self) -> Result<String, GameError>;
}

/// Destination for game messages.
pub trait MessageSink {
    /// Write one message line to the player.
    fn write_message(&mut self, message: &str) -> Result<(), GameError>;
}

/// Strategy for choosing the secret number.
pub trait SecretPicker {
    /// Pick the secret for one round.
    fn pick_secret(&mut self) -> u32;
}
