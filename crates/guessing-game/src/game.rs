//! The game engine and its round loop.

use crate::error::GameError;
use crate::ports::{GuessSource, MessageSink, SecretPicker};

/// Guesses a player gets before the game is lost.
pub const MAX_GUESSES: u32 = 3;

const WELCOME_MESSAGE: &str = "Welcome to the number guessing game";
const RULES_MESSAGE: &str = "Please pick a number between 1 and 10";

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// The player guessed the secret.
    Won {
        /// The secret that was guessed
        secret: u32,
    },
    /// The player ran out of guesses.
    Lost {
        /// The secret that was never guessed
        secret: u32,
    },
}

/// A guess is valid when it is a plain run of digits.
///
/// Comparison against the secret happens textually, so `07` is a valid
/// guess that simply never matches.
fn is_valid_guess(guess: &str) -> bool {
    !guess.is_empty() && guess.chars().all(|c| c.is_ascii_digit())
}

/// The number guessing game, generic over its three ports.
///
/// One instance plays one round: a secret is picked, the player gets
/// [`MAX_GUESSES`] tries, and every message goes through the sink.
/// Invalid input repeats the rules without consuming a guess.
pub struct Game<S, W, P> {
    source: S,
    sink: W,
    picker: P,
}

impl<S: GuessSource, W: MessageSink, P: SecretPicker> Game<S, W, P> {
    /// Create a game over the given ports.
    pub const fn new(source: S, sink: W, picker: P) -> Self {
        Self {
            source,
            sink,
            picker,
        }
    }

    /// Play one round to completion.
    ///
    /// Errors only when a port fails; winning and losing are both
    /// ordinary outcomes.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        self.sink.write_message(WELCOME_MESSAGE)?;
        self.write_rules()?;

        let secret = self.picker.pick_secret();
        tracing::debug!(secret, "Secret picked");
        let secret_text = secret.to_string();

        let mut guesses_left = MAX_GUESSES;
        loop {
            let raw = self.source.read_guess()?;
            let guess = raw.trim();

            if !is_valid_guess(guess) {
                self.sink
                    .write_message(&format!("\"{guess}\" is not a valid integer."))?;
                self.write_rules()?;
                continue;
            }

            guesses_left -= 1;

            if guess == secret_text {
                self.sink
                    .write_message(&format!("Success! The correct number was {secret}"))?;
                return Ok(GameOutcome::Won { secret });
            }

            if guesses_left == 0 {
                self.sink
                    .write_message(&format!("Failure! The correct number was {secret}"))?;
                return Ok(GameOutcome::Lost { secret });
            }

            let noun = if guesses_left == 1 { "guess" } else { "guesses" };
            self.sink
                .write_message(&format!("Incorrect! {guesses_left} {noun} remaining"))?;
        }
    }

    fn write_rules(&mut self) -> Result<(), GameError> {
        self.sink.write_message(RULES_MESSAGE)
    }
}
