//! Terminal adapters playing over stdin and stdout.

use crate::error::GameError;
use crate::ports::{GuessSource, MessageSink};
use std::io::{self, BufRead, Write};

/// Reads guesses from stdin, one line per guess.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl GuessSource for ConsoleInput {
    fn read_guess(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // End of input, the terminal was closed
            return Err(GameError::InputExhausted);
        }
        Ok(line)
    }
}

/// Writes game messages to stdout, one line per message.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl MessageSink for ConsoleOutput {
    fn write_message(&mut self, message: &str) -> Result<(), GameError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")?;
        Ok(())
    }
}
