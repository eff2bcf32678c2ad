//! File adapters for scripted games.
//!
//! Guesses come from a file with one guess per line; game messages are
//! appended to a log file.

use crate::error::GameError;
use crate::ports::{GuessSource, MessageSink};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Lines, Write};
use std::path::Path;

/// Reads guesses from a file, advancing one line per guess.
pub struct FileGuesses {
    lines: Lines<BufReader<File>>,
}

impl FileGuesses {
    /// Open a guess file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let file = File::open(path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl GuessSource for FileGuesses {
    fn read_guess(&mut self) -> Result<String, GameError> {
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(GameError::InputExhausted),
        }
    }
}

/// Appends game messages to a log file, one line per message.
pub struct FileLog {
    file: File,
}

impl FileLog {
    /// Open the log file for appending, creating it if needed.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }
}

impl MessageSink for FileLog {
    fn write_message(&mut self, message: &str) -> Result<(), GameError> {
        writeln!(self.file, "{message}")?;
        Ok(())
    }
}
