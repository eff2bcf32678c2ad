#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used by the binary entrypoint in main.rs
use anyhow as _;
use clap as _;
use tracing_subscriber as _;

mod console;
mod error;
mod file;
mod game;
mod ports;
mod rng;

// ============================================================================
// Public API
// ============================================================================

// Engine
pub use game::{Game, GameOutcome, MAX_GUESSES};

// Errors
pub use error::GameError;

// Ports
pub use ports::{GuessSource, MessageSink, SecretPicker};

// Adapters
pub use console::{ConsoleInput, ConsoleOutput};
pub use file::{FileGuesses, FileLog};
pub use rng::RandomPicker;
