//! CLI entry point - wires the game engine to its adapters.

use clap::{Parser, ValueEnum};
use guessing_game::{ConsoleInput, ConsoleOutput, FileGuesses, FileLog, Game, RandomPicker};
use std::path::PathBuf;

/// Play the number guessing game.
#[derive(Parser)]
#[command(name = "guessing-game", version, about = "Play the number guessing game")]
struct Cli {
    /// Where guesses come from and messages go
    #[arg(long, value_enum, default_value_t = Mode::Console)]
    mode: Mode,

    /// Guess file for file mode, one guess per line
    #[arg(long, default_value = "my_guesses")]
    guesses_file: PathBuf,

    /// Log file that file mode appends game messages to
    #[arg(long, default_value = "logs")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Read guesses from stdin and print messages to stdout
    Console,
    /// Read guesses from a file and append messages to a log
    File,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.mode {
        Mode::Console => Game::new(ConsoleInput, ConsoleOutput, RandomPicker).play()?,
        Mode::File => {
            let source = FileGuesses::open(&cli.guesses_file)?;
            let sink = FileLog::append(&cli.log_file)?;
            Game::new(source, sink, RandomPicker).play()?
        }
    };

    tracing::debug!(?outcome, "Game finished");
    Ok(())
}
