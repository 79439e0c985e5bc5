//! Motus - CLI
//!
//! Terminal word-guessing game with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use motus::{
    commands::run_simple,
    core::Secret,
    game::GameState,
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "motus",
    about = "Guess the hidden word - the first letter is revealed after each attempt",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The word to guess (ASCII letters; lowercased)
    #[arg(short, long, global = true, default_value = "bonjour")]
    secret: String,

    /// Guesses allowed beyond the first
    #[arg(short = 'a', long, global = true, default_value = "5")]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let secret = Secret::new(&cli.secret)
        .with_context(|| format!("invalid secret word {:?}", cli.secret))?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(secret, cli.attempts)),
        Commands::Simple => run_simple(GameState::new(secret, cli.attempts)),
    }
}
