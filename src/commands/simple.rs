//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: one whole-word guess per line, colored
//! per-letter feedback after each submission.

use crate::core::{Feedback, LetterMark};
use crate::game::{Attempt, GameState, GameStatus, Intent};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input or writing to stdout fails.
pub fn run_simple(game: GameState) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   MOTUS - Guess the word                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "The word has {} letters. You have {} attempts.",
        game.secret().len(),
        game.max_attempts() + 1
    );
    println!("After each guess, every letter is colored:\n");
    println!("  - {} letter in the correct position", " green ".black().on_green());
    println!("  - {} letter elsewhere in the word", " yellow ".black().on_yellow());
    println!("  - {} letter not in the word", " gray ".white().on_bright_black());
    println!("\nFrom the second attempt on, the first letter is revealed.");
    println!("Commands: 'quit' to exit, 'new' to start over\n");

    let mut game = game;

    loop {
        match game.status() {
            GameStatus::Won => {
                print_win_banner(&game);
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game = game.apply(Intent::Reset);
                println!("\n🔄 New game started!\n");
                continue;
            }
            GameStatus::Lost => {
                println!("\n{}", "═".repeat(62).red());
                println!("{}", "  😔 Out of attempts!".red().bold());
                println!(
                    "  The word was {}",
                    game.secret().text().to_uppercase().bright_yellow().bold()
                );
                println!("{}\n", "═".repeat(62).red());
                if !ask_play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                game = game.apply(Intent::Reset);
                println!("\n🔄 New game started!\n");
                continue;
            }
            GameStatus::InProgress => {}
        }

        let turn = game.current_attempt() + 1;
        let total = game.max_attempts() + 1;
        let revealed: String = game
            .current_row()
            .map(Attempt::letters)
            .map(|letters| String::from_utf8_lossy(&letters).to_uppercase())
            .unwrap_or_default();

        let prompt = if revealed.is_empty() {
            format!("Turn {turn}/{total} - your word")
        } else {
            format!("Turn {turn}/{total} - your word (starts with {revealed})")
        };

        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = game.apply(Intent::Reset);
                println!("\n🔄 New game started!\n");
            }
            word => match enter_word(&game, word) {
                Ok(next) => {
                    game = next;
                    print_scored_rows(&game);
                }
                Err(message) => println!("❌ {message}\n"),
            },
        }
    }
}

/// Feed a whole typed word through the engine and submit it
///
/// The engine's revealed prefix (the first-letter hint) must agree with the
/// typed word; the remaining letters are appended one by one.
fn enter_word(game: &GameState, word: &str) -> Result<GameState, String> {
    let length = game.secret().len();
    if word.chars().count() != length {
        return Err(format!("The word must be exactly {length} letters long."));
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("Only letters A-Z are allowed.".to_string());
    }

    let revealed = game.current_row().map_or_else(Vec::new, Attempt::letters);
    if !word.as_bytes().starts_with(&revealed) {
        let prefix = String::from_utf8_lossy(&revealed).to_uppercase();
        return Err(format!("The word must start with the revealed {prefix}."));
    }

    let mut next = game.clone();
    for c in word.chars().skip(revealed.len()) {
        next = next.apply(Intent::Append(c));
    }
    next = next.apply(Intent::Validate);

    if next.error().is_some() {
        // Unreachable with the length check above; surface it anyway
        return Err("The word is too short.".to_string());
    }

    Ok(next)
}

/// Print every submitted row so far with colored feedback
fn print_scored_rows(game: &GameState) {
    println!();
    for (row, feedback) in game.grid().iter().zip(game.feedback()) {
        let Some(feedback) = feedback else { continue };
        println!("   {}", colorize_row(row, feedback));
    }
    println!();
}

fn colorize_row(row: &Attempt, feedback: &Feedback) -> String {
    row.cells()
        .iter()
        .zip(feedback.marks())
        .map(|(cell, mark)| {
            let letter = cell
                .letter()
                .map_or(' ', |l| l.to_ascii_uppercase() as char);
            let text = format!(" {letter} ");
            match mark {
                LetterMark::Correct => text.black().on_green().to_string(),
                LetterMark::Present => text.black().on_yellow().to_string(),
                LetterMark::Absent => text.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_win_banner(game: &GameState) {
    let attempts = game
        .feedback()
        .iter()
        .filter(|feedback| feedback.is_some())
        .count();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        🎉 ✨  Y O U   F O U N D   I T !  ✨ 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "\n  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (index, feedback) in game.feedback().iter().enumerate() {
        if let Some(feedback) = feedback {
            println!(
                "    {}. {} {}",
                (index + 1).to_string().bright_black(),
                String::from_utf8_lossy(&game.grid()[index].letters())
                    .to_uppercase()
                    .bright_white()
                    .bold(),
                feedback.to_emoji()
            );
        }
    }
    println!("\n{}\n", "═".repeat(62).bright_cyan());
}

fn ask_play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;

    fn game() -> GameState {
        GameState::new(Secret::new("bonjour").unwrap(), 5)
    }

    #[test]
    fn enter_word_rejects_wrong_length() {
        let result = enter_word(&game(), "bon");
        assert!(result.is_err());
    }

    #[test]
    fn enter_word_rejects_non_letters() {
        let result = enter_word(&game(), "bonj0ur");
        assert!(result.is_err());
    }

    #[test]
    fn enter_word_submits_full_word() {
        let next = enter_word(&game(), "bonsoir").unwrap();
        assert_eq!(next.current_attempt(), 1);
        assert!(next.feedback()[0].is_some());
    }

    #[test]
    fn enter_word_requires_revealed_prefix() {
        let next = enter_word(&game(), "bonsoir").unwrap();
        // Second row is seeded with 'b'
        assert!(enter_word(&next, "oursons").is_err());
        assert!(enter_word(&next, "boutons").is_ok());
    }

    #[test]
    fn enter_word_win() {
        let next = enter_word(&game(), "bonjour").unwrap();
        assert_eq!(next.status(), GameStatus::Won);
    }
}
