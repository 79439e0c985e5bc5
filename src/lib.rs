//! Motus
//!
//! A terminal word-guessing game in the French Motus tradition: guess the
//! hidden word within a fixed number of attempts; after each guess every
//! letter is scored correct-position, present-elsewhere or absent, and the
//! next row opens with the secret's first letter revealed.
//!
//! The game logic is a pure state machine — front-ends send intents and
//! render the returned state.
//!
//! # Quick Start
//!
//! ```rust
//! use motus::core::Secret;
//! use motus::game::{GameState, GameStatus, Intent};
//!
//! let secret = Secret::new("bonjour").unwrap();
//! let mut game = GameState::new(secret, 5);
//!
//! for letter in "bonjour".chars() {
//!     game = game.apply(Intent::Append(letter));
//! }
//! game = game.apply(Intent::Validate);
//!
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// The game state machine
pub mod game;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
