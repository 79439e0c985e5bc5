//! Core domain types for the word-guessing game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure and testable.

mod feedback;
mod secret;

pub use feedback::{Feedback, LetterMark};
pub use secret::{Secret, SecretError};
