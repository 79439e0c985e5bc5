//! The hidden word the player is guessing
//!
//! A Secret stores the word as lowercase ASCII bytes along with a letter
//! frequency map used by feedback scoring.

use rustc_hash::FxHashMap;
use std::fmt;

/// The hidden word of a game, fixed at game start
///
/// Immutable once constructed. The word length determines the width of every
/// grid row for the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret {
    text: String,
    letters: Vec<u8>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::NonAscii => write!(f, "Secret word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Secret word contains invalid characters"),
        }
    }
}

impl std::error::Error for SecretError {}

impl Secret {
    /// Create a new Secret from a string
    ///
    /// Input is lowercased; case normalization beyond ASCII is the caller's
    /// responsibility.
    ///
    /// # Errors
    /// Returns `SecretError` if:
    /// - The string is empty
    /// - It contains non-ASCII characters
    /// - It contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use motus::core::Secret;
    ///
    /// let secret = Secret::new("Bonjour").unwrap();
    /// assert_eq!(secret.text(), "bonjour");
    /// assert_eq!(secret.len(), 7);
    ///
    /// assert!(Secret::new("").is_err());
    /// assert!(Secret::new("b0njour").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SecretError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(SecretError::Empty);
        }

        if !text.is_ascii() {
            return Err(SecretError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SecretError::InvalidCharacters);
        }

        let letters = text.as_bytes().to_vec();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Length of the word in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects the empty string
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// The first letter, revealed as the guessing hint on seeded rows
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.letters[0]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by feedback scoring for duplicate-letter handling.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_creation_valid() {
        let secret = Secret::new("bonjour").unwrap();
        assert_eq!(secret.text(), "bonjour");
        assert_eq!(secret.letters(), b"bonjour");
        assert_eq!(secret.len(), 7);
        assert!(!secret.is_empty());
    }

    #[test]
    fn secret_creation_uppercase_normalized() {
        let secret = Secret::new("BONJOUR").unwrap();
        assert_eq!(secret.text(), "bonjour");

        let secret2 = Secret::new("BonJouR").unwrap();
        assert_eq!(secret2.text(), "bonjour");
    }

    #[test]
    fn secret_creation_empty_rejected() {
        assert!(matches!(Secret::new(""), Err(SecretError::Empty)));
    }

    #[test]
    fn secret_creation_invalid_characters() {
        assert!(Secret::new("b0njour").is_err()); // Number
        assert!(Secret::new("bon jour").is_err()); // Space
        assert!(Secret::new("salut!").is_err()); // Punctuation
    }

    #[test]
    fn secret_creation_non_ascii_rejected() {
        assert!(matches!(Secret::new("déjà"), Err(SecretError::NonAscii)));
    }

    #[test]
    fn secret_single_letter_allowed() {
        let secret = Secret::new("a").unwrap();
        assert_eq!(secret.len(), 1);
        assert_eq!(secret.first_letter(), b'a');
    }

    #[test]
    fn secret_letter_at() {
        let secret = Secret::new("pomme").unwrap();
        assert_eq!(secret.letter_at(0), b'p');
        assert_eq!(secret.letter_at(2), b'm');
        assert_eq!(secret.letter_at(4), b'e');
    }

    #[test]
    fn secret_first_letter() {
        let secret = Secret::new("bonjour").unwrap();
        assert_eq!(secret.first_letter(), b'b');
    }

    #[test]
    fn secret_letter_counts() {
        let secret = Secret::new("pomme").unwrap();
        let counts = secret.letter_counts();
        assert_eq!(counts.get(&b'p'), Some(&1));
        assert_eq!(counts.get(&b'o'), Some(&1));
        assert_eq!(counts.get(&b'm'), Some(&2));
        assert_eq!(counts.get(&b'e'), Some(&1));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn secret_letter_counts_all_unique() {
        let secret = Secret::new("bonjur").unwrap();
        let counts = secret.letter_counts();
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&count| count == 1));
    }

    #[test]
    fn secret_display() {
        let secret = Secret::new("bonjour").unwrap();
        assert_eq!(format!("{secret}"), "bonjour");
    }

    #[test]
    fn secret_equality() {
        let secret1 = Secret::new("bonjour").unwrap();
        let secret2 = Secret::new("BONJOUR").unwrap();
        let secret3 = Secret::new("fromage").unwrap();

        assert_eq!(secret1, secret2); // Case insensitive
        assert_ne!(secret1, secret3);
    }
}
