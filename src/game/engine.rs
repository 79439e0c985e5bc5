//! The game state machine
//!
//! `GameState` owns the attempt grid, the parallel feedback grid, the current
//! attempt index and the win/error flags. Every player intent is a pure
//! transition: it takes the state by reference and returns the next state,
//! with no side effects and no panics. Invalid transitions degrade to no-ops
//! so in-progress input is never lost.
//!
//! The next row's first cell is pre-filled with the secret's first letter
//! after each submission. This is the Motus opening-hint convention, kept on
//! purpose even though it is easy to mistake for a bug; `remove_letter`
//! refuses to empty a row completely so the hint cannot be deleted.

use super::attempt::Attempt;
use crate::core::{Feedback, Secret};

/// Recoverable, user-facing validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The submitted row had fewer letters than the secret
    TooShort,
}

/// Derived game status
///
/// `Won` is checked before the loss condition so winning on the final row
/// reports as a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A player intent, as sent by a front-end
///
/// Front-ends translate key presses into intents and feed them through
/// [`GameState::apply`]; they never touch the grid directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Type one letter into the current row
    Append(char),
    /// Erase the last typed letter of the current row
    Remove,
    /// Submit the current row for scoring
    Validate,
    /// Clear the pending validation error (e.g. after a popup timeout)
    DismissError,
    /// Start over with the same secret
    Reset,
}

/// Complete state of one game
///
/// The single source of truth for rendering: the grid, the feedback rows of
/// submitted attempts, the current attempt index, and the win/error flags.
/// The secret and the attempt allowance are explicit per-instance parameters,
/// so multiple games can run side by side.
///
/// Rows `0..=max_attempts` are playable (`max_attempts` guesses beyond the
/// first). After the last submission `current_attempt` rests at
/// `max_attempts + 1`, one past the final row; that terminal value is never
/// used to index the grid.
///
/// # Examples
/// ```
/// use motus::core::Secret;
/// use motus::game::{GameState, GameStatus};
///
/// let secret = Secret::new("bonjour").unwrap();
/// let game = GameState::new(secret, 5);
///
/// let game = "bonjour"
///     .chars()
///     .fold(game, |game, c| game.append_letter(c))
///     .validate();
/// assert_eq!(game.status(), GameStatus::Won);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Secret,
    max_attempts: usize,
    grid: Vec<Attempt>,
    feedback: Vec<Option<Feedback>>,
    current_attempt: usize,
    win: bool,
    error: Option<ValidationError>,
}

impl GameState {
    /// Start a fresh game
    ///
    /// The grid holds `max_attempts + 1` rows of empty cells; nothing is
    /// seeded until the first submission.
    #[must_use]
    pub fn new(secret: Secret, max_attempts: usize) -> Self {
        let rows = max_attempts + 1;
        let len = secret.len();

        Self {
            secret,
            max_attempts,
            grid: (0..rows).map(|_| Attempt::empty(len)).collect(),
            feedback: vec![None; rows],
            current_attempt: 0,
            win: false,
            error: None,
        }
    }

    /// The hidden word
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    /// Guesses allowed beyond the first
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// All grid rows in order
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &[Attempt] {
        &self.grid
    }

    /// Feedback rows parallel to the grid; `None` for unsubmitted rows
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Option<Feedback>] {
        &self.feedback
    }

    /// Index of the row currently being filled
    ///
    /// Rests at `max_attempts() + 1` once every row has been submitted.
    #[inline]
    #[must_use]
    pub fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    /// The row currently being filled, if the game is still in progress
    #[must_use]
    pub fn current_row(&self) -> Option<&Attempt> {
        self.grid.get(self.current_attempt)
    }

    /// Whether a submitted row matched the secret exactly
    #[inline]
    #[must_use]
    pub fn win(&self) -> bool {
        self.win
    }

    /// The pending validation error, if any
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Derived status: win flag first, then the out-of-attempts condition
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.win {
            GameStatus::Won
        } else if self.current_attempt > self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Dispatch an intent to its transition
    #[must_use]
    pub fn apply(&self, intent: Intent) -> Self {
        match intent {
            Intent::Append(letter) => self.append_letter(letter),
            Intent::Remove => self.remove_letter(),
            Intent::Validate => self.validate(),
            Intent::DismissError => self.dismiss_error(),
            Intent::Reset => self.reset(),
        }
    }

    /// Type one letter into the current row
    ///
    /// The letter is lowercased at this boundary; anything that is not an
    /// ASCII letter is ignored. A full row and a finished game are silent
    /// no-ops, not errors.
    #[must_use]
    pub fn append_letter(&self, letter: char) -> Self {
        if self.status() != GameStatus::InProgress {
            return self.clone();
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return self.clone();
        }

        if self.grid[self.current_attempt].is_full() {
            return self.clone();
        }

        let mut next = self.clone();
        next.grid[next.current_attempt].push(letter as u8);
        next.error = None;
        next
    }

    /// Erase the last typed letter of the current row
    ///
    /// At least one letter always remains: the pre-seeded first letter is
    /// not removable. No-op when the game is over.
    #[must_use]
    pub fn remove_letter(&self) -> Self {
        if self.status() != GameStatus::InProgress {
            return self.clone();
        }

        if self.grid[self.current_attempt].filled_count() <= 1 {
            return self.clone();
        }

        let mut next = self.clone();
        next.grid[next.current_attempt].pop();
        next.error = None;
        next
    }

    /// Submit the current row for scoring
    ///
    /// An under-filled row only sets [`ValidationError::TooShort`] and is
    /// preserved for correction. A full row is scored, its feedback stored,
    /// and the attempt index advances; unless the row won, the next playable
    /// row is seeded with the secret's first letter.
    #[must_use]
    pub fn validate(&self) -> Self {
        if self.status() != GameStatus::InProgress {
            return self.clone();
        }

        let row = &self.grid[self.current_attempt];
        if !row.is_full() {
            let mut next = self.clone();
            next.error = Some(ValidationError::TooShort);
            return next;
        }

        let mut next = self.clone();
        let feedback = Feedback::score(&row.letters(), &self.secret);
        next.win = feedback.is_winning();
        next.feedback[next.current_attempt] = Some(feedback);

        // One past the last row marks the game as out of attempts
        next.current_attempt = (next.current_attempt + 1).min(next.max_attempts + 1);

        if !next.win && next.current_attempt <= next.max_attempts {
            next.grid[next.current_attempt] =
                Attempt::seeded(next.secret.len(), next.secret.first_letter());
        }

        next.error = None;
        next
    }

    /// Clear the pending validation error; everything else is untouched
    #[must_use]
    pub fn dismiss_error(&self) -> Self {
        let mut next = self.clone();
        next.error = None;
        next
    }

    /// Start over with the same secret and attempt allowance
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.secret.clone(), self.max_attempts)
    }

    /// Start over with a different secret
    #[must_use]
    pub fn reset_with(&self, secret: Secret) -> Self {
        Self::new(secret, self.max_attempts)
    }
}
