//! Per-letter feedback for a submitted attempt
//!
//! Each letter of a submitted attempt receives one of three marks:
//! - `Correct` — letter matches the secret at that exact index
//! - `Present` — letter exists in the secret but at another, unclaimed index
//! - `Absent` — no unclaimed occurrence of the letter remains

use super::Secret;

/// Mark for a single letter of a submitted attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    Correct,
    Present,
    Absent,
}

/// Feedback row for one submitted attempt
///
/// Holds exactly one mark per letter of the secret. Produced only by
/// [`Feedback::score`]; rows that were never submitted have no Feedback at
/// all rather than a row of placeholder marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    marks: Vec<LetterMark>,
}

impl Feedback {
    /// Score an attempt against the secret
    ///
    /// This implements the standard duplicate-aware rules in two passes over
    /// a letter → remaining-count map of the secret:
    ///
    /// 1. Exact pass: every position where attempt and secret agree is marked
    ///    `Correct` and consumes one occurrence from the map.
    /// 2. Presence pass: every remaining position whose letter still has an
    ///    unclaimed occurrence is marked `Present` and consumes it; the rest
    ///    stay `Absent`.
    ///
    /// The exact pass fully completes before the presence pass so a repeated
    /// letter is never credited twice, and an exact match later in the word
    /// is never starved by an earlier misplaced claim on the same letter.
    ///
    /// # Examples
    /// ```
    /// use motus::core::{Feedback, Secret};
    ///
    /// let secret = Secret::new("bonjour").unwrap();
    /// let feedback = Feedback::score(b"bonjour", &secret);
    /// assert!(feedback.is_winning());
    ///
    /// // Exact anagram: every letter is present, none in place
    /// let feedback = Feedback::score(b"roubonj", &secret);
    /// assert_eq!(feedback.count_correct(), 0);
    /// assert_eq!(feedback.count_present(), 7);
    /// ```
    ///
    /// # Panics
    /// Debug builds assert that the attempt has exactly as many letters as
    /// the secret; the game engine only submits full rows.
    #[must_use]
    pub fn score(attempt: &[u8], secret: &Secret) -> Self {
        debug_assert_eq!(
            attempt.len(),
            secret.len(),
            "attempt must be exactly as long as the secret"
        );

        let mut marks = vec![LetterMark::Absent; attempt.len()];
        let mut remaining = secret.letter_counts();

        // Exact pass: consume counts for every position-correct letter
        for (i, &letter) in attempt.iter().enumerate() {
            if secret.letters().get(i) == Some(&letter) {
                marks[i] = LetterMark::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Presence pass: remaining positions claim what is left in the pool
        for (i, &letter) in attempt.iter().enumerate() {
            if marks[i] == LetterMark::Absent
                && let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                marks[i] = LetterMark::Present;
                *count -= 1;
            }
        }

        Self { marks }
    }

    /// Marks in attempt order, one per letter
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    /// Number of marks (the word length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for a zero-length row; never produced by [`Feedback::score`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check whether every mark is `Correct` (the winning row)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.marks.iter().all(|&mark| mark == LetterMark::Correct)
    }

    /// Count the number of `Correct` marks
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&mark| mark == LetterMark::Correct)
            .count()
    }

    /// Count the number of `Present` marks
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&mark| mark == LetterMark::Present)
            .count()
    }

    /// Convert the row to an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| match mark {
                LetterMark::Correct => '🟩',
                LetterMark::Present => '🟨',
                LetterMark::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks_of(attempt: &[u8], secret: &str) -> Vec<LetterMark> {
        let secret = Secret::new(secret).unwrap();
        Feedback::score(attempt, &secret).marks().to_vec()
    }

    #[test]
    fn score_all_correct() {
        let secret = Secret::new("bonjour").unwrap();
        let feedback = Feedback::score(b"bonjour", &secret);

        assert!(feedback.is_winning());
        assert_eq!(feedback.count_correct(), 7);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn score_all_absent() {
        let secret = Secret::new("abcde").unwrap();
        let feedback = Feedback::score(b"fghij", &secret);

        assert!(!feedback.is_winning());
        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn score_exact_anagram_all_present() {
        // Every letter of the secret, none in its own position
        let secret = Secret::new("bonjour").unwrap();
        let feedback = Feedback::score(b"roubonj", &secret);

        assert_eq!(feedback.count_correct(), 0);
        assert_eq!(feedback.count_present(), 7);
    }

    #[test]
    fn score_repeated_guess_letter_single_occurrence() {
        use LetterMark::{Absent, Correct, Present};

        // Secret "apple" has one 'e', at the last position. The exact match
        // at index 4 claims it during pass 1, leaving nothing for the two
        // leading 'e's of the guess.
        let marks = marks_of(b"eerie", "apple");
        assert_eq!(marks, vec![Absent, Absent, Absent, Absent, Correct]);

        // Secret "lemon" has one 'e', at index 1, where the guess also has
        // an 'e': the exact match wins and the other 'e's go empty-handed.
        let marks = marks_of(b"eerie", "lemon");
        assert_eq!(marks, vec![Absent, Correct, Absent, Absent, Absent]);

        // No positional match at all: pass 2 credits left-to-right, so only
        // the first 'e' of "speed" gets the single 'e' of "abide".
        let marks = marks_of(b"speed", "abide");
        assert_eq!(marks, vec![Absent, Absent, Present, Absent, Present]);
    }

    #[test]
    fn score_exact_match_consumes_before_presence_pass() {
        // Secret "abbey": two 'b'. Guess "babes": the exact 'b' at index 1
        // consumes one occurrence during pass 1, so pass 2 can still credit
        // the leading 'b' with the second occurrence.
        use LetterMark::{Absent, Correct, Present};

        let marks = marks_of(b"babes", "abbey");
        // b(present) a(present) b(correct) e(correct) s(absent)
        assert_eq!(marks, vec![Present, Present, Correct, Correct, Absent]);
    }

    #[test]
    fn score_late_exact_match_not_starved_by_early_presence_claim() {
        // Secret "floor": one 'o' at 2, one at 3. Guess "robot": the 'o' at
        // index 3 is an exact match and must stay Correct even though the
        // earlier misplaced 'o' (index 1) also wants an occurrence.
        use LetterMark::{Absent, Correct, Present};

        let marks = marks_of(b"robot", "floor");
        // r(present) o(present) b(absent) o(correct) t(absent)
        assert_eq!(marks, vec![Present, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn score_marks_never_exceed_secret_occurrences() {
        // For every letter, Correct + Present marks stay within the letter's
        // count in the secret.
        for (attempt, secret) in [
            (b"eerie".as_slice(), "apple"),
            (b"aaaaa", "ababa"),
            (b"ababa", "aaabb"),
            (b"roubonj", "bonjour"),
        ] {
            let secret = Secret::new(secret).unwrap();
            let feedback = Feedback::score(attempt, &secret);
            let counts = secret.letter_counts();

            for &letter in counts.keys() {
                let claimed = attempt
                    .iter()
                    .zip(feedback.marks())
                    .filter(|&(&l, &mark)| l == letter && mark != LetterMark::Absent)
                    .count();
                assert!(
                    claimed <= usize::from(counts[&letter]),
                    "letter {} over-claimed in {:?} vs {}",
                    letter as char,
                    std::str::from_utf8(attempt).unwrap(),
                    secret.text()
                );
            }
        }
    }

    #[test]
    fn score_correct_at_every_agreeing_index() {
        let secret = Secret::new("bonjour").unwrap();
        let attempt = b"bonsoir";
        let feedback = Feedback::score(attempt, &secret);

        for (i, (&a, &s)) in attempt.iter().zip(secret.letters()).enumerate() {
            if a == s {
                assert_eq!(feedback.marks()[i], LetterMark::Correct);
            }
        }
    }

    #[test]
    fn score_single_letter_word() {
        let secret = Secret::new("a").unwrap();
        assert!(Feedback::score(b"a", &secret).is_winning());
        assert!(!Feedback::score(b"b", &secret).is_winning());
    }

    #[test]
    fn feedback_to_emoji() {
        let secret = Secret::new("floor").unwrap();
        let feedback = Feedback::score(b"robot", &secret);
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn feedback_len_matches_secret() {
        let secret = Secret::new("bonjour").unwrap();
        let feedback = Feedback::score(b"roubonj", &secret);
        assert_eq!(feedback.len(), 7);
        assert!(!feedback.is_empty());
    }
}
