//! Round lifecycle
//!
//! A round owns the secret word, the append-only guess history and the
//! remaining-guess counter. Guesses are validated here, before evaluation.

use crate::core::{Feedback, Word};
use crate::wordlists::WordValidator;
use std::fmt;

/// Default number of guesses per round
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Word,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Reasons a guess is rejected before evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    NotEnoughLetters { expected: usize, got: usize },
    TooManyLetters { expected: usize, got: usize },
    InvalidWord,
    NotInWordList,
    RoundOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters { .. } => write!(f, "Not enough letters!"),
            Self::TooManyLetters { .. } => write!(f, "Max letters reached!"),
            Self::InvalidWord => write!(f, "Only letters are allowed!"),
            Self::NotInWordList => write!(f, "Word not in list!"),
            Self::RoundOver => write!(f, "This round is over!"),
        }
    }
}

impl std::error::Error for GuessError {}

/// State of one round of guessing
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    max_guesses: usize,
    remaining: usize,
    records: Vec<GuessRecord>,
    status: RoundStatus,
}

impl Round {
    /// Start a round with the default six guesses
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self::with_max_guesses(secret, DEFAULT_MAX_GUESSES)
    }

    /// Start a round with a custom guess budget (at least one)
    #[must_use]
    pub fn with_max_guesses(secret: Word, max_guesses: usize) -> Self {
        let max_guesses = max_guesses.max(1);
        Self {
            secret,
            max_guesses,
            remaining: max_guesses,
            records: Vec::with_capacity(max_guesses),
            status: RoundStatus::InProgress,
        }
    }

    /// Validate and evaluate a guess
    ///
    /// Rejected guesses leave the round untouched. On success the record is appended,
    /// the remaining counter drops by one and the status is updated: all-exact feedback
    /// wins, otherwise running out of guesses loses.
    ///
    /// # Errors
    /// Returns `GuessError` if the round is over, the guess has the wrong length or
    /// non-letter characters, or the dictionary does not accept it.
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::Word;
    /// use wordle_plus::game::{Round, RoundStatus};
    /// use wordle_plus::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// let mut round = Round::new(Word::new("crane").unwrap());
    ///
    /// round.submit("slate", &dictionary).unwrap();
    /// assert_eq!(round.remaining(), 5);
    ///
    /// let record = round.submit("crane", &dictionary).unwrap();
    /// assert!(record.feedback().is_perfect());
    /// assert_eq!(round.status(), RoundStatus::Won);
    /// ```
    pub fn submit<V: WordValidator + ?Sized>(
        &mut self,
        guess: &str,
        validator: &V,
    ) -> Result<&GuessRecord, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::RoundOver);
        }

        let expected = self.secret.len();
        let got = guess.chars().count();
        if got < expected {
            return Err(GuessError::NotEnoughLetters { expected, got });
        }
        if got > expected {
            return Err(GuessError::TooManyLetters { expected, got });
        }

        let word = Word::new(guess).map_err(|_| GuessError::InvalidWord)?;
        if !validator.is_valid_word(word.text(), expected) {
            return Err(GuessError::NotInWordList);
        }

        let feedback = Feedback::evaluate(&self.secret, &word);
        self.remaining -= 1;
        self.status = if feedback.is_perfect() {
            RoundStatus::Won
        } else if self.remaining == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };

        self.records.push(GuessRecord {
            guess: word,
            feedback,
        });
        Ok(&self.records[self.records.len() - 1])
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of valid guesses submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }
}
