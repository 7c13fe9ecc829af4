//! Letter entry for the current guess

use super::round::GuessError;

/// A key from the physical or virtual keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Delete,
    Enter,
}

impl Key {
    /// Map a typed character to a letter key
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_lowercase()))
    }
}

/// Buffer holding the letters typed for the guess in progress
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterInput {
    letters: String,
    capacity: usize,
}

impl LetterInput {
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            letters: String::new(),
            capacity,
        }
    }

    /// Append a letter
    ///
    /// # Errors
    /// Returns `GuessError::TooManyLetters` once the buffer holds a full word.
    pub fn push(&mut self, letter: char) -> Result<(), GuessError> {
        if self.letters.len() >= self.capacity {
            return Err(GuessError::TooManyLetters {
                expected: self.capacity,
                got: self.letters.len() + 1,
            });
        }
        self.letters.push(letter.to_ascii_lowercase());
        Ok(())
    }

    /// Delete the last letter, if any
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= self.capacity
    }
}
