//! Virtual keyboard coloring

use crate::core::LetterVerdict;
use super::round::GuessRecord;
use rustc_hash::FxHashMap;

/// QWERTY rows shown on the virtual keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best verdict seen per letter this round
///
/// A key only ever moves up (absent → present → exact), so a letter found in place
/// stays green even when a later guess uses it elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    keys: FxHashMap<u8, LetterVerdict>,
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess's feedback into the key states
    pub fn apply(&mut self, record: &GuessRecord) {
        let letters = record.guess().chars();
        for (&letter, &verdict) in letters.iter().zip(record.feedback().verdicts()) {
            self.keys
                .entry(letter)
                .and_modify(|current| *current = (*current).max(verdict))
                .or_insert(verdict);
        }
    }

    /// State of a key, `None` when the letter has not been guessed
    #[must_use]
    pub fn state(&self, letter: char) -> Option<LetterVerdict> {
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(|byte| self.keys.get(&byte).copied())
    }

    pub fn reset(&mut self) {
        self.keys.clear();
    }
}
