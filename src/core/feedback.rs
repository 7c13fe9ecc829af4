//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess gets one verdict:
//! - Absent (gray): letter not in the secret, or all its occurrences already credited
//! - Present (yellow): letter in the secret at another position
//! - Exact (green): letter in the correct position

use super::Word;
use std::fmt;

/// Classification of one guessed letter
///
/// Ordered so that a better verdict compares greater: `Absent < Present < Exact`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict {
    Absent,
    Present,
    Exact,
}

impl LetterVerdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code used in text mode (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Verdicts for every position of one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterVerdict>);

impl Feedback {
    /// Evaluate `guess` against `secret`
    ///
    /// Implements Wordle's scoring rules, including proper handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those secret letters
    /// 2. Second pass: for each remaining guess letter, consume the first unconsumed
    ///    occurrence in the secret and mark it present
    ///
    /// Rounds reject length mismatches before evaluating. Given words of different
    /// lengths anyway, the feedback has one verdict per guess letter and positions past
    /// the end of the secret can only be Present or Absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::{Feedback, LetterVerdict::*, Word};
    ///
    /// let secret = Word::new("speed").unwrap();
    /// let guess = Word::new("erase").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// assert_eq!(feedback.verdicts(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let guess = guess.chars();
        let mut remaining: Vec<Option<u8>> = secret.chars().iter().copied().map(Some).collect();
        let mut verdicts = vec![LetterVerdict::Absent; guess.len()];

        for ((verdict, slot), &letter) in verdicts.iter_mut().zip(&mut remaining).zip(guess) {
            if *slot == Some(letter) {
                *verdict = LetterVerdict::Exact;
                *slot = None;
            }
        }

        for (i, &letter) in guess.iter().enumerate() {
            if verdicts[i] == LetterVerdict::Exact {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                verdicts[i] = LetterVerdict::Present;
                *slot = None;
            }
        }

        Self(verdicts)
    }

    /// Build feedback from explicit verdicts
    #[must_use]
    pub const fn from_verdicts(verdicts: Vec<LetterVerdict>) -> Self {
        Self(verdicts)
    }

    /// The per-position verdicts
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&v| v == LetterVerdict::Exact)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_plus::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let verdicts: Option<Vec<LetterVerdict>> = s.chars().map(LetterVerdict::from_code).collect();
        verdicts.filter(|v| !v.is_empty()).map(Self)
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `secret`
///
/// Shorthand for [`Feedback::evaluate`].
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> Feedback {
    Feedback::evaluate(secret, guess)
}
