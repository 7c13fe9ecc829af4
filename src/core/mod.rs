//! Core domain types for the word game
//!
//! Pure types with no I/O: words and the guess evaluator.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterVerdict, evaluate};
pub use word::{WORD_LENGTHS, Word, WordError};
