//! Wordle+
//!
//! A word-guessing game with duplicate-safe letter scoring, rounds of 4 to 8 letters,
//! XP and ranks, and a TUI and text mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_plus::core::{LetterVerdict, Word, evaluate};
//!
//! let secret = Word::new("speed").unwrap();
//! let guess = Word::new("erase").unwrap();
//!
//! let feedback = evaluate(&secret, &guess);
//! assert_eq!(feedback.to_emoji(), "🟨⬜⬜🟨🟨");
//! assert_eq!(feedback.count(LetterVerdict::Present), 3);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Rounds, input and scoring
pub mod game;

// Local key/value persistence
pub mod store;

// Round result submission
pub mod results;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
