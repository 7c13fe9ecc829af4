//! Word lists and dictionary lookup
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

pub mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, WordValidator};
pub use embedded::{WORDS_4, WORDS_5, WORDS_6, WORDS_7, WORDS_8, words_of_length};
