//! Runtime configuration
//!
//! Built from the command line in `main.rs`; everything that opens a file or seeds
//! randomness goes through here.

use crate::core::WORD_LENGTHS;
use crate::results::OutboxSink;
use crate::store::{JsonFileStore, MemoryStore, Profile, StoreError};
use crate::wordlists::Dictionary;
use crate::wordlists::loader::load_from_file;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_STORE_PATH: &str = "wordle_plus_profile.json";
pub const DEFAULT_OUTBOX_PATH: &str = "wordle_plus_results.jsonl";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    Embedded,
    File(PathBuf),
}

impl WordlistSource {
    /// `embedded` selects the built-in lists, anything else is a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "embedded" | "all" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

impl StoreLocation {
    /// `memory` keeps the profile for this run only, anything else is a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "memory" => Self::Memory,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word length must be between {min} and {max}, got {0}", min = WORD_LENGTHS.start(), max = WORD_LENGTHS.end())]
    WordLength(usize),
    #[error("at least one guess per round is required")]
    MaxGuesses,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub wordlist: WordlistSource,
    pub store: StoreLocation,
    pub outbox: PathBuf,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: crate::game::DEFAULT_MAX_GUESSES,
            wordlist: WordlistSource::Embedded,
            store: StoreLocation::File(PathBuf::from(DEFAULT_STORE_PATH)),
            outbox: PathBuf::from(DEFAULT_OUTBOX_PATH),
            seed: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    /// Returns `ConfigError` for an unsupported word length or a zero guess budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !WORD_LENGTHS.contains(&self.word_length) {
            return Err(ConfigError::WordLength(self.word_length));
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::MaxGuesses);
        }
        Ok(())
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    /// Returns an I/O error if a custom word list cannot be read.
    pub fn dictionary(&self) -> std::io::Result<Dictionary> {
        match &self.wordlist {
            WordlistSource::Embedded => Ok(Dictionary::embedded()),
            WordlistSource::File(path) => Ok(Dictionary::from_words(load_from_file(path)?)),
        }
    }

    /// Open the profile store
    ///
    /// # Errors
    /// Returns `StoreError` if the store file exists but cannot be read.
    pub fn profile(&self) -> Result<Profile, StoreError> {
        match &self.store {
            StoreLocation::Memory => Ok(Profile::new(MemoryStore::new())),
            StoreLocation::File(path) => Ok(Profile::new(JsonFileStore::open(path.clone())?)),
        }
    }

    #[must_use]
    pub fn sink(&self) -> OutboxSink {
        OutboxSink::new(self.outbox.clone())
    }

    /// Seeded when `seed` is set, otherwise from OS entropy
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
