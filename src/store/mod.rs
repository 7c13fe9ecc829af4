//! Local persistent key/value storage
//!
//! Holds the session token and cached profile stats between runs. Values are JSON so
//! that numbers and strings survive a round trip through the file backend.

mod file;
mod memory;
pub mod profile;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use profile::{Profile, ProfileStats};

use serde_json::Value;
use std::path::PathBuf;

/// Errors raised by store backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode store contents: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Simple get/set/clear storage, no transactional guarantees
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove a key; removing a missing key is not an error
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Remove every key
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    fn clear(&mut self) -> Result<(), StoreError>;
}
