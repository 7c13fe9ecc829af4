//! Game result submission
//!
//! Finished rounds are handed to a [`ResultSink`]. Submission is fire-and-forget from
//! the game's point of view: a failure is reported to the player but never retried and
//! never rolls the round back.

mod outbox;

pub use outbox::OutboxSink;

use crate::game::GameResult;
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub accepted: bool,
    pub reference: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("results endpoint unavailable: {0}")]
    Unavailable(String),
    #[error("result rejected: {0}")]
    Rejected(String),
    #[error("failed to write result: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Remote game-result submission
pub trait ResultSink {
    /// Submit one finished round
    ///
    /// # Errors
    /// Returns `SubmitError` if the result could not be delivered or was refused.
    fn submit(&mut self, result: &GameResult) -> Result<Ack, SubmitError>;
}

/// Sink that keeps results in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    results: Vec<GameResult>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn results(&self) -> &[GameResult] {
        &self.results
    }
}

impl ResultSink for MemorySink {
    fn submit(&mut self, result: &GameResult) -> Result<Ack, SubmitError> {
        self.results.push(result.clone());
        Ok(Ack {
            accepted: true,
            reference: format!("memory-{}", self.results.len()),
        })
    }
}
