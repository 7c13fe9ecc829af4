//! Append-only JSON-lines outbox
//!
//! Each accepted result becomes one line of JSON, to be forwarded to the backend by
//! whatever syncs the file.

use super::{Ack, ResultSink, SubmitError};
use crate::game::GameResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct OutboxSink {
    path: PathBuf,
}

impl OutboxSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultSink for OutboxSink {
    fn submit(&mut self, result: &GameResult) -> Result<Ack, SubmitError> {
        let line = serde_json::to_string(result)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        let offset = file.metadata()?.len();
        log::info!(
            "queued result for '{}' in {}",
            result.word,
            self.path.display()
        );

        Ok(Ack {
            accepted: true,
            reference: format!("{}@{offset}", self.path.display()),
        })
    }
}
