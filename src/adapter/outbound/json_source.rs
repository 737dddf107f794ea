//! Scored player pool read from a JSON file.
//!
//! Accepts either a bare array of records or an object with a `players`
//! array, which is the shape the scoring pipeline writes. Records are decoded
//! one at a time so a bad entry is reported as invalid input with its index.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde_json::Value;
use tracing::debug;

use crate::domain::DomainError;
use crate::error::{Error, Result};
use crate::port::outbound::source::{PlayerRecord, PlayerSource};

/// [`PlayerSource`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonPlayerFile {
    path: PathBuf,
}

impl JsonPlayerFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a pool document from a string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the content is not JSON or matches neither
    /// accepted shape, and [`DomainError::MalformedRecord`] for the first
    /// entry that is not a valid player record.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Vec<PlayerRecord>> {
        let entries = match serde_json::from_str::<Value>(content)? {
            Value::Array(entries) => entries,
            Value::Object(mut document) => match document.remove("players") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(not_a_pool().into()),
            },
            _ => return Err(not_a_pool().into()),
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<PlayerRecord>(entry).map_err(|e| {
                    Error::from(DomainError::MalformedRecord {
                        index,
                        reason: e.to_string(),
                    })
                })
            })
            .collect()
    }
}

fn not_a_pool() -> serde_json::Error {
    serde_json::Error::custom("expected an array of players or an object with a `players` array")
}

impl PlayerSource for JsonPlayerFile {
    fn name(&self) -> &str {
        "json_file"
    }

    fn load(&self) -> Result<Vec<PlayerRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records = Self::parse(&content)?;
        debug!(path = %self.path.display(), records = records.len(), "Loaded player pool");
        Ok(records)
    }
}
