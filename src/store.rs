//! Durable storage for the statistics record.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::debug;

use crate::models::Stats;

/// Errors surfaced by stats stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("stats record not serializable: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Where the cumulative statistics live between sessions.
///
/// One logical record. Loads that find nothing usable report `Ok(None)`;
/// the caller falls back to zeroed counters.
pub trait StatsStore: Send {
    /// Load the persisted record, `Ok(None)` when absent or unparseable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the record exists but cannot be read.
    fn load(&self) -> Result<Option<Stats>, StoreError>;

    /// Replace the persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` when the record cannot be written.
    fn save(&self, stats: &Stats) -> Result<(), StoreError>;
}

/// File-backed store holding the record as a single JSON document.
pub struct JsonStatsStore {
    path: PathBuf,
}

impl JsonStatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonStatsStore {
    fn load(&self) -> Result<Option<Stats>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        // The derived deserializer also accepts positional arrays like
        // [1, 2]; only a JSON object counts as the persisted shape.
        let contents = fs::read_to_string(&self.path)?;
        let value: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(err) => {
                debug!("discarding unparseable stats record: {err}");
                return Ok(None);
            }
        };
        if !value.is_object() {
            debug!("discarding non-object stats record");
            return Ok(None);
        }
        match serde_json::from_value(value) {
            Ok(stats) => Ok(Some(stats)),
            Err(err) => {
                debug!("discarding malformed stats record: {err}");
                Ok(None)
            }
        }
    }

    fn save(&self, stats: &Stats) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and prototyping.
#[derive(Clone, Default)]
pub struct MemoryStatsStore {
    record: Arc<Mutex<Option<Stats>>>,
}

impl MemoryStatsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record as last saved, if any.
    #[must_use]
    pub fn saved(&self) -> Option<Stats> {
        self.record.lock().ok().and_then(|guard| *guard)
    }
}

impl StatsStore for MemoryStatsStore {
    fn load(&self) -> Result<Option<Stats>, StoreError> {
        let guard = self
            .record
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(*guard)
    }

    fn save(&self, stats: &Stats) -> Result<(), StoreError> {
        let mut guard = self
            .record
            .lock()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        *guard = Some(*stats);
        Ok(())
    }
}
