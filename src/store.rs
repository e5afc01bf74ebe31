//! The persistence boundary: the real backend is an
//! external relational store described only by this interface. The only
//! concrete implementation shipped here is an in-memory stand-in used by
//! tests and the CLI demo.

use crate::error::CoreError;
use crate::record::{PuzzleRecord, PuzzleSummary};
use std::collections::HashMap;
use std::sync::RwLock;

/// CRUD surface a puzzle store must provide. `put` upserts by `record.id`.
pub trait PuzzleStore: Send + Sync {
    fn put(&self, record: PuzzleRecord) -> Result<(), CoreError>;
    fn get(&self, id: &str) -> Result<PuzzleRecord, CoreError>;
    /// Summaries of every stored puzzle, newest first.
    fn list(&self) -> Result<Vec<PuzzleSummary>, CoreError>;
    fn delete(&self, id: &str) -> Result<(), CoreError>;
}

/// A `RwLock<HashMap<..>>`-backed store, sufficient for tests and the demo
/// CLI. Not durable across process restarts.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, PuzzleRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PuzzleStore for InMemoryStore {
    fn put(&self, record: PuzzleRecord) -> Result<(), CoreError> {
        let mut records = self.records.write().map_err(|_| CoreError::Internal {
            message: "puzzle store lock poisoned".to_string(),
        })?;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<PuzzleRecord, CoreError> {
        let records = self.records.read().map_err(|_| CoreError::Internal {
            message: "puzzle store lock poisoned".to_string(),
        })?;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })
    }

    fn list(&self) -> Result<Vec<PuzzleSummary>, CoreError> {
        let records = self.records.read().map_err(|_| CoreError::Internal {
            message: "puzzle store lock poisoned".to_string(),
        })?;
        let mut summaries: Vec<PuzzleSummary> = records.values().map(|r| r.summary()).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn delete(&self, id: &str) -> Result<(), CoreError> {
        let mut records = self.records.write().map_err(|_| CoreError::Internal {
            message: "puzzle store lock poisoned".to_string(),
        })?;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })
    }
}
