//! Record Store port: durable copy of the inventory.
//!
//! The manager only depends on this trait; file and in-memory adapters live in
//! `sweetshop-infra`.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use sweetshop_core::DomainError;

use crate::item::SweetRecord;

/// First id handed out by a fresh store.
pub const INITIAL_NEXT_ID: u64 = 1001;

/// Persisted document: `{"sweets": [...], "next_id": 1001}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub sweets: Vec<SweetRecord>,
    #[serde(default = "initial_next_id")]
    pub next_id: u64,
}

fn initial_next_id() -> u64 {
    INITIAL_NEXT_ID
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            sweets: Vec::new(),
            next_id: INITIAL_NEXT_ID,
        }
    }
}

/// Result type used by record stores.
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed store document: {0}")]
    Malformed(String),
    #[error("invalid record in store: {0}")]
    InvalidRecord(#[from] DomainError),
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Durable storage for the inventory document.
pub trait RecordStore: Send + Sync {
    /// Load the document. Implementations create (and persist) an empty
    /// document when none exists yet.
    fn load(&self) -> StoreResult<StoreState>;

    /// Overwrite the document.
    fn save(&self, state: &StoreState) -> StoreResult<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load(&self) -> StoreResult<StoreState> {
        (**self).load()
    }

    fn save(&self, state: &StoreState) -> StoreResult<()> {
        (**self).save(state)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    fn load(&self) -> StoreResult<StoreState> {
        (**self).load()
    }

    fn save(&self, state: &StoreState) -> StoreResult<()> {
        (**self).save(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let state: StoreState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, StoreState::default());
        assert_eq!(state.next_id, 1001);
        assert!(state.sweets.is_empty());
    }

    #[test]
    fn document_shape() {
        let state: StoreState = serde_json::from_str(
            r#"{"sweets": [{"id": 1001, "name": "Jalebi", "category": "Candy", "price": 15.0, "quantity": 35}], "next_id": 1002}"#,
        )
        .unwrap();
        assert_eq!(state.next_id, 1002);
        assert_eq!(state.sweets.len(), 1);
        assert_eq!(state.sweets[0].name, "Jalebi");
    }
}
