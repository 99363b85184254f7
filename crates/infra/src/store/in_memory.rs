//! In-memory record store for tests/dev.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use sweetshop_inventory::{RecordStore, StoreError, StoreResult, StoreState};

/// Keeps the document in memory and counts saves.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    state: RwLock<Option<StoreState>>,
    saves: AtomicUsize,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document (as if a file already existed).
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of successful `save` calls (the initial bootstrap included).
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Last persisted document, if any.
    pub fn state(&self) -> StoreResult<Option<StoreState>> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::Storage("in-memory store lock poisoned".to_string()))?;
        Ok(state.clone())
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self) -> StoreResult<StoreState> {
        if let Some(state) = self.state()? {
            return Ok(state);
        }
        let state = StoreState::default();
        self.save(&state)?;
        Ok(state)
    }

    fn save(&self, state: &StoreState) -> StoreResult<()> {
        let mut slot = self
            .state
            .write()
            .map_err(|_| StoreError::Storage("in-memory store lock poisoned".to_string()))?;
        *slot = Some(state.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_bootstraps_an_empty_document() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.state().unwrap(), None);

        assert_eq!(store.load().unwrap(), StoreState::default());
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.state().unwrap(), Some(StoreState::default()));
    }

    #[test]
    fn save_replaces_the_document() {
        let store = InMemoryRecordStore::with_state(StoreState::default());
        let next = StoreState {
            sweets: Vec::new(),
            next_id: 2000,
        };

        store.save(&next).unwrap();
        assert_eq!(store.load().unwrap().next_id, 2000);
        assert_eq!(store.save_count(), 1);
    }
}
