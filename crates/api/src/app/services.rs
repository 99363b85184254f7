//! Service wiring: one inventory manager shared by every request.

use std::sync::Mutex;

use sweetshop_infra::JsonFileStore;
use sweetshop_inventory::{InventoryError, InventoryManager, Persistence, RecordStore};

use crate::config::ApiConfig;

/// Store handle type used by the server (file in production, anything in tests).
pub type SharedStore = Box<dyn RecordStore>;

pub type SharedInventory = InventoryManager<SharedStore>;

/// Service-layer error.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error("inventory lock poisoned")]
    Poisoned,
}

/// Application services shared through an `Extension`.
///
/// Requests are serialised on the manager mutex; the lock is never held across
/// an `.await`.
pub struct AppServices {
    inventory: Mutex<SharedInventory>,
}

impl AppServices {
    pub fn new(inventory: SharedInventory) -> Self {
        Self {
            inventory: Mutex::new(inventory),
        }
    }

    /// Open the JSON file named by `config`. Every mutation is persisted
    /// immediately.
    pub fn open_file(config: &ApiConfig) -> Result<Self, ServiceError> {
        let store: SharedStore = Box::new(JsonFileStore::new(&config.data_file));
        let inventory = InventoryManager::open(store, Persistence::Immediate)?
            .with_low_stock_threshold(config.low_stock_threshold);
        tracing::info!(sweets = inventory.len(), "inventory opened");
        Ok(Self::new(inventory))
    }

    /// Run `f` with exclusive access to the manager.
    pub fn with_inventory<T>(
        &self,
        f: impl FnOnce(&mut SharedInventory) -> Result<T, InventoryError>,
    ) -> Result<T, ServiceError> {
        let mut inventory = self.inventory.lock().map_err(|_| ServiceError::Poisoned)?;
        Ok(f(&mut inventory)?)
    }
}
