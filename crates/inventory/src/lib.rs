//! Inventory domain module.
//!
//! Business rules for the sweet shop inventory: the `Sweet` entity, the
//! `InventoryManager` that owns the authoritative collection, and the
//! `RecordStore` port the manager persists through. Concrete storage lives in
//! `sweetshop-infra`.

pub mod error;
pub mod item;
pub mod manager;
pub mod report;
pub mod store;

pub use error::{InventoryError, InventoryResult};
pub use item::{Sweet, SweetCategory, SweetRecord};
pub use manager::{
    DEFAULT_LOW_STOCK_THRESHOLD, InventoryManager, Persistence, SortKey, SortOrder, SweetUpdate, sort_sweets,
};
pub use report::{CategorySummary, InventoryReport};
pub use store::{INITIAL_NEXT_ID, RecordStore, StoreError, StoreResult, StoreState};
