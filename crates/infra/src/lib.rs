//! Infrastructure layer: record store adapters.

pub mod store;

pub use store::{InMemoryRecordStore, JsonFileStore};
