//! Record store implementations.
//!
//! - `json_file`: the durable JSON document used by the binaries.
//! - `in_memory`: process-local store for tests/dev.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryRecordStore;
pub use json_file::JsonFileStore;
