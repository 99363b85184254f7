//! Errors returned by the inventory manager.

use thiserror::Error;

use sweetshop_core::DomainError;

use crate::store::StoreError;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// A domain rule rejected the operation, or the record store failed.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl InventoryError {
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            InventoryError::Domain(e) => Some(e),
            InventoryError::Store(_) => None,
        }
    }
}
