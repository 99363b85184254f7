//! Domain error model.

use thiserror::Error;

use crate::id::SweetId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, stock rules). Storage failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (bad field, bad range, non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure, zero).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No sweet exists with the given id.
    #[error("sweet {0} not found")]
    NotFound(SweetId),

    /// An explicit insert collided with an existing id.
    #[error("sweet {0} already exists")]
    Duplicate(SweetId),

    /// A purchase asked for more than is in stock.
    #[error("insufficient stock for sweet {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: SweetId,
        requested: i64,
        available: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: SweetId) -> Self {
        Self::NotFound(id)
    }

    pub fn duplicate(id: SweetId) -> Self {
        Self::Duplicate(id)
    }

    /// Stable machine-readable code (used by HTTP error bodies).
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation(_) => "validation_error",
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::NotFound(_) => "not_found",
            DomainError::Duplicate(_) => "duplicate",
            DomainError::InsufficientStock { .. } => "insufficient_stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_sweet() {
        let id = SweetId::new(1001).unwrap();
        assert_eq!(DomainError::not_found(id).to_string(), "sweet 1001 not found");
        assert_eq!(DomainError::duplicate(id).to_string(), "sweet 1001 already exists");

        let err = DomainError::InsufficientStock {
            id,
            requested: 25,
            available: 20,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for sweet 1001: requested 25, available 20"
        );
        assert_eq!(err.code(), "insufficient_stock");
    }
}
