//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a sweet (positive integer, unique within a store).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SweetId(u64);

impl SweetId {
    /// Create an identifier. Zero is rejected: ids are positive.
    pub fn new(raw: u64) -> Result<Self, DomainError> {
        if raw == 0 {
            return Err(DomainError::invalid_id("SweetId: must be positive"));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SweetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u64> for SweetId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SweetId> for u64 {
    fn from(value: SweetId) -> Self {
        value.0
    }
}

impl FromStr for SweetId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("SweetId: {e}")))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_id() {
        assert!(matches!(SweetId::new(0), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn parses_from_text() {
        let id: SweetId = " 1001 ".parse().unwrap();
        assert_eq!(id.get(), 1001);
        assert!("abc".parse::<SweetId>().is_err());
        assert!("-3".parse::<SweetId>().is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let id = SweetId::new(1002).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "1002");
        let back: SweetId = serde_json::from_str("1002").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<SweetId>("0").is_err());
    }
}
