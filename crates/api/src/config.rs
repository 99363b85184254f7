//! Server configuration loaded from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use sweetshop_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const BIND_ADDR_VAR: &str = "SWEETSHOP_BIND_ADDR";
pub const DATA_FILE_VAR: &str = "SWEETSHOP_DATA_FILE";
pub const LOW_STOCK_THRESHOLD_VAR: &str = "SWEETSHOP_LOW_STOCK_THRESHOLD";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Configuration error type
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
    pub low_stock_threshold: u32,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank variables use
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse(BIND_ADDR_VAR, &var(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()))?;
        let data_file = var(DATA_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let low_stock_threshold = match var(LOW_STOCK_THRESHOLD_VAR) {
            Some(raw) => parse(LOW_STOCK_THRESHOLD_VAR, &raw)?,
            None => DEFAULT_LOW_STOCK_THRESHOLD,
        };

        Ok(Self {
            bind_addr,
            data_file,
            low_stock_threshold,
        })
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::ParseError {
        key: key.to_string(),
        details: e.to_string(),
    })
}
