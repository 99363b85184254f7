use serde::Deserialize;

use sweetshop_core::{DomainError, SweetId};
use sweetshop_inventory::{SortKey, SortOrder, SweetCategory, SweetUpdate};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Add/edit form body.
#[derive(Debug, Deserialize)]
pub struct SweetForm {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
}

impl SweetForm {
    pub fn category(&self) -> Result<SweetCategory, DomainError> {
        self.category.parse()
    }

    /// Edit form: every field is replaced.
    pub fn into_update(self) -> Result<SweetUpdate, DomainError> {
        let category = self.category()?;
        Ok(SweetUpdate {
            name: Some(self.name),
            category: Some(category),
            price: Some(self.price),
            quantity: Some(self.quantity),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct PriceForm {
    pub price: f64,
}

/// Listing query string: `?search=..&sort_by=..&order=..`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ListQuery {
    /// Trimmed, non-empty search term.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// `None` keeps id order.
    pub fn sort(&self) -> Result<Option<(SortKey, SortOrder)>, DomainError> {
        let key = match self.sort_by.as_deref().map(str::trim) {
            None | Some("") => return Ok(None),
            Some(raw) => parse_sort_key(raw)?,
        };
        let order = match self.order.as_deref().map(str::trim) {
            None | Some("") => SortOrder::Ascending,
            Some(raw) => parse_sort_order(raw)?,
        };
        Ok(Some((key, order)))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub threshold: Option<u32>,
}

pub fn parse_sort_key(s: &str) -> Result<SortKey, DomainError> {
    match s.to_lowercase().as_str() {
        "name" => Ok(SortKey::Name),
        "price" => Ok(SortKey::Price),
        "quantity" | "stock" => Ok(SortKey::Quantity),
        "category" => Ok(SortKey::Category),
        _ => Err(DomainError::validation(
            "sort_by must be one of: name, price, quantity, category",
        )),
    }
}

pub fn parse_sort_order(s: &str) -> Result<SortOrder, DomainError> {
    match s.to_lowercase().as_str() {
        "asc" => Ok(SortOrder::Ascending),
        "desc" => Ok(SortOrder::Descending),
        _ => Err(DomainError::validation("order must be one of: asc, desc")),
    }
}

/// Path segment -> id, as an error response on failure.
pub fn parse_id(raw: &str) -> Result<SweetId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(axum::http::StatusCode::BAD_REQUEST, "invalid_id", "invalid sweet id"))
}
