//! Aggregate reporting over the inventory.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::{Sweet, SweetCategory};

/// Per-category totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: SweetCategory,
    pub count: usize,
    pub value: f64,
}

/// Snapshot report: total value, low-stock lines, category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryReport {
    pub total_value: f64,
    pub low_stock_threshold: u32,
    pub low_stock: Vec<Sweet>,
    pub categories: Vec<CategorySummary>,
}

/// Sum of `price * quantity`; zero for an empty inventory.
pub fn total_value<'a>(sweets: impl IntoIterator<Item = &'a Sweet>) -> f64 {
    sweets.into_iter().map(Sweet::value).sum()
}

/// Group by category. Only categories that have at least one sweet appear,
/// in category order.
pub fn summarize_by_category<'a>(sweets: impl IntoIterator<Item = &'a Sweet>) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<SweetCategory, (usize, f64)> = BTreeMap::new();
    for sweet in sweets {
        let entry = groups.entry(sweet.category()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += sweet.value();
    }

    groups
        .into_iter()
        .map(|(category, (count, value))| CategorySummary {
            category,
            count,
            value,
        })
        .collect()
}
