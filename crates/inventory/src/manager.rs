//! Inventory manager: the authoritative in-memory collection of sweets.
//!
//! All rules run against the in-memory map first; the record store is only
//! touched once an operation has fully succeeded. Whether that happens after
//! every mutation or only on an explicit [`InventoryManager::save`] is decided
//! by the caller through [`Persistence`].

use std::cmp::Ordering;
use std::collections::BTreeMap;

use sweetshop_core::{DomainError, DomainResult, Entity, SweetId};

use crate::error::InventoryResult;
use crate::item::{Sweet, SweetCategory};
use crate::report::{self, CategorySummary, InventoryReport};
use crate::store::{INITIAL_NEXT_ID, RecordStore, StoreError, StoreState};

/// Quantity at or below which a sweet counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// When mutations reach the record store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Persistence {
    /// Save after every successful mutation.
    #[default]
    Immediate,
    /// Only mark the state dirty; the caller saves explicitly.
    Deferred,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name.
    Name,
    Price,
    Quantity,
    Category,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn descending(descending: bool) -> Self {
        if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Generic field update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetUpdate {
    pub name: Option<String>,
    pub category: Option<SweetCategory>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Pre-mutation state of the touched entries.
#[derive(Debug)]
struct Checkpoint {
    entries: Vec<(SweetId, Option<Sweet>)>,
    next_id: u64,
    dirty: bool,
}

/// Owns the sweets and the store handle they are persisted through.
#[derive(Debug)]
pub struct InventoryManager<S> {
    store: S,
    sweets: BTreeMap<SweetId, Sweet>,
    next_id: u64,
    persistence: Persistence,
    low_stock_threshold: u32,
    dirty: bool,
}

impl<S: RecordStore> InventoryManager<S> {
    /// Load the inventory from `store`.
    pub fn open(store: S, persistence: Persistence) -> InventoryResult<Self> {
        let mut manager = Self {
            store,
            sweets: BTreeMap::new(),
            next_id: INITIAL_NEXT_ID,
            persistence,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            dirty: false,
        };
        manager.reload()?;
        Ok(manager)
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    /// Unsaved mutations exist.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.sweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sweets.is_empty()
    }

    /// Id the next `add` will try first.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    // -------------------------
    // Persistence
    // -------------------------

    /// Discard in-memory state and load it again from the store.
    pub fn reload(&mut self) -> InventoryResult<()> {
        let state = self.store.load()?;
        let (sweets, next_id) = hydrate(state)?;
        self.sweets = sweets;
        self.next_id = next_id;
        self.dirty = false;
        tracing::debug!(count = self.sweets.len(), next_id, "inventory loaded");
        Ok(())
    }

    /// Write the full state to the store.
    pub fn save(&mut self) -> InventoryResult<()> {
        self.store.save(&self.snapshot())?;
        self.dirty = false;
        tracing::debug!(count = self.sweets.len(), next_id = self.next_id, "inventory saved");
        Ok(())
    }

    /// Current state in storage form.
    pub fn snapshot(&self) -> StoreState {
        StoreState {
            sweets: self.sweets.values().map(Sweet::to_record).collect(),
            next_id: self.next_id,
        }
    }

    /// Capture the entries for `ids` (and the counters) before a mutation.
    fn checkpoint(&self, ids: impl IntoIterator<Item = SweetId>) -> Checkpoint {
        Checkpoint {
            entries: ids.into_iter().map(|id| (id, self.sweets.get(&id).cloned())).collect(),
            next_id: self.next_id,
            dirty: self.dirty,
        }
    }

    /// Mark the mutation done and, in `Immediate` mode, persist it. A failed
    /// write restores `checkpoint`, so the in-memory state matches the store.
    fn commit(&mut self, checkpoint: Checkpoint) -> InventoryResult<()> {
        self.dirty = true;
        if self.persistence == Persistence::Deferred {
            return Ok(());
        }
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "store write failed, mutation rolled back");
            self.restore(checkpoint);
            return Err(e);
        }
        Ok(())
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        for (id, previous) in checkpoint.entries {
            match previous {
                Some(sweet) => {
                    self.sweets.insert(id, sweet);
                }
                None => {
                    self.sweets.remove(&id);
                }
            }
        }
        self.next_id = checkpoint.next_id;
        self.dirty = checkpoint.dirty;
    }

    // -------------------------
    // CRUD
    // -------------------------

    /// Add a sweet under the next free auto-assigned id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        category: SweetCategory,
        price: f64,
        quantity: i64,
    ) -> InventoryResult<Sweet> {
        let id = self.free_auto_id()?;
        let sweet = Sweet::new(id, name, category, price, quantity)?;
        let checkpoint = self.checkpoint([id]);

        self.next_id = id.get().saturating_add(1);
        self.sweets.insert(id, sweet.clone());
        tracing::info!(id = %id, name = sweet.name(), "sweet added");

        self.commit(checkpoint)?;
        Ok(sweet)
    }

    /// Add a sweet under a caller-supplied id.
    pub fn add_with_id(
        &mut self,
        id: SweetId,
        name: impl Into<String>,
        category: SweetCategory,
        price: f64,
        quantity: i64,
    ) -> InventoryResult<Sweet> {
        if self.sweets.contains_key(&id) {
            return Err(DomainError::duplicate(id).into());
        }
        let sweet = Sweet::new(id, name, category, price, quantity)?;
        let checkpoint = self.checkpoint([id]);

        self.sweets.insert(id, sweet.clone());
        tracing::info!(id = %id, name = sweet.name(), "sweet added with explicit id");

        self.commit(checkpoint)?;
        Ok(sweet)
    }

    pub fn get(&self, id: SweetId) -> DomainResult<&Sweet> {
        self.sweets.get(&id).ok_or(DomainError::not_found(id))
    }

    /// Every sweet, in id order.
    pub fn all(&self) -> Vec<Sweet> {
        self.sweets.values().cloned().collect()
    }

    /// Remove a sweet, returning it.
    pub fn delete(&mut self, id: SweetId) -> InventoryResult<Sweet> {
        let checkpoint = self.checkpoint([id]);
        let removed = self.sweets.remove(&id).ok_or(DomainError::not_found(id))?;
        tracing::info!(id = %id, "sweet deleted");

        self.commit(checkpoint)?;
        Ok(removed)
    }

    /// Replace any subset of fields. The result is validated as a whole
    /// (category included); nothing changes on failure.
    pub fn update(&mut self, id: SweetId, update: SweetUpdate) -> InventoryResult<Sweet> {
        let current = self.get(id)?;
        let updated = Sweet::new(
            id,
            update.name.unwrap_or_else(|| current.name().to_string()),
            update.category.unwrap_or(current.category()),
            update.price.unwrap_or(current.price()),
            update.quantity.unwrap_or(i64::from(current.quantity())),
        )?;
        let checkpoint = self.checkpoint([id]);

        self.sweets.insert(id, updated.clone());
        tracing::info!(id = %id, "sweet updated");

        self.commit(checkpoint)?;
        Ok(updated)
    }

    pub fn update_price(&mut self, id: SweetId, new_price: f64) -> InventoryResult<Sweet> {
        let updated = self.get(id)?.with_price(new_price)?;
        let checkpoint = self.checkpoint([id]);

        self.sweets.insert(id, updated.clone());
        tracing::info!(id = %id, price = new_price, "price updated");

        self.commit(checkpoint)?;
        Ok(updated)
    }

    // -------------------------
    // Stock movements
    // -------------------------

    /// Sell `quantity` units. Returns the updated sweet and the total cost.
    pub fn purchase(&mut self, id: SweetId, quantity: i64) -> InventoryResult<(Sweet, f64)> {
        let current = self.get(id)?;
        if quantity <= 0 {
            return Err(DomainError::validation("purchase quantity must be positive").into());
        }
        let available = current.quantity();
        let remaining = u32::try_from(quantity)
            .ok()
            .and_then(|q| available.checked_sub(q))
            .ok_or(DomainError::InsufficientStock {
                id,
                requested: quantity,
                available,
            })?;

        let updated = current.with_quantity(remaining);
        let total_cost = quantity as f64 * updated.price();
        let checkpoint = self.checkpoint([id]);

        self.sweets.insert(id, updated.clone());
        tracing::info!(id = %id, quantity, total_cost, remaining, "sweet purchased");

        self.commit(checkpoint)?;
        Ok((updated, total_cost))
    }

    /// Add `quantity` units to stock.
    pub fn restock(&mut self, id: SweetId, quantity: i64) -> InventoryResult<Sweet> {
        let current = self.get(id)?;
        if quantity <= 0 {
            return Err(DomainError::validation("restock quantity must be positive").into());
        }
        let new_quantity = u32::try_from(quantity)
            .ok()
            .and_then(|q| current.quantity().checked_add(q))
            .ok_or_else(|| DomainError::validation("restock would overflow the stock quantity"))?;

        let updated = current.with_quantity(new_quantity);
        let checkpoint = self.checkpoint([id]);

        self.sweets.insert(id, updated.clone());
        tracing::info!(id = %id, quantity, new_quantity, "sweet restocked");

        self.commit(checkpoint)?;
        Ok(updated)
    }

    /// Remove every sweet and reset the id counter.
    pub fn clear(&mut self) -> InventoryResult<()> {
        let checkpoint = self.checkpoint(self.sweets.keys().copied().collect::<Vec<_>>());
        self.sweets.clear();
        self.next_id = INITIAL_NEXT_ID;
        tracing::info!("inventory cleared");

        self.commit(checkpoint)
    }

    // -------------------------
    // Search
    // -------------------------

    /// Case-insensitive substring match on the name.
    pub fn search_by_name(&self, needle: &str) -> Vec<Sweet> {
        let needle = needle.to_lowercase();
        self.filtered(|s| s.name().to_lowercase().contains(&needle))
    }

    pub fn search_by_category(&self, category: SweetCategory) -> Vec<Sweet> {
        self.filtered(|s| s.category() == category)
    }

    /// Sweets with `min <= price <= max`.
    pub fn search_by_price_range(&self, min: f64, max: f64) -> DomainResult<Vec<Sweet>> {
        if !(min <= max) {
            return Err(DomainError::validation(format!(
                "invalid price range: min {min} is greater than max {max}"
            )));
        }
        Ok(self.filtered(|s| min <= s.price() && s.price() <= max))
    }

    /// Case-insensitive substring match on the name or the category label.
    pub fn search(&self, term: &str) -> Vec<Sweet> {
        let term = term.to_lowercase();
        self.filtered(|s| {
            s.name().to_lowercase().contains(&term)
                || s.category().as_str().to_lowercase().contains(&term)
        })
    }

    fn filtered(&self, predicate: impl Fn(&Sweet) -> bool) -> Vec<Sweet> {
        self.sweets.values().filter(|s| predicate(s)).cloned().collect()
    }

    // -------------------------
    // Sorting
    // -------------------------

    /// Stable sort of all sweets; ties keep id order.
    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<Sweet> {
        let mut sweets = self.all();
        sort_sweets(&mut sweets, key, order);
        sweets
    }

    pub fn sort_by_name(&self, descending: bool) -> Vec<Sweet> {
        self.sorted(SortKey::Name, SortOrder::descending(descending))
    }

    pub fn sort_by_price(&self, descending: bool) -> Vec<Sweet> {
        self.sorted(SortKey::Price, SortOrder::descending(descending))
    }

    pub fn sort_by_quantity(&self, descending: bool) -> Vec<Sweet> {
        self.sorted(SortKey::Quantity, SortOrder::descending(descending))
    }

    // -------------------------
    // Reports
    // -------------------------

    pub fn total_inventory_value(&self) -> f64 {
        report::total_value(self.sweets.values())
    }

    /// Sweets with `quantity <= threshold` (the configured default when `None`).
    pub fn low_stock(&self, threshold: Option<u32>) -> Vec<Sweet> {
        let threshold = threshold.unwrap_or(self.low_stock_threshold);
        self.filtered(|s| s.quantity() <= threshold)
    }

    pub fn category_summary(&self) -> Vec<CategorySummary> {
        report::summarize_by_category(self.sweets.values())
    }

    pub fn report(&self, threshold: Option<u32>) -> InventoryReport {
        InventoryReport {
            total_value: self.total_inventory_value(),
            low_stock_threshold: threshold.unwrap_or(self.low_stock_threshold),
            low_stock: self.low_stock(threshold),
            categories: self.category_summary(),
        }
    }

    /// First unoccupied id at or after the counter, so auto ids never collide
    /// with ids inserted through `add_with_id`.
    fn free_auto_id(&self) -> DomainResult<SweetId> {
        let mut raw = self.next_id.max(1);
        loop {
            let id = SweetId::new(raw)?;
            if !self.sweets.contains_key(&id) {
                return Ok(id);
            }
            raw = raw
                .checked_add(1)
                .ok_or_else(|| DomainError::validation("sweet id space exhausted"))?;
        }
    }
}

/// Stable in-place sort of any selection of sweets (e.g. search results).
pub fn sort_sweets(sweets: &mut [Sweet], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Ascending => sweets.sort_by(|a, b| compare(key, a, b)),
        SortOrder::Descending => sweets.sort_by(|a, b| compare(key, b, a)),
    }
}

fn compare(key: SortKey, a: &Sweet, b: &Sweet) -> Ordering {
    match key {
        SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortKey::Price => a.price().total_cmp(&b.price()),
        SortKey::Quantity => a.quantity().cmp(&b.quantity()),
        SortKey::Category => a.category().cmp(&b.category()),
    }
}

fn hydrate(state: StoreState) -> Result<(BTreeMap<SweetId, Sweet>, u64), StoreError> {
    let mut sweets = BTreeMap::new();
    for record in state.sweets {
        let sweet = Sweet::from_record(record)?;
        let id = sweet.id();
        if sweets.insert(id, sweet).is_some() {
            return Err(StoreError::InvalidRecord(DomainError::duplicate(id)));
        }
    }
    Ok((sweets, state.next_id))
}
