//! Sample inventory used when the shop starts empty.

use sweetshop_inventory::{InventoryManager, InventoryResult, RecordStore, SweetCategory};

/// `(name, category, price, quantity)`
pub const SAMPLE_SWEETS: [(&str, SweetCategory, f64, i64); 8] = [
    ("Kaju Katli", SweetCategory::NutBased, 50.0, 20),
    ("Gulab Jamun", SweetCategory::MilkBased, 10.0, 50),
    ("Gajar Halwa", SweetCategory::VegetableBased, 30.0, 15),
    ("Dark Chocolate", SweetCategory::Chocolate, 80.0, 25),
    ("Rasgulla", SweetCategory::MilkBased, 12.0, 40),
    ("Badam Burfi", SweetCategory::NutBased, 60.0, 18),
    ("Chocolate Cake", SweetCategory::Pastry, 120.0, 8),
    ("Jalebi", SweetCategory::Candy, 15.0, 35),
];

/// Add every sample sweet; returns how many were added.
pub fn load_sample_data<S: RecordStore>(shop: &mut InventoryManager<S>) -> InventoryResult<usize> {
    for (name, category, price, quantity) in SAMPLE_SWEETS {
        shop.add(name, category, price, quantity)?;
    }
    tracing::debug!(count = SAMPLE_SWEETS.len(), "sample data loaded");
    Ok(SAMPLE_SWEETS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_infra::InMemoryRecordStore;
    use sweetshop_inventory::Persistence;

    #[test]
    fn loads_all_samples_with_sequential_ids() {
        let mut shop = InventoryManager::open(InMemoryRecordStore::new(), Persistence::Deferred).unwrap();

        assert_eq!(load_sample_data(&mut shop).unwrap(), 8);
        assert_eq!(shop.len(), 8);
        assert_eq!(shop.next_id(), 1009);
        assert_eq!(shop.search_by_name("jalebi").len(), 1);
        assert_eq!(shop.low_stock(None).len(), 0);
    }
}
