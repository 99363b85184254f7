//! Text rendering for the menu (fixed `₹` display format).

use sweetshop_core::Entity;
use sweetshop_inventory::{CategorySummary, Sweet};

const RULE_WIDTH: usize = 70;

pub fn format_price(amount: f64) -> String {
    format!("₹{amount:.2}")
}

/// Fixed-width table of sweets, or a one-line "No items." notice.
pub fn render_table(sweets: &[Sweet], title: &str) -> String {
    if sweets.is_empty() {
        return format!("\n{title}: No items.\n");
    }

    let rule = "-".repeat(RULE_WIDTH);
    let mut out = format!("\n{title}:\n{rule}\n");
    out.push_str(&format!(
        "{:<5}{:<20}{:<15}{:<10}{:<10}\n",
        "ID", "Name", "Category", "Price", "Stock"
    ));
    out.push_str(&rule);
    out.push('\n');
    for s in sweets {
        out.push_str(&format!(
            "{:<5}{:<20}{:<15}₹{:<9.2}{:<10}\n",
            s.id(),
            s.name(),
            s.category(),
            s.price(),
            s.quantity()
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out
}

pub fn render_category_line(summary: &CategorySummary) -> String {
    format!(
        "{:<15} {:>2} items, ₹{:>8.2}",
        summary.category, summary.count, summary.value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_core::SweetId;
    use sweetshop_inventory::SweetCategory;

    #[test]
    fn prices_use_rupee_and_two_decimals() {
        assert_eq!(format_price(250.0), "₹250.00");
        assert_eq!(format_price(12.345), "₹12.35");
    }

    #[test]
    fn empty_table_is_a_notice() {
        assert_eq!(render_table(&[], "Inventory"), "\nInventory: No items.\n");
    }

    #[test]
    fn rows_are_fixed_width() {
        let sweet = Sweet::new(SweetId::new(1001).unwrap(), "Kaju Katli", SweetCategory::NutBased, 50.0, 20).unwrap();
        let table = render_table(&[sweet], "Inventory");

        assert!(table.contains("ID   Name                Category       Price     Stock     "));
        assert!(table.contains("1001 Kaju Katli          Nut-Based      ₹50.00    20        "));
    }

    #[test]
    fn category_line() {
        let line = render_category_line(&CategorySummary {
            category: SweetCategory::MilkBased,
            count: 2,
            value: 980.0,
        });
        assert_eq!(line, "Milk-Based       2 items, ₹  980.00");
    }
}
