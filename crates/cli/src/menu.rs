//! Numbered text menu over an [`InventoryManager`].
//!
//! Input and output are generic so a session can be scripted. The manager is
//! expected to run in [`Persistence::Deferred`](sweetshop_inventory::Persistence)
//! mode: nothing reaches the store until "Save & Exit".

use std::io::{self, BufRead, Write};

use thiserror::Error;

use sweetshop_core::{DomainError, SweetId};
use sweetshop_inventory::{InventoryError, InventoryManager, RecordStore, SweetCategory};

use crate::display::{format_price, render_category_line, render_table};

/// How a menu session ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Exit {
    /// "Save & Exit" succeeded.
    Saved,
    /// "Exit without saving".
    Discarded,
    /// Input closed; nothing was saved.
    EndOfInput,
}

#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("input closed")]
    EndOfInput,
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

type MenuResult<T> = Result<T, MenuError>;

pub struct Menu<R, W, S> {
    shop: InventoryManager<S>,
    location: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, S: RecordStore> Menu<R, W, S> {
    /// `location` names where "Save & Exit" writes to (shown to the user).
    pub fn new(shop: InventoryManager<S>, location: impl Into<String>, input: R, output: W) -> Self {
        Self {
            shop,
            location: location.into(),
            input,
            output,
        }
    }

    pub fn into_inventory(self) -> InventoryManager<S> {
        self.shop
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self) -> anyhow::Result<Exit> {
        writeln!(self.output, "Welcome to Sweet Shop Management System!")?;
        loop {
            match self.step() {
                Ok(Some(exit)) => return Ok(exit),
                Ok(None) => {}
                Err(MenuError::EndOfInput) => return Ok(Exit::EndOfInput),
                Err(MenuError::Io(e)) => return Err(e.into()),
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
            match self.prompt("\nPress Enter to continue...") {
                Ok(_) => {}
                Err(MenuError::EndOfInput) => return Ok(Exit::EndOfInput),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn step(&mut self) -> MenuResult<Option<Exit>> {
        self.show_menu()?;
        let choice = self.prompt("Choice: ")?;
        tracing::debug!(choice = %choice, "menu choice");

        match choice.as_str() {
            "1" => self.add_sweet()?,
            "2" => self.delete_sweet()?,
            "3" => self.view_all()?,
            "4" => self.search_sweets()?,
            "5" => self.purchase()?,
            "6" => self.restock()?,
            "7" => self.update_price()?,
            "8" => self.sort_sweets()?,
            "9" => self.reports()?,
            "10" => {
                if self.save()? {
                    return Ok(Some(Exit::Saved));
                }
            }
            "0" => {
                writeln!(self.output, "Exiting without saving.")?;
                return Ok(Some(Exit::Discarded));
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(None)
    }

    fn show_menu(&mut self) -> MenuResult<()> {
        let rule = "=".repeat(40);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, " Sweet Shop Management System")?;
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "1. Add Sweet    2. Delete Sweet")?;
        writeln!(self.output, "3. View All     4. Search Sweets")?;
        writeln!(self.output, "5. Purchase     6. Restock")?;
        writeln!(self.output, "7. Update Price 8. Sort Sweets")?;
        writeln!(self.output, "9. Reports      10. Save & Exit")?;
        writeln!(self.output, "0. Exit without saving")?;
        Ok(())
    }

    // -------------------------
    // Actions
    // -------------------------

    fn add_sweet(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\n--- Add Sweet ---")?;
        let name = self.prompt("Sweet name: ")?;
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(());
        }
        let Some(category) = self.choose_category()? else {
            return Ok(());
        };
        let price = self.prompt_number::<f64>("Price: ₹")?;
        let quantity = self.prompt_number::<i64>("Quantity: ")?;

        self.shop.add(name, category, price, quantity)?;
        writeln!(self.output, "Sweet added.")?;
        Ok(())
    }

    fn delete_sweet(&mut self) -> MenuResult<()> {
        let id = self.prompt_id("Enter sweet ID to delete: ")?;
        let name = self.shop.get(id)?.name().to_string();
        let confirm = self.prompt(&format!("Delete {name}? (y/N): "))?;
        if confirm.eq_ignore_ascii_case("y") {
            self.shop.delete(id)?;
            writeln!(self.output, "Deleted.")?;
        }
        Ok(())
    }

    fn view_all(&mut self) -> MenuResult<()> {
        let sweets = self.shop.all();
        self.output.write_all(render_table(&sweets, "Inventory").as_bytes())?;
        Ok(())
    }

    fn search_sweets(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\nSearch by: 1. Name  2. Category  3. Price Range")?;
        let (sweets, title) = match self.prompt("Choice: ")?.as_str() {
            "1" => {
                let term = self.prompt("Name: ")?;
                (self.shop.search_by_name(&term), format!("Search: '{term}'"))
            }
            "2" => {
                let Some(category) = self.choose_category()? else {
                    return Ok(());
                };
                (self.shop.search_by_category(category), format!("Search: {category}"))
            }
            "3" => {
                let min = self.prompt_number::<f64>("Min price: ₹")?;
                let max = self.prompt_number::<f64>("Max price: ₹")?;
                let found = self.shop.search_by_price_range(min, max)?;
                (found, format!("{} - {}", format_price(min), format_price(max)))
            }
            _ => {
                writeln!(self.output, "Invalid input.")?;
                return Ok(());
            }
        };
        self.output.write_all(render_table(&sweets, &title).as_bytes())?;
        Ok(())
    }

    fn purchase(&mut self) -> MenuResult<()> {
        let id = self.prompt_id("Sweet ID: ")?;
        let quantity = self.prompt_number::<i64>("Quantity: ")?;
        let (sweet, cost) = self.shop.purchase(id, quantity)?;
        writeln!(
            self.output,
            "Purchased {quantity} of {} for {}",
            sweet.name(),
            format_price(cost)
        )?;
        Ok(())
    }

    fn restock(&mut self) -> MenuResult<()> {
        let id = self.prompt_id("Sweet ID: ")?;
        let quantity = self.prompt_number::<i64>("Quantity to add: ")?;
        let sweet = self.shop.restock(id, quantity)?;
        writeln!(self.output, "Restocked {}. New stock: {}", sweet.name(), sweet.quantity())?;
        Ok(())
    }

    fn update_price(&mut self) -> MenuResult<()> {
        let id = self.prompt_id("Sweet ID: ")?;
        let current = self.shop.get(id)?.price();
        writeln!(self.output, "Current price: {}", format_price(current))?;
        let price = self.prompt_number::<f64>("New price: ₹")?;
        self.shop.update_price(id, price)?;
        writeln!(self.output, "Price updated.")?;
        Ok(())
    }

    fn sort_sweets(&mut self) -> MenuResult<()> {
        writeln!(self.output, "\nSort by: 1. Name 2. Price ↑ 3. Price ↓ 4. Stock ↑ 5. Stock ↓")?;
        let (sweets, title) = match self.prompt("Choice: ")?.as_str() {
            "1" => (self.shop.sort_by_name(false), "Sorted by Name"),
            "2" => (self.shop.sort_by_price(false), "Price Low to High"),
            "3" => (self.shop.sort_by_price(true), "Price High to Low"),
            "4" => (self.shop.sort_by_quantity(false), "Stock Low to High"),
            "5" => (self.shop.sort_by_quantity(true), "Stock High to Low"),
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                return Ok(());
            }
        };
        self.output.write_all(render_table(&sweets, title).as_bytes())?;
        Ok(())
    }

    fn reports(&mut self) -> MenuResult<()> {
        let report = self.shop.report(None);

        writeln!(self.output, "\n--- Reports ---")?;
        writeln!(self.output, "Total inventory value: {}", format_price(report.total_value))?;
        if report.low_stock.is_empty() {
            writeln!(self.output, "No low stock items.")?;
        } else {
            self.output
                .write_all(render_table(&report.low_stock, "Low Stock Items").as_bytes())?;
        }
        writeln!(self.output, "\nCategory Summary:")?;
        for summary in &report.categories {
            writeln!(self.output, "{}", render_category_line(summary))?;
        }
        Ok(())
    }

    /// `Ok(false)` when the store rejected the write; the session continues
    /// so the user can retry or exit.
    fn save(&mut self) -> MenuResult<bool> {
        match self.shop.save() {
            Ok(()) => {
                tracing::info!(location = %self.location, "inventory saved");
                writeln!(self.output, "Data saved to {}", self.location)?;
                Ok(true)
            }
            Err(e) => {
                tracing::error!(error = %e, "save failed");
                writeln!(self.output, "Error saving data: {e}")?;
                Ok(false)
            }
        }
    }

    // -------------------------
    // Input helpers
    // -------------------------

    fn choose_category(&mut self) -> MenuResult<Option<SweetCategory>> {
        writeln!(self.output, "\nSelect Category:")?;
        for (i, category) in SweetCategory::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {category}", i + 1)?;
        }
        let raw = self.prompt("Choice: ")?;
        let picked = raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| SweetCategory::ALL.get(i).copied());
        if picked.is_none() {
            writeln!(self.output, "Invalid category.")?;
        }
        Ok(picked)
    }

    fn prompt_id(&mut self, label: &str) -> MenuResult<SweetId> {
        Ok(self.prompt(label)?.parse()?)
    }

    fn prompt_number<T>(&mut self, label: &str) -> MenuResult<T>
    where
        T: core::str::FromStr,
    {
        let raw = self.prompt(label)?;
        raw.parse()
            .map_err(|_| MenuError::Input(format!("not a valid number: {raw:?}")))
    }

    /// Print `label`, read one line and return it trimmed.
    fn prompt(&mut self, label: &str) -> MenuResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use sweetshop_infra::InMemoryRecordStore;
    use sweetshop_inventory::Persistence;

    use crate::sample::load_sample_data;

    type TestMenu = Menu<Cursor<Vec<u8>>, Vec<u8>, Arc<InMemoryRecordStore>>;

    fn menu_with_samples(store: &Arc<InMemoryRecordStore>, script: &str) -> TestMenu {
        let mut shop = InventoryManager::open(Arc::clone(store), Persistence::Deferred).unwrap();
        load_sample_data(&mut shop).unwrap();
        Menu::new(shop, "memory", Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(menu: TestMenu) -> (String, InventoryManager<Arc<InMemoryRecordStore>>) {
        let text = String::from_utf8(menu.output.clone()).unwrap();
        (text, menu.into_inventory())
    }

    #[test]
    fn exit_without_saving_leaves_store_untouched() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "0\n");

        assert_eq!(menu.run().unwrap(), Exit::Discarded);
        let (text, shop) = output(menu);
        assert!(text.starts_with("Welcome to Sweet Shop Management System!"));
        assert!(text.contains("Exiting without saving."));
        assert!(shop.is_dirty());
        assert_eq!(store.save_count(), 1); // bootstrap write only
    }

    #[test]
    fn save_and_exit_persists_once() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "10\n");

        assert_eq!(menu.run().unwrap(), Exit::Saved);
        let (text, shop) = output(menu);
        assert!(text.contains("Data saved to memory"));
        assert!(!shop.is_dirty());
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.state().unwrap().unwrap().sweets.len(), 8);
    }

    #[test]
    fn add_then_view() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "1\nLaddu\n2\n8.5\n30\n\n3\n\n0\n");

        menu.run().unwrap();
        let (text, shop) = output(menu);
        assert!(text.contains("Sweet added."));
        assert!(text.contains("1009 Laddu               Milk-Based     ₹8.50     30"));
        assert_eq!(shop.len(), 9);
    }

    #[test]
    fn add_with_bad_category_adds_nothing() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "1\nLaddu\n42\n\n0\n");

        menu.run().unwrap();
        let (text, shop) = output(menu);
        assert!(text.contains("Invalid category."));
        assert_eq!(shop.len(), 8);
    }

    #[test]
    fn delete_requires_confirmation() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "2\n1001\nn\n\n2\n1001\ny\n\n0\n");

        menu.run().unwrap();
        let (text, shop) = output(menu);
        assert!(text.contains("Delete Kaju Katli? (y/N): "));
        assert_eq!(text.matches("Deleted.").count(), 1);
        assert_eq!(shop.len(), 7);
    }

    #[test]
    fn purchase_reports_cost_and_errors() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "5\n1001\n5\n\n5\n1001\n100\n\n5\n9999\n1\n\n0\n");

        menu.run().unwrap();
        let (text, shop) = output(menu);
        assert!(text.contains("Purchased 5 of Kaju Katli for ₹250.00"));
        assert!(text.contains("Error: insufficient stock for sweet 1001: requested 100, available 15"));
        assert!(text.contains("Error: sweet 9999 not found"));
        assert_eq!(shop.get(SweetId::new(1001).unwrap()).unwrap().quantity(), 15);
    }

    #[test]
    fn restock_and_update_price() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "6\n1007\n12\n\n7\n1007\n99.5\n\n0\n");

        menu.run().unwrap();
        let (text, shop) = output(menu);
        assert!(text.contains("Restocked Chocolate Cake. New stock: 20"));
        assert!(text.contains("Current price: ₹120.00"));
        assert!(text.contains("Price updated."));
        assert_eq!(shop.get(SweetId::new(1007).unwrap()).unwrap().price(), 99.5);
    }

    #[test]
    fn non_numeric_input_is_reported() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "5\nabc\n\n6\n1001\nlots\n\n0\n");

        menu.run().unwrap();
        let (text, _) = output(menu);
        assert!(text.contains("Error: invalid identifier"));
        assert!(text.contains("Error: not a valid number: \"lots\""));
    }

    #[test]
    fn search_by_price_range_and_category() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "4\n3\n10\n15\n\n4\n2\n6\n\n4\n3\n20\n10\n\n0\n");

        menu.run().unwrap();
        let (text, _) = output(menu);
        assert!(text.contains("₹10.00 - ₹15.00:"));
        assert!(text.contains("Gulab Jamun"));
        assert!(text.contains("Search: Pastry:"));
        assert!(text.contains("Error: validation failed"));
    }

    #[test]
    fn sort_by_price_descending() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "8\n3\n\n0\n");

        menu.run().unwrap();
        let (text, _) = output(menu);
        let table = text.split("Price High to Low:").nth(1).unwrap();
        let cake = table.find("Chocolate Cake").unwrap();
        let gulab = table.find("Gulab Jamun").unwrap();
        assert!(cake < gulab);
    }

    #[test]
    fn reports_show_totals_and_categories() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "9\n\n0\n");

        menu.run().unwrap();
        let (text, _) = output(menu);
        // 1000 + 500 + 450 + 2000 + 480 + 1080 + 960 + 525
        assert!(text.contains("Total inventory value: ₹6995.00"));
        assert!(text.contains("No low stock items."));
        assert!(text.contains("Milk-Based       2 items, ₹  980.00"));
    }

    #[test]
    fn invalid_choice_and_end_of_input() {
        let store = InMemoryRecordStore::arc();
        let mut menu = menu_with_samples(&store, "42\n");

        assert_eq!(menu.run().unwrap(), Exit::EndOfInput);
        let (text, _) = output(menu);
        assert!(text.contains("Invalid choice."));
        assert_eq!(store.save_count(), 1);
    }
}
