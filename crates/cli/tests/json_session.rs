use std::io::Cursor;

use tempfile::TempDir;

use sweetshop_cli::sample::load_sample_data;
use sweetshop_cli::{Exit, Menu};
use sweetshop_infra::JsonFileStore;
use sweetshop_inventory::{InventoryManager, Persistence};

fn open(path: &std::path::Path) -> InventoryManager<JsonFileStore> {
    InventoryManager::open(JsonFileStore::new(path), Persistence::Deferred).expect("open inventory")
}

fn run(shop: InventoryManager<JsonFileStore>, script: &str) -> (Exit, String) {
    let mut out = Vec::new();
    let exit = Menu::new(shop, "data", Cursor::new(script.as_bytes()), &mut out)
        .run()
        .expect("menu session");
    (exit, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn saved_session_survives_restart() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("sweet_shop_data.json");

    let mut shop = open(&path);
    assert!(shop.is_empty());
    load_sample_data(&mut shop).expect("samples");

    let (exit, _) = run(shop, "5\n1002\n10\n\n10\n");
    assert_eq!(exit, Exit::Saved);

    let reopened = open(&path);
    assert_eq!(reopened.len(), 8);
    assert_eq!(reopened.next_id(), 1009);
    assert_eq!(reopened.search_by_name("gulab")[0].quantity(), 40);
}

#[test]
fn discarded_session_keeps_previous_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("sweet_shop_data.json");

    let mut shop = open(&path);
    load_sample_data(&mut shop).expect("samples");
    shop.save().expect("save");

    let (exit, text) = run(open(&path), "2\n1008\ny\n\n0\n");
    assert_eq!(exit, Exit::Discarded);
    assert!(text.contains("Deleted."));

    assert_eq!(open(&path).len(), 8);
}
