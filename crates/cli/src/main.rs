use std::io;

use anyhow::Context;
use clap::Parser;

use sweetshop_cli::sample::load_sample_data;
use sweetshop_cli::{Args, Exit, Menu};
use sweetshop_infra::JsonFileStore;
use sweetshop_inventory::{InventoryManager, Persistence};
use sweetshop_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    sweetshop_observability::init(LogFormat::Compact);

    let store = JsonFileStore::new(&args.data_file);
    let mut shop = InventoryManager::open(store, Persistence::Deferred)
        .with_context(|| format!("loading {}", args.data_file.display()))?
        .with_low_stock_threshold(args.low_stock_threshold);
    println!("Loaded data from {}", args.data_file.display());

    if shop.is_empty() && !args.no_sample_data {
        println!("Loading sample data...");
        load_sample_data(&mut shop).context("loading sample data")?;
        println!("Sample data loaded.");
    }

    let location = args.data_file.display().to_string();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let exit = Menu::new(shop, location, stdin.lock(), stdout.lock()).run()?;
    if exit == Exit::EndOfInput {
        tracing::warn!("input closed; unsaved changes discarded");
    }
    Ok(())
}
