//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use sweetshop_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const DEFAULT_DATA_FILE: &str = "sweet_shop_data.json";

#[derive(Parser, Debug)]
#[clap(
    name = "sweetshop",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sweet Shop Management System: interactive inventory menu"
)]
pub struct Args {
    /// JSON file holding the inventory.
    #[clap(long, default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Quantity at or below which a sweet is reported as low stock.
    #[clap(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    pub low_stock_threshold: u32,

    /// Start from an empty inventory instead of loading the sample sweets.
    #[clap(long)]
    pub no_sample_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["sweetshop"]).unwrap();
        assert_eq!(args.data_file, PathBuf::from("sweet_shop_data.json"));
        assert_eq!(args.low_stock_threshold, 5);
        assert!(!args.no_sample_data);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "sweetshop",
            "--data-file",
            "/tmp/shop.json",
            "--low-stock-threshold",
            "10",
            "--no-sample-data",
        ])
        .unwrap();
        assert_eq!(args.data_file, PathBuf::from("/tmp/shop.json"));
        assert_eq!(args.low_stock_threshold, 10);
        assert!(args.no_sample_data);
    }

    #[test]
    fn rejects_negative_threshold() {
        assert!(Args::try_parse_from(["sweetshop", "--low-stock-threshold", "-1"]).is_err());
    }
}
