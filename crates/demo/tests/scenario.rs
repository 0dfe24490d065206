use std::fs;
use std::path::PathBuf;

use stockroom_core::{ItemName, Quantity};
use stockroom_demo::{DemoConfig, scenario};
use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> DemoConfig {
    DemoConfig {
        data_file: dir.path().join("inventory.json"),
        low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
    }
}

fn run_capturing(config: &DemoConfig) -> (stockroom_inventory::InventoryStore, String) {
    let mut out = Vec::new();
    let store = scenario::run(config, &mut out).expect("scenario should not fail");
    (store, String::from_utf8(out).expect("output is utf-8"))
}

#[test]
fn end_to_end_scenario_matches_expected_state() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let (store, output) = run_capturing(&config);

    assert_eq!(store.get_quantity("apple"), 7.0);
    assert_eq!(store.get_quantity("orange"), 0.0);
    assert_eq!(store.get_quantity("grape"), 0.0);
    assert_eq!(
        store.low_stock(DEFAULT_LOW_STOCK_THRESHOLD),
        vec![ItemName::parse("banana").unwrap()]
    );

    assert!(output.contains("Error: item 'grape' not found in inventory\n"));
    assert!(output.contains("Rejected command: invalid input: item name 42 is not text\n"));
    assert!(output.contains("Apple stock: 7\n"));
    assert!(output.contains("Low stock items: [\"banana\"]\n"));
    assert!(output.contains("Inventory Report\napple -> 7\nbanana -> 2\n"));
    assert!(!output.contains("orange ->"));
}

#[test]
fn scenario_persists_inventory_file() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    run_capturing(&config);

    let text = fs::read_to_string(&config.data_file).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(saved, serde_json::json!({"apple": 7, "banana": 2}));
}

#[test]
fn operation_log_lists_every_add_in_order() {
    let dir = TempDir::new().unwrap();
    let (_, output) = run_capturing(&config_in(&dir));

    let logs: Vec<&str> = output
        .split("Operation Logs:\n")
        .nth(1)
        .unwrap()
        .lines()
        .collect();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with(": Added 10 of apple"));
    assert!(logs[1].ends_with(": Added 2 of banana"));
    assert!(logs[2].ends_with(": Added 0 of orange"));
}

#[test]
fn unwritable_data_file_is_reported_and_run_continues() {
    let dir = TempDir::new().unwrap();
    let config = DemoConfig {
        data_file: PathBuf::from(dir.path()).join("no-such-dir").join("inventory.json"),
        ..DemoConfig::default()
    };

    let (store, output) = run_capturing(&config);

    assert!(output.contains("Error: I/O error on"));
    assert!(output.contains("not found; starting with empty inventory"));
    assert!(output.contains("Inventory Report\nNo items in inventory.\n"));
    assert!(store.is_empty());
}

#[test]
fn threshold_from_config_drives_low_stock_line() {
    let dir = TempDir::new().unwrap();
    let config = DemoConfig {
        low_stock_threshold: Quantity::from(8),
        ..config_in(&dir)
    };

    let (_, output) = run_capturing(&config);
    assert!(output.contains("Low stock items: [\"apple\", \"banana\"]\n"));
}
