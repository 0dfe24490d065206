//! Fixed walk-through of every inventory operation.
//!
//! Domain and persistence failures are printed and the walk-through carries
//! on; only a failure to write to `out` aborts it.

use std::io::Write;

use serde_json::json;

use stockroom_core::{ItemName, Quantity};
use stockroom_inventory::{InventoryStore, OperationLog, StockCommand};

use crate::config::DemoConfig;

/// Run the demo against a fresh store, writing human-readable output to `out`.
///
/// Returns the store as it stands after the final reload.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    let mut log = OperationLog::new();

    for (item, qty) in [("apple", 10), ("banana", 2), ("orange", 0)] {
        if let Err(err) = store.add(ItemName::parse(item)?, Quantity::from(qty), Some(&mut log)) {
            writeln!(out, "Error: {err}")?;
        }
    }

    for (item, qty) in [("apple", 3), ("grape", 1)] {
        if let Err(err) = store.remove(&ItemName::parse(item)?, Quantity::from(qty)) {
            writeln!(out, "Error: {err}")?;
        }
    }

    // Untyped input goes through the command parser; bad types never reach the store.
    let untrusted = json!({"op": "add", "item": 42, "quantity": "ten"});
    match StockCommand::from_json(&untrusted) {
        Ok(cmd) => {
            if let Err(err) = store.execute(cmd, Some(&mut log)) {
                writeln!(out, "Error: {err}")?;
            }
        }
        Err(err) => writeln!(out, "Rejected command: {err}")?,
    }

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    let low = store.low_stock(config.low_stock_threshold);
    let low: Vec<&str> = low.iter().map(ItemName::as_str).collect();
    writeln!(out, "Low stock items: {low:?}")?;

    if let Err(err) = store.save(&config.data_file) {
        writeln!(out, "Error: {err}")?;
    }
    if let Err(err) = store.load(&config.data_file) {
        writeln!(out, "Error: {err}")?;
    }

    writeln!(out)?;
    write!(out, "{}", store.report())?;

    writeln!(out)?;
    writeln!(out, "Operation Logs:")?;
    for entry in log.iter() {
        writeln!(out, "{entry}")?;
    }

    Ok(store)
}
