//! Inventory store: stock mutations, queries, reporting, and JSON persistence.
//!
//! The store is an owned value passed explicitly to every operation. Domain
//! failures come back as [`InventoryError`] values and file failures as
//! [`PersistenceError`]; none of them panic or abort the caller.

pub mod command;
pub mod log;
pub mod persistence;
pub mod report;
pub mod store;

pub use command::{AddStock, RemoveStock, StockCommand};
pub use log::{LogEntry, OperationLog};
pub use persistence::{DEFAULT_DATA_FILE, PersistenceError};
pub use report::InventoryReport;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};

pub use stockroom_core::{InventoryError, InventoryResult, ItemName, Quantity};
