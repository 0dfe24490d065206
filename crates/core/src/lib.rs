//! `stockroom-core` — domain primitives for the inventory tracker.
//!
//! This crate contains **pure domain** types (no IO, no logging setup).

pub mod error;
pub mod item;
pub mod quantity;
pub mod value_object;

pub use error::{InventoryError, InventoryResult};
pub use item::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;
