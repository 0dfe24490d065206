//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error for stock operations.
///
/// Both variants are recoverable: the operation that produced them left the
/// inventory untouched, and the caller decides how to surface the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item name or quantity had the wrong type or an unusable value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A removal targeted an item that is not stocked.
    #[error("item '{0}' not found in inventory")]
    ItemNotFound(String),
}

impl InventoryError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn item_not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }
}
