//! Boundary commands: untyped input is checked here before it reaches the store.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::{InventoryError, ItemName, Quantity};

/// Command: AddStock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddStock {
    pub item: ItemName,
    pub quantity: Quantity,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveStock {
    pub item: ItemName,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StockCommand {
    Add(AddStock),
    Remove(RemoveStock),
}

impl StockCommand {
    pub fn add(item: ItemName, quantity: Quantity) -> Self {
        Self::Add(AddStock { item, quantity })
    }

    pub fn remove(item: ItemName, quantity: Quantity) -> Self {
        Self::Remove(RemoveStock { item, quantity })
    }

    /// Parse `{"op": "add" | "remove", "item": <text>, "quantity": <number>}`.
    ///
    /// Unlike plain deserialization, the error names the offending value, so a
    /// caller can tell a non-text item apart from a non-numeric quantity.
    pub fn from_json(value: &JsonValue) -> Result<Self, InventoryError> {
        let op = value
            .get("op")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| InventoryError::invalid_input(format!("command {value} has no `op`")))?;

        let field = move |key: &str| {
            value
                .get(key)
                .ok_or_else(|| InventoryError::invalid_input(format!("command is missing `{key}`")))
        };

        match op {
            "add" => {
                let item = ItemName::from_json(field("item")?)?;
                let quantity = Quantity::from_json(field("quantity")?)?;
                Ok(Self::add(item, quantity))
            }
            "remove" => {
                let item = ItemName::from_json(field("item")?)?;
                let quantity = Quantity::from_json(field("quantity")?)?;
                Ok(Self::remove(item, quantity))
            }
            other => Err(InventoryError::invalid_input(format!(
                "unknown command `{other}`"
            ))),
        }
    }
}
