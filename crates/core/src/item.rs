use core::borrow::Borrow;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::InventoryError;
use crate::value_object::ValueObject;

/// Name of a stocked item. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Validate a raw name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, InventoryError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InventoryError::invalid_input("item name cannot be empty"));
        }
        Ok(Self(raw))
    }

    /// Boundary check for untyped input: the value must be a JSON string.
    pub fn from_json(value: &JsonValue) -> Result<Self, InventoryError> {
        match value {
            JsonValue::String(s) => Self::parse(s.as_str()),
            other => Err(InventoryError::invalid_input(format!(
                "item name {other} is not text"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = InventoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = InventoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}
