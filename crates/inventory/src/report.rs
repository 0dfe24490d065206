use indexmap::IndexMap;

use stockroom_core::{ItemName, Quantity};

/// Human-readable listing of the inventory, rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct InventoryReport<'a> {
    items: &'a IndexMap<ItemName, Quantity>,
}

impl<'a> InventoryReport<'a> {
    pub(crate) fn new(items: &'a IndexMap<ItemName, Quantity>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl core::fmt::Display for InventoryReport<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory Report")?;
        if self.items.is_empty() {
            return writeln!(f, "No items in inventory.");
        }
        for (item, qty) in self.items {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}
