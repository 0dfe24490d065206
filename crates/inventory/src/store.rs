use indexmap::IndexMap;

use stockroom_core::{InventoryError, InventoryResult, ItemName, Quantity};

use crate::command::StockCommand;
use crate::log::OperationLog;
use crate::report::InventoryReport;

/// Threshold used by [`InventoryStore::low_stock`] when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = Quantity::whole(5);

/// In-memory item-to-quantity mapping.
///
/// Invariant: every stored quantity is strictly positive. An operation that
/// would leave an entry at zero or below removes it instead. Iteration follows
/// first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    pub(crate) items: IndexMap<ItemName, Quantity>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase stock for `item` by `quantity`, creating the entry if needed.
    ///
    /// Returns the stored quantity afterwards (zero when the entry is absent).
    /// When `log` is supplied a timestamped description is appended to it.
    pub fn add(
        &mut self,
        item: ItemName,
        quantity: Quantity,
        log: Option<&mut OperationLog>,
    ) -> InventoryResult<Quantity> {
        let current = self.get_quantity(item.as_str());
        let updated = current.checked_add(quantity).ok_or_else(|| {
            InventoryError::invalid_input(format!("adding {quantity} to '{item}' overflows"))
        })?;

        if let Some(log) = log {
            log.record(format!("Added {quantity} of {item}"));
        }

        tracing::debug!(item = %item, added = %quantity, stock = %updated, "stock added");
        Ok(self.set_balance(item, updated))
    }

    /// Decrease stock for `item` by `quantity`.
    ///
    /// The entry is deleted when the balance reaches zero or below. Removing
    /// from an item that is not stocked fails with [`InventoryError::ItemNotFound`]
    /// and leaves the inventory unchanged.
    pub fn remove(&mut self, item: &ItemName, quantity: Quantity) -> InventoryResult<Quantity> {
        let Some(current) = self.items.get(item.as_str()).copied() else {
            tracing::warn!(item = %item, "remove failed: item not found");
            return Err(InventoryError::item_not_found(item.as_str()));
        };

        let updated = current.checked_sub(quantity).ok_or_else(|| {
            InventoryError::invalid_input(format!("removing {quantity} from '{item}' overflows"))
        })?;

        tracing::debug!(item = %item, removed = %quantity, stock = %updated, "stock removed");
        Ok(self.set_balance(item.clone(), updated))
    }

    /// Apply a parsed boundary command.
    pub fn execute(
        &mut self,
        command: StockCommand,
        log: Option<&mut OperationLog>,
    ) -> InventoryResult<Quantity> {
        match command {
            StockCommand::Add(cmd) => self.add(cmd.item, cmd.quantity, log),
            StockCommand::Remove(cmd) => self.remove(&cmd.item, cmd.quantity),
        }
    }

    /// Stored quantity, or zero when the item is absent.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn report(&self) -> InventoryReport<'_> {
        InventoryReport::new(&self.items)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.items.iter().map(|(item, qty)| (item, *qty))
    }

    /// Owned copy of the current mapping.
    pub fn snapshot(&self) -> IndexMap<ItemName, Quantity> {
        self.items.clone()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Write `quantity` for `item`, or drop the entry if it is not positive.
    fn set_balance(&mut self, item: ItemName, quantity: Quantity) -> Quantity {
        if quantity.is_positive() {
            self.items.insert(item, quantity);
            quantity
        } else {
            self.items.shift_remove(item.as_str());
            Quantity::ZERO
        }
    }
}

impl FromIterator<(ItemName, Quantity)> for InventoryStore {
    /// Later duplicates win; non-positive entries are skipped.
    fn from_iter<I: IntoIterator<Item = (ItemName, Quantity)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (item, quantity) in iter {
            store.set_balance(item, quantity);
        }
        store
    }
}
