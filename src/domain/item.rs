//! Todo items and the starter items every new list is seeded with.

use serde::{Deserialize, Serialize};

use super::id::ItemId;

/// Names of the starter items, in display order.
pub const DEFAULT_ITEM_NAMES: [&str; 3] = [
    "Welcome to your todolist!",
    "Hit the + button to add a new item.",
    "<-- Hit this to delete an item.",
];

/// A single todo entry.
///
/// Items are never edited after creation: they are added and removed whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    /// Create an item with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
        }
    }
}

/// Build the three starter items.
///
/// Every call returns new values with new ids, so lists seeded from separate
/// calls never share item identity.
#[must_use]
pub fn default_items() -> Vec<Item> {
    DEFAULT_ITEM_NAMES.iter().map(|name| Item::new(*name)).collect()
}
