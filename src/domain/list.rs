//! Named todo lists.
//!
//! The home list ("Today") is not a [`TodoList`] record: its items live in
//! their own collection. Every other list embeds copies of its items.

use super::id::{ItemId, ListId};
use super::item::{default_items, Item};

/// Title of the home list.
pub const HOME_LIST: &str = "Today";

/// Upper-case the first character of `raw`, leaving the rest untouched.
///
/// `capitalize("work") == "Work"` and `capitalize("wORK") == "WORK"`.
/// Applying it twice gives the same result as applying it once.
#[must_use]
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when `name` refers to the home list.
#[must_use]
pub fn is_home(name: &str) -> bool {
    name == HOME_LIST
}

/// A named list with its items embedded in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<Item>,
}

impl TodoList {
    /// Create a list seeded with fresh starter items.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            items: default_items(),
        }
    }

    /// Append an item at the end of the list.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove every item with the given id. Returns whether anything was removed.
    pub fn pull(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }
}
