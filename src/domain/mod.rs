//! Store-agnostic types: items, named lists and their identifiers.

pub mod id;
pub mod item;
pub mod list;

pub use id::{ItemId, ListId};
pub use item::{default_items, Item, DEFAULT_ITEM_NAMES};
pub use list::{capitalize, is_home, TodoList, HOME_LIST};
