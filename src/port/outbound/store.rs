//! Persistence ports for the home collection and named lists.

use std::future::Future;

use crate::domain::{Item, ItemId, TodoList};
use crate::error::Result;

/// Storage operations for the home list's item collection.
pub trait ItemStore: Send + Sync {
    /// All home items in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<Item>>> + Send;

    /// Insert `items` only if the collection is empty, atomically.
    ///
    /// Returns `true` when the items were inserted.
    fn seed_if_empty(&self, items: Vec<Item>) -> impl Future<Output = Result<bool>> + Send;

    /// Append a single item.
    fn insert(&self, item: &Item) -> impl Future<Output = Result<()>> + Send;

    /// Remove the item with the given id. Returns whether a row was removed.
    fn remove(&self, id: &ItemId) -> impl Future<Output = Result<bool>> + Send;
}

/// Storage operations for named lists.
pub trait ListStore: Send + Sync {
    /// Find a list by its exact stored name.
    fn find_by_name(&self, name: &str) -> impl Future<Output = Result<Option<TodoList>>> + Send;

    /// Persist a new list unless one with the same name already exists.
    ///
    /// Returns `true` when this call created the record.
    fn create(&self, list: &TodoList) -> impl Future<Output = Result<bool>> + Send;

    /// Append an item to the named list in one atomic update.
    ///
    /// Fails with [`crate::error::Error::NotFound`] when no list has that name.
    fn push_item(&self, name: &str, item: &Item) -> impl Future<Output = Result<()>> + Send;

    /// Pull the embedded item with `id` from the named list in one atomic update.
    ///
    /// Returns whether an item was removed. Fails with
    /// [`crate::error::Error::NotFound`] when no list has that name.
    fn pull_item(&self, name: &str, id: &ItemId) -> impl Future<Output = Result<bool>> + Send;
}
