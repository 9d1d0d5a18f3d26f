//! Todo use cases exposed to the HTTP adapter.

use std::future::Future;

use crate::domain::{Item, ItemId};
use crate::error::Result;

/// Data needed to display one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: String,
    pub items: Vec<Item>,
}

/// Result of visiting a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// The list exists and has content to show.
    Show(ListView),
    /// The list was just seeded or created; the client should reload `path`.
    Redirect(String),
}

/// Application capabilities driven by inbound adapters.
///
/// Mutating operations return the path of the list the client should be sent
/// back to.
pub trait TodoService: Send + Sync + 'static {
    /// Show the home list, seeding it with default items when empty.
    fn home_list(&self) -> impl Future<Output = Result<ListOutcome>> + Send;

    /// Show a named list, creating it on first visit.
    ///
    /// `raw_name` is the path segment as typed; it is capitalized before lookup.
    fn named_list(&self, raw_name: &str) -> impl Future<Output = Result<ListOutcome>> + Send;

    /// Add an item named `item_name` to `list`.
    fn add_item(&self, list: &str, item_name: &str) -> impl Future<Output = Result<String>> + Send;

    /// Delete the item `id` from `list`.
    fn delete_item(&self, list: &str, id: &ItemId) -> impl Future<Output = Result<String>> + Send;
}
