//! Rendering port: turns page data into markup.

use crate::domain::Item;
use crate::error::Result;

/// A page the application can render.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// A todo list with its items in display order.
    List { title: &'a str, items: &'a [Item] },
    /// The static about page.
    About,
}

/// Renders [`View`]s to a complete document.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: View<'_>) -> Result<String>;
}
