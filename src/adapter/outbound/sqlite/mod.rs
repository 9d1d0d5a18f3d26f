//! SQLite persistence adapters.
//!
//! Provides SQLite-backed implementations of the item and list stores using
//! Diesel ORM.

pub mod database;
pub mod store;

pub use database::connection::{create_pool, run_migrations, DbPool};
pub use store::{SqliteItemStore, SqliteListStore};
