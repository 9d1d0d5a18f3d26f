//! Outbound adapters: persistence and page rendering.

pub mod sqlite;
pub mod view;
