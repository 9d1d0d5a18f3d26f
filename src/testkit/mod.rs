//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`]: In-memory [`ItemStore`](crate::port::outbound::store::ItemStore)
//!   and [`ListStore`](crate::port::outbound::store::ListStore) with failure injection.

pub mod store;
