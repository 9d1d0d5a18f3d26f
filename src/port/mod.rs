//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   HTTP adapter ──▶ inbound::TodoService ──▶ application::TodoApp
//!                                                 │
//!                          ┌──────────────────────┴─────────┐
//!                          ▼                                ▼
//!               outbound::ItemStore             outbound::ListStore
//!                 (home collection)            (named list records)
//! ```
//!
//! The view renderer is an outbound port too, consumed directly by the HTTP
//! adapter since rendering carries no application logic.

pub mod inbound;
pub mod outbound;
