//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`todo`]: list viewing and item mutation use cases driven by HTTP

pub mod todo;
