//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the persistence and rendering dependencies.

pub mod store;
pub mod view;
