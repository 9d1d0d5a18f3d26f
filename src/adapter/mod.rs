//! Adapters connecting the ports to the outside world.
//!
//! - [`inbound`] - HTTP routes and the CLI that drive the application
//! - [`outbound`] - SQLite persistence and HTML rendering

pub mod inbound;
pub mod outbound;
