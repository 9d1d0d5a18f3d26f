//! HTTP inbound adapter (axum).
//!
//! Translates requests into [`TodoService`](crate::port::inbound::todo::TodoService)
//! calls and their outcomes into rendered pages or redirects.

pub mod error;
pub mod handler;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{router, serve};
pub use state::AppState;
