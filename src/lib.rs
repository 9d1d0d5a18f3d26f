//! Todolist - a multi-list todo web application.
//!
//! Serves a home list ("Today") and any number of named lists, each holding
//! checkbox items, persisted in SQLite.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Items, named lists, default items and name capitalization
//! - [`port`] - Store, renderer and service traits
//! - [`application`] - `TodoApp`, the use cases behind every route
//! - [`adapter`] - axum routes, the CLI, SQLite stores, HTML rendering
//! - [`infrastructure`] - Configuration loading and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use todolist::adapter::inbound::http::router;
//! use todolist::infrastructure::bootstrap::build_state;
//! use todolist::infrastructure::config::Config;
//!
//! # async fn run() -> todolist::error::Result<()> {
//! let config = Config::default();
//! let app = router(build_state(&config)?);
//! let listener = tokio::net::TcpListener::bind(config.server.address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
