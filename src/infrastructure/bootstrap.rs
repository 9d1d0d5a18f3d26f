//! Infrastructure bootstrap helpers for runtime wiring.

use tracing::info;

use crate::adapter::inbound::http::AppState;
use crate::adapter::outbound::sqlite::{
    create_pool, run_migrations, SqliteItemStore, SqliteListStore,
};
use crate::adapter::outbound::view::HtmlRenderer;
use crate::application::TodoApp;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// The application service wired to SQLite.
pub type SqliteTodoApp = TodoApp<SqliteItemStore, SqliteListStore>;

/// Open the database, apply migrations and build the application service.
///
/// # Errors
/// Returns an error if the pool cannot be created or migrations fail.
pub fn build_service(database: &str) -> Result<SqliteTodoApp> {
    let pool = create_pool(database)?;
    run_migrations(&pool)?;
    info!(database, "Connected to database");

    Ok(TodoApp::new(
        SqliteItemStore::new(pool.clone()),
        SqliteListStore::new(pool),
    ))
}

/// Build the HTTP state for `config`.
///
/// # Errors
/// Returns an error if the database cannot be opened.
pub fn build_state(config: &Config) -> Result<AppState<SqliteTodoApp>> {
    let service = build_service(&config.database)?;
    Ok(AppState::new(service, HtmlRenderer::new()))
}
