//! Router construction and the serve loop.

use std::future::Future;
use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::debug;

use super::handler;
use super::state::AppState;
use crate::error::Result;
use crate::port::inbound::todo::TodoService;

/// Build the application router.
///
/// Fixed paths are matched before the `/{name}` catch-all, so `/about` never
/// creates a list called "About".
pub fn router<T: TodoService>(state: AppState<T>) -> Router {
    Router::new()
        .route("/", get(handler::home::<T>).post(handler::add_item::<T>))
        .route("/about", get(handler::about::<T>))
        .route("/delete", post(handler::delete_item::<T>))
        .route("/css/styles.css", get(handler::stylesheet))
        .route("/{name}", get(handler::named_list::<T>))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    debug!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = millis(started.elapsed()),
        "Handled request"
    );
    response
}

/// Whole milliseconds in `elapsed`, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Serve the router on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve<T, F>(listener: TcpListener, state: AppState<T>, shutdown: F) -> Result<()>
where
    T: TodoService,
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
