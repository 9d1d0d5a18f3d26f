//! Mapping of application errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::error::Error;

/// Error returned from handlers.
///
/// Details are logged and never sent to the client: a missing list becomes a
/// plain 404, everything else a plain 500.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_not_found() {
            warn!(error = %self.0, "Resource not found");
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        } else {
            error!(error = %self.0, "Request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
