//! Error types for the API layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by API handlers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the core/content layers (loading, parsing, lookup).
    #[error(transparent)]
    Core(#[from] jangbu_core::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Self::Core(jangbu_core::Error::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            log::error!("request failed: {message}");
        }
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
