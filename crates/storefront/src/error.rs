//! Application-level error type returned by route handlers.
//!
//! Server-side failures are logged with full detail; the client only ever
//! sees a generic message and a status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
    /// The remote catalog could not be fetched or parsed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Session read or write failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything else that should surface as a 500.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Client-facing status and message. Internal detail stays out of the
    /// response body.
    fn client_parts(&self) -> (StatusCode, String) {
        match self {
            Self::Catalog(_) => (
                StatusCode::BAD_GATEWAY,
                "External service error".to_string(),
            ),
            Self::Session(_) | Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Catalog(_) | Self::Session(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        self.client_parts().into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
