//! Unified error handling for the API.
//!
//! Every operation-level failure is mapped here to a fixed status code and a
//! plain-text reason string, which is the contract the admin UI matches on.
//! Persistence detail is logged and never surfaced to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// No identity on a request that requires one.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Identity present but does not own the store.
    #[error("Unauthorized")]
    Unauthorized,

    /// A required body field is absent (or blank).
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A required path identifier is absent (or blank).
    #[error("{0} is required")]
    MissingId(&'static str),

    /// Database operation failed.
    #[error("Internal Server Error")]
    Database(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::MissingField(_) | Self::MissingId(_) => StatusCode::BAD_REQUEST,
            Self::Database(err) => {
                // Integrity violations are expected when deleting referenced
                // rows; everything else is a real server fault. Both surface
                // as the same generic response.
                match err {
                    RepositoryError::ForeignKeyViolation(detail) => {
                        tracing::warn!(detail, "Delete blocked by dependent rows");
                    }
                    _ => {
                        tracing::error!(error = %err, "Request failed with database error");
                    }
                }
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
