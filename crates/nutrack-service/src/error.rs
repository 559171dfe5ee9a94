//! Service and API error types.
//!
//! Domain services return [`ServiceError`]: the access layer's expected
//! failures passed through unchanged, plus validation failures. Handlers
//! translate a `ServiceError` into an [`ApiError`] at the call site,
//! because the HTTP status depends on the operation: write routes answer
//! 400 for any failure, read and delete routes answer 404 for absence and
//! 500 for a store fault.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use nutrack_core::ValidationError;
use nutrack_store::AccessError;

/// A failed domain-service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Failure from the document-access layer, unchanged.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The payload failed record validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// API error with its HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Invalid input or a rejected write. Maps to 400.
    #[error("{0}")]
    BadRequest(String),

    /// The requested resource is absent. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected fault. Maps to 500 with a generic message; the detail
    /// goes to the log.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Call-site translation for create/update routes: every failure is a
    /// rejected write.
    #[must_use]
    pub fn write(err: ServiceError) -> Self {
        Self::BadRequest(err.to_string())
    }

    /// Call-site translation for read/delete routes: absence is 404,
    /// invalid input is 400, store faults are 500.
    #[must_use]
    pub fn read(err: ServiceError) -> Self {
        match err {
            ServiceError::Access(AccessError::NotFound | AccessError::Empty) => {
                Self::NotFound(err.to_string())
            }
            ServiceError::Access(AccessError::Store(message)) => Self::Internal(message),
            ServiceError::Validation(e) => Self::BadRequest(e.to_string()),
        }
    }
}

/// Failure envelope body: `{ success: false, message }`.
#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Internal(message) => {
                tracing::error!(error = %message, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = FailureBody {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}
