//! Error types for the HTTP layer and the persistence layer.
//!
//! - [`AppError`] is what handlers return; it renders as `{"message": ...}`.
//! - [`StorageError`] is what repositories return; services decide how much of
//!   it reaches the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use validator::ValidationErrors;

/// Message returned when any of the four required student fields is missing.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Roll number, name, age, and class are required fields";

/// Message returned for every failed lookup, whatever the cause.
pub const RETRIEVAL_FAILED_MESSAGE: &str = "Error retrieving student";

/// MongoDB server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTP-facing application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client sent an incomplete or unreadable body (400).
    #[error("{0}")]
    Validation(String),

    /// Request body exceeded the buffering limit (413).
    #[error("request entity too large")]
    PayloadTooLarge,

    /// Write failed; the underlying message is exposed to the caller (500).
    #[error("{0}")]
    Internal(String),

    /// Lookup failed; details are only logged (500).
    #[error("Error retrieving student")]
    Retrieval,

    /// Health probe failed (503).
    #[error("{0}")]
    Unavailable(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) | AppError::Retrieval => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::debug!(?errors, "Student payload rejected");
        AppError::bad_request(REQUIRED_FIELDS_MESSAGE)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Repository-level error.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The identifier is not a valid ObjectId.
    #[error("Cast to ObjectId failed for value \"{0}\"")]
    InvalidId(String),

    /// A unique index rejected the write. Keeps the server's message.
    #[error("{0}")]
    DuplicateKey(String),

    #[error(transparent)]
    Database(mongodb::error::Error),
}

impl From<mongodb::error::Error> for StorageError {
    fn from(e: mongodb::error::Error) -> Self {
        if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *e.kind
            && write_error.code == DUPLICATE_KEY_CODE
        {
            return StorageError::DuplicateKey(write_error.message.clone());
        }

        StorageError::Database(e)
    }
}
