//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//!
//! | Variant      | Status | Body                          |
//! |--------------|--------|-------------------------------|
//! | `BadRequest` | 400    | JSON [`ErrorBody`]            |
//! | `NotFound`   | 404    | empty                         |
//! | `Internal`   | 500    | empty, details stay in the log |
//!
//! Handlers log failures at the point they occur, with the operation context
//! only they have. `into_response` never logs, so each failure produces a
//! single log line.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body, used for client errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code, e.g. "BAD_REQUEST".
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be converted to the expected type (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found (404). Expected and benign.
    #[error("not found: {0}")]
    NotFound(String),

    /// Store or infrastructure failure (500). Never returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match self {
            Self::BadRequest(message) => {
                let body = ErrorBody {
                    error: ErrorDetail {
                        code: code.to_string(),
                        message,
                    },
                };
                (status, Json(body)).into_response()
            }
            Self::NotFound(_) | Self::Internal(_) => status.into_response(),
        }
    }
}
