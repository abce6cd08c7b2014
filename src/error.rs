//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP
//! responses. Every user-visible failure is a JSON object holding a single
//! `"error"` string.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// All errors that can occur while handling a request are represented by this
/// enum. Each variant implements automatic conversion to HTTP responses via
/// `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// No user with the requested identifier exists
    #[error("User not found")]
    UserNotFound,

    /// Request payload failed validation or could not be parsed
    #[error("{0}")]
    Validation(String),

    /// A store statement failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
