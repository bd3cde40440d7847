//! Error types for the deadline server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadline_engine::DeadlineError;
use serde::Serialize;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("State not found: {0}")]
    StateNotFound(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Deadline(#[from] DeadlineError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ServerError::StateNotFound(_) => (StatusCode::NOT_FOUND, "STATE_NOT_FOUND"),
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::Deadline(err) => match err {
                DeadlineError::InvalidInputDate(_) => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
                DeadlineError::UnknownProjectType(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_PROJECT_TYPE")
                }
                DeadlineError::UnknownRole(_) => (StatusCode::BAD_REQUEST, "INVALID_ROLE"),
                DeadlineError::DateOutOfRange(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "DATE_OUT_OF_RANGE")
                }
            },
        };

        tracing::debug!("Request rejected ({}): {}", status, self);

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
