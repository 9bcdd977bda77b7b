// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::{mail::EnqueueError, models::submission::SubmitResponse};

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 404 Not Found
    NotFound(String),

    // 500 with the submission response body (success/message/email_sent)
    Submission(String),

    // 503 Service Unavailable, mail queue has no room left
    QueueFull,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Submission(msg) => {
                tracing::error!("Error handling test submission: {}", msg);
                let body = SubmitResponse::failure(format!("Error processing submission: {}", msg));
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
            AppError::QueueFull => {
                tracing::warn!("Mail queue is full, refusing submission");
                let body = SubmitResponse::failure(
                    "The scorecard mailer is busy. Please submit again in a moment.",
                );
                (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
            }
        }
    }
}

/// Any body that does not decode into a submission is a processing error.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Submission(err.to_string())
    }
}

impl From<EnqueueError> for AppError {
    fn from(err: EnqueueError) -> Self {
        match err {
            EnqueueError::Full => AppError::QueueFull,
            EnqueueError::Closed => AppError::Submission(err.to_string()),
        }
    }
}
