//! Centralized error handling for the portal API.
//!
//! A single `AppError` enum consolidates validation failures, identity
//! provider errors, and transport problems. Implementing
//! `axum::response::IntoResponse` lets handlers return it directly, so the
//! whole surface shares one JSON error envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request format: {0}")]
    RequestFormat(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// An error reported by the identity provider. The message is surfaced
    /// to the client verbatim so credential and confirmation problems stay
    /// diagnosable.
    #[error("Identity provider error: {message}")]
    Auth { status: u16, message: String },

    #[error("Upstream request failed")]
    Transport(#[from] reqwest::Error),

    /// Invalid or placeholder backend configuration, detected lazily on the
    /// first outbound call.
    #[error("Backend is not configured: {0}")]
    Config(String),

    #[error("Failed to parse JSON")]
    JsonParse(#[from] serde_json::Error),

    #[error("An internal server error occurred")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::RequestFormat(msg) => (StatusCode::BAD_REQUEST, msg, None),

            AppError::Validation(err) => {
                let details = json!(err.field_errors());
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Validation failed".to_string(),
                    Some(details),
                )
            },

            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),

            AppError::Auth { status, message } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST);
                (status, message, None)
            },

            AppError::Transport(err) => {
                tracing::error!("Upstream request failed: {:?}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "Could not reach the authentication backend".to_string(),
                    None,
                )
            },

            AppError::Config(msg) => {
                tracing::error!("Backend configuration error: {}", msg);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "The authentication backend is not configured".to_string(),
                    None,
                )
            },

            AppError::JsonParse(err) => {
                tracing::error!("Failed to parse JSON: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    None,
                )
            },

            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred".to_string(),
                None,
            ),
        };

        (status, Json(ErrorResponse { message, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_errors_keep_provider_status_and_message() {
        let err = AppError::Auth {
            status: 400,
            message: "Invalid login credentials".to_string(),
        };

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_errors_map_to_service_unavailable() {
        let err = AppError::Config("placeholder endpoint".to_string());
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
