//! Error handling utilities for API responses.
//!
//! Provides the single conversion point between service-layer errors and
//! HTTP responses. Beyond the status code the API returns no structured
//! error body; unauthorized responses carry an empty body.

use crate::errors::ServiceError;
use axum::http::StatusCode;

/// Converts ServiceError to the appropriate HTTP status and body
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            format!("{} '{}' already exists", entity, identifier),
        ),
        ServiceError::Unauthorized { message } => {
            tracing::debug!("Unauthorized: {}", message);
            (StatusCode::UNAUTHORIZED, String::new())
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}
