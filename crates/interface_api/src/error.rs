//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use infra_store::{Entity, ServiceError};

use crate::messages;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                Some(details),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingFields(fields) => ApiError::Validation {
                message: messages::REQUIRED_FIELDS.to_string(),
                details: fields,
            },
            ServiceError::InvalidSection { .. } => {
                tracing::debug!(error = %err, "section rejected");
                ApiError::Validation {
                    message: messages::INVALID_SECTION.to_string(),
                    details: vec!["section".to_string()],
                }
            }
            ServiceError::UnknownClient(_) => ApiError::Validation {
                message: messages::UNKNOWN_CLIENT.to_string(),
                details: vec!["clientId".to_string()],
            },
            ServiceError::NotFound { entity, .. } => {
                let message = match entity {
                    Entity::Client => messages::CLIENT_NOT_FOUND,
                    Entity::Case => messages::CASE_NOT_FOUND,
                    Entity::LegalText => messages::LEGAL_TEXT_NOT_FOUND,
                };
                ApiError::NotFound(message.to_string())
            }
            ServiceError::Storage(storage) => {
                // Full detail stays in the log; the caller gets the
                // generic message.
                tracing::error!(error = %storage, "storage failure");
                ApiError::Internal(messages::SERVER_ERROR.to_string())
            }
        }
    }
}
