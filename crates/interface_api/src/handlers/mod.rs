//! Request handlers

pub mod audit;
pub mod cases;
pub mod clients;
pub mod health;
pub mod legal_texts;

use crate::error::ApiError;
use crate::messages;

/// Fallback for unknown routes
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound(messages::ROUTE_NOT_FOUND.to_string())
}
