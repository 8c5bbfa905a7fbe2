//! Request handlers

pub mod health;
pub mod quote;

use crate::error::ApiError;

/// Catch-all handler for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
