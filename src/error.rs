//! Error types for the product service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

/// Message returned to clients for any failure that is not a domain error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

// == Product Error Enum ==
/// Unified error type for the product service.
#[derive(Error, Debug)]
pub enum ProductError {
    /// No product exists with the requested id
    #[error("Product not found: {0}")]
    NotFound(i64),

    /// A product with the id already exists
    #[error("Product with id already exists: {0}")]
    Conflict(i64),

    /// Storage layer failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProductError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Conflict(_) => StatusCode::CONFLICT,
            ProductError::Database(_) | ProductError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Domain errors are safe to echo back; anything else stays in the logs.
        let message = match &self {
            ProductError::NotFound(_) | ProductError::Conflict(_) => {
                warn!("{}", self);
                self.to_string()
            }
            ProductError::Database(_) | ProductError::Internal(_) => {
                error!("Request failed: {}", self);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the product service.
pub type Result<T> = std::result::Result<T, ProductError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ProductError::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ProductError::Conflict(1).status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ProductError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProductError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(ProductError::NotFound(7).to_string(), "Product not found: 7");
        assert_eq!(
            ProductError::Conflict(7).to_string(),
            "Product with id already exists: 7"
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ProductError::Internal("disk on fire".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains(INTERNAL_ERROR_MESSAGE));
        assert!(!body.contains("disk on fire"));
    }
}
