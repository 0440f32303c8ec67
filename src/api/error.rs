/// Error responses for the HTTP layer
///
/// Every failure is returned to the caller as
/// `{ "error": { "kind": "...", "message": "..." } }`.

use crate::store::StoreError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// Failure of a single request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed JSON, missing required field or wrong primitive type
    #[error("{0}")]
    Validation(String),

    /// Referential integrity (or other constraint) failure at the storage boundary
    #[error("{0}")]
    ConstraintViolation(String),

    /// Connectivity or engine-level failure
    #[error("storage failure")]
    Storage(#[source] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ConstraintViolation(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::ConstraintViolation(_) => "constraint_violation",
            ApiError::Storage(_) => "storage_error",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("❌ Rejected request body: {}", rejection.body_text());
        ApiError::Validation(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConstraintViolation(message) => {
                tracing::warn!("⚠️ Constraint violation: {}", message);
                ApiError::ConstraintViolation(message)
            }
            StoreError::Storage(source) => {
                tracing::error!("❌ Storage failure: {}", source);
                ApiError::Storage(source)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
