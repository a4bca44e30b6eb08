//! Error responses for the REST layer.

use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, warn};

use crate::domain::models::expense::ExpenseValidationError;
use shared::MessageResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client input could not be used; nothing was changed
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(message))).into_response()
            }
            internal @ ApiError::Internal(_) => {
                error!("{}", internal);
                (StatusCode::INTERNAL_SERVER_ERROR, internal.to_string()).into_response()
            }
        }
    }
}

impl From<ExpenseValidationError> for ApiError {
    fn from(err: ExpenseValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

/// Turns a panic inside a handler into a plain-text 500
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Internal(message).into_response()
}

/// Fallback for any path that is neither an API route nor a bundled asset
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
