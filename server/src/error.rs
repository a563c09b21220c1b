//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"message": ...}` with a fixed text.
//! Backend details are logged, never returned to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::StoreError;

pub const VALIDATION_MESSAGE: &str = "Please provide description, and isComplete fields";
pub const NOT_FOUND_MESSAGE: &str = "Todo not found";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The create request body is missing a field or has the wrong type.
    #[error("invalid create request")]
    Validation,

    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::Validation => VALIDATION_MESSAGE,
            ApiError::NotFound => NOT_FOUND_MESSAGE,
            ApiError::Store(_) => INTERNAL_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(err) = &self {
            tracing::error!("store operation failed: {err}");
        }
        let body = Json(json!({ "message": self.message() }));
        (self.status(), body).into_response()
    }
}
