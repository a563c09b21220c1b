//! Create-request validation.
//!
//! The body is read as raw bytes so that every malformed request, including
//! non-JSON bodies, a missing content type and a body over axum's default
//! 2 MB limit, gets the same 400 response.

use serde_json::Value;
use todo_core::NewTodo;

use crate::error::ApiError;

/// Accepts `{"description": <non-empty string>, "isComplete": <bool>}`.
/// Extra fields are ignored.
pub fn parse_create_todo(body: &[u8]) -> Result<NewTodo, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::Validation)?;

    let description = value
        .get("description")
        .and_then(Value::as_str)
        .filter(|description| !description.is_empty())
        .ok_or(ApiError::Validation)?;
    let is_complete = value
        .get("isComplete")
        .and_then(Value::as_bool)
        .ok_or(ApiError::Validation)?;

    Ok(NewTodo::new(description, is_complete))
}
