//! Error bodies for the REST endpoints.

use crate::error::TransformError;
use axum::{Json, http::StatusCode};
use log::error;
use serde_json::{Value, json};

/// Map an error to its status and a `{"detail": ..}` body.
///
/// Rejected enumeration values add `allowed_values`; a missing transformer
/// adds `available_combinations`.
pub fn error_response(error: &TransformError) -> (StatusCode, Json<Value>) {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!("Request failed: {}", error);
    }

    let mut body = json!({ "detail": error.public_message() });
    if let Some(allowed) = error.allowed_values() {
        body["allowed_values"] = json!(allowed);
    }
    if let TransformError::TransformerNotFound { available, .. } = error {
        body["available_combinations"] = json!(available);
    }

    (status, Json(body))
}
