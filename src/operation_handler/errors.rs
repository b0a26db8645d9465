//! Error response creation for the transform router.

use crate::error::TransformError;
use crate::operation_handler::core::{OperationMetadata, TransformResponse};
use log::error;
use serde_json::Value;
use std::collections::HashMap;

/// Create an error response from a [`TransformError`].
///
/// Internal failures are logged with their cause and reported with a
/// generic message.
pub fn create_error_response(error: TransformError, request_id: String) -> TransformResponse {
    if error.status_code() >= 500 {
        error!("Internal transformation failure: {} (request: '{}')", error, request_id);
    }

    let mut additional = HashMap::new();
    if let Some(allowed) = error.allowed_values() {
        additional.insert(
            "allowed_values".to_string(),
            Value::Array(allowed.iter().cloned().map(Value::String).collect()),
        );
    }
    if let TransformError::TransformerNotFound { available, .. } = &error {
        additional.insert(
            "available_combinations".to_string(),
            Value::Array(available.iter().cloned().map(Value::String).collect()),
        );
    }

    TransformResponse {
        success: false,
        data: None,
        error: Some(error.public_message()),
        error_code: Some(error.error_code().to_string()),
        metadata: OperationMetadata {
            request_id,
            status_code: error.status_code(),
            transformation_type: None,
            additional,
        },
    }
}
