//! Error types for transformation operations.
//!
//! [`TransformError`] is the top-level error returned by the router and the
//! HTTP layer. Input problems are grouped under [`ValidationError`] so that
//! callers can map the whole family to a single status code.

/// Main error type for transformation operations.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Input failed validation (entity type, platform, method or payload shape)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No transformer is registered for the requested entity and platform pair
    #[error(
        "No transformer registered for {entity_type} from {source_platform} to {target_platform}. Available combinations: {}",
        .available.join(", ")
    )]
    TransformerNotFound {
        entity_type: String,
        source_platform: String,
        target_platform: String,
        available: Vec<String>,
    },

    /// Unknown request id in the MCP ledger
    #[error("Request ID {request_id} not found")]
    RequestNotFound { request_id: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Service configuration rejected at startup
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Internal errors raised while mapping
    #[error("Internal transformation error: {message}")]
    Internal { message: String },
}

/// Validation errors for transformation input.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Entity type outside the supported set
    #[error("Unsupported entity type '{value}'. Allowed values: {}", .allowed.join(", "))]
    UnsupportedEntityType { value: String, allowed: Vec<String> },

    /// Platform name outside the supported set
    #[error("Unsupported platform '{value}'. Allowed values: {}", .allowed.join(", "))]
    UnsupportedPlatform { value: String, allowed: Vec<String> },

    /// MCP transform method outside the supported set
    #[error("Unsupported transformation method '{value}'. Allowed values: {}", .allowed.join(", "))]
    UnsupportedMethod { value: String, allowed: Vec<String> },

    /// Required source field missing or empty
    #[error("Missing required field '{field}' for {entity_type}")]
    MissingRequiredField { entity_type: String, field: String },

    /// Request body or data payload has the wrong shape
    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },
}

impl TransformError {
    /// Create a transformer-not-found error
    pub fn transformer_not_found(
        entity_type: impl Into<String>,
        source_platform: impl Into<String>,
        target_platform: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::TransformerNotFound {
            entity_type: entity_type.into(),
            source_platform: source_platform.into(),
            target_platform: target_platform.into(),
            available,
        }
    }

    /// Create a request-not-found error
    pub fn request_not_found(request_id: impl Into<String>) -> Self {
        Self::RequestNotFound {
            request_id: request_id.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::TransformerNotFound { .. } | Self::RequestNotFound { .. } => 404,
            Self::InvalidConfiguration { .. } | Self::Json(_) | Self::Internal { .. } => 500,
        }
    }

    /// Stable machine-readable code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::TransformerNotFound { .. } => "TRANSFORMER_NOT_FOUND",
            Self::RequestNotFound { .. } => "REQUEST_NOT_FOUND",
            Self::InvalidConfiguration { .. } => "CONFIGURATION_ERROR",
            Self::Json(_) | Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message safe to return to callers.
    ///
    /// Internal failures are replaced by a generic message; the detailed
    /// error is only logged.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(ve) => ve.to_string(),
            Self::Json(_) | Self::Internal { .. } => "Internal transformation error".to_string(),
            other => other.to_string(),
        }
    }

    /// Allowed values carried by enumeration validation errors, if any.
    pub fn allowed_values(&self) -> Option<&[String]> {
        match self {
            Self::Validation(ve) => ve.allowed_values(),
            _ => None,
        }
    }
}

impl ValidationError {
    /// Create an unsupported entity type error
    pub fn unsupported_entity_type(value: impl Into<String>, allowed: Vec<String>) -> Self {
        Self::UnsupportedEntityType {
            value: value.into(),
            allowed,
        }
    }

    /// Create an unsupported platform error
    pub fn unsupported_platform(value: impl Into<String>, allowed: Vec<String>) -> Self {
        Self::UnsupportedPlatform {
            value: value.into(),
            allowed,
        }
    }

    /// Create an unsupported method error
    pub fn unsupported_method(value: impl Into<String>, allowed: Vec<String>) -> Self {
        Self::UnsupportedMethod {
            value: value.into(),
            allowed,
        }
    }

    /// Create a missing required field error
    pub fn missing_required(entity_type: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            entity_type: entity_type.into(),
            field: field.into(),
        }
    }

    /// Create an invalid payload error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    fn allowed_values(&self) -> Option<&[String]> {
        match self {
            Self::UnsupportedEntityType { allowed, .. }
            | Self::UnsupportedPlatform { allowed, .. }
            | Self::UnsupportedMethod { allowed, .. } => Some(allowed.as_slice()),
            _ => None,
        }
    }
}

// Result type aliases for convenience
pub type TransformResult<T> = Result<T, TransformError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
