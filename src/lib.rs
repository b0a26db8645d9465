//! Telephony entity transformation for Zoom Phone migrations.
//!
//! Converts user, site, call queue, auto receptionist and IVR records between
//! the canonical SSOT schema, raw RingCentral exports and the Zoom Phone API
//! schema. Every transformation is a pure function of its input; results are
//! wrapped in a [`TransformEnvelope`] carrying provenance metadata.
//!
//! # Core Components
//!
//! - [`TransformHandler`] - validates requests and dispatches to a transformer
//! - [`transformers`] - the registry of per-entity, per-direction mappings
//! - [`mapping`] - rule engine, value converters and lookup tables
//! - [`server`] - axum HTTP surface
//! - [`mcp_integration`] - `transform` and `list_tools` for automated agents
//!
//! # Quick Start
//!
//! ```rust
//! use zoom_transform::{TransformHandler, TransformRequest};
//! use serde_json::json;
//!
//! let handler = TransformHandler::new();
//! let request = TransformRequest::raw_to_zoom(
//!     "user",
//!     "ringcentral",
//!     json!({"firstName": "Test", "lastName": "User", "status": "Active"}),
//! );
//!
//! let envelope = handler.handle_transform(request).unwrap();
//! assert_eq!(
//!     envelope.transformed_data,
//!     json!({"first_name": "Test", "last_name": "User", "status": "active", "type": 1})
//! );
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod mapping;
/// MCP adapter for automated agents.
///
/// Only available with the `mcp` feature (enabled by default).
#[cfg(feature = "mcp")]
pub mod mcp_integration;
pub mod operation_handler;
pub mod platform;
pub mod server;
pub mod transformers;

// Re-export commonly used types for convenience
pub use config::{ServiceArgs, ServiceConfig, ServiceConfigBuilder};
pub use envelope::{DataFingerprint, EnvelopeMetadata, TransformEnvelope};
pub use error::{TransformError, TransformResult, ValidationError, ValidationResult};
pub use operation_handler::{
    OperationMetadata, TransformHandler, TransformRequest, TransformResponse,
};
pub use platform::{EntityType, Platform, TransformMethod};
pub use server::{AppState, build_router};
pub use transformers::{
    EntityTransformer, TransformOptions, find_transformer, registered_transformers,
};

#[cfg(feature = "mcp")]
pub use mcp_integration::{McpServerInfo, McpToolResult, TransformMcpServer};
