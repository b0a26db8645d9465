//! Transport-agnostic transform router.
//!
//! The router validates the entity type and platform pair of a
//! [`TransformRequest`], dispatches to the registered entity transformer and
//! wraps the result in a [`TransformEnvelope`](crate::envelope::TransformEnvelope).
//! HTTP handlers use [`TransformHandler::handle_transform`] to get a `Result`
//! they can map onto status codes; the MCP adapter uses
//! [`TransformHandler::handle_operation`], which folds errors into a
//! [`TransformResponse`].
//!
//! # Examples
//!
//! ```rust
//! use zoom_transform::operation_handler::{TransformHandler, TransformRequest};
//! use serde_json::json;
//!
//! let handler = TransformHandler::new();
//! let request = TransformRequest::raw_to_zoom(
//!     "user",
//!     "ringcentral",
//!     json!({"firstName": "Test", "lastName": "User", "status": "Active"}),
//! );
//! let envelope = handler.handle_transform(request).unwrap();
//! assert_eq!(envelope.transformed_data["first_name"], "Test");
//! assert_eq!(envelope.metadata.transformation_type, "ringcentral_to_zoom");
//! ```

mod builders;
mod core;
mod errors;

pub use core::{OperationMetadata, TransformHandler, TransformRequest, TransformResponse};

// Re-export error utilities for advanced usage
pub use errors::create_error_response;
