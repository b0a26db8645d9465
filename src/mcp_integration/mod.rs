//! MCP (Machine Communication Protocol) adapter for the transform router.
//!
//! Exposes the router to automated agents as two tools:
//!
//! - `transform`: runs a named method (`ssot_to_zoom`, `raw_to_zoom`,
//!   `zoom_to_ssot`) over an entity payload
//! - `list_tools`: returns the tool manifest
//!
//! Failures never escape as errors. Every call produces an [`McpToolResult`]
//! which renders to `{status: "success", result, request_id}` or
//! `{status: "error", error, request_id}`.
//!
//! ## Module Structure
//!
//! - `core` - server wrapper, server info and tool result types
//! - `protocol` - tool discovery and dispatch
//! - `ledger` - request ledger for transform calls
//! - `tools/` - JSON tool manifests
//! - `handlers/` - tool execution
//!
//! ## Usage Example
//!
//! ```rust
//! # #[cfg(feature = "mcp")]
//! use zoom_transform::mcp_integration::TransformMcpServer;
//! use serde_json::json;
//!
//! # #[cfg(feature = "mcp")]
//! # #[tokio::main]
//! # async fn main() {
//! let mcp_server = TransformMcpServer::new();
//!
//! let result = mcp_server
//!     .execute_tool(
//!         "transform",
//!         json!({
//!             "method": "raw_to_zoom",
//!             "entity_type": "user",
//!             "data": {"firstName": "Test", "lastName": "User", "status": "Active"}
//!         }),
//!     )
//!     .await;
//!
//! assert!(result.success);
//! assert_eq!(result.content["transformed_data"]["status"], "active");
//! # }
//! # #[cfg(not(feature = "mcp"))]
//! # fn main() {}
//! ```

#[cfg(feature = "mcp")]
pub mod core;
#[cfg(feature = "mcp")]
pub mod handlers;
#[cfg(feature = "mcp")]
pub mod ledger;
#[cfg(feature = "mcp")]
pub mod protocol;
#[cfg(feature = "mcp")]
pub mod tools;


#[cfg(feature = "mcp")]
pub use core::{McpServerInfo, McpToolResult, TransformMcpServer};
#[cfg(feature = "mcp")]
pub use ledger::{InMemoryLedger, LedgerEntry, LedgerStatus, RequestLedger};
