//! Core MCP integration infrastructure
//!
//! Server wrapper, discovery metadata and the tool result type shared by the
//! protocol and handler modules.

use super::ledger::{InMemoryLedger, RequestLedger};
use crate::config::ServiceConfig;
use crate::operation_handler::TransformHandler;
use crate::platform::{EntityType, Platform, TransformMethod};
use serde_json::{Value, json};
use std::sync::Arc;

/// Default number of ledger entries kept before the oldest are evicted.
pub const DEFAULT_LEDGER_CAPACITY: usize = 1000;

/// Information about the MCP server for agent discovery.
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    /// Entity types accepted by the `transform` tool
    pub supported_entity_types: Vec<String>,
    /// Methods accepted by the `transform` tool
    pub supported_methods: Vec<String>,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "Zoom Transform MCP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Telephony entity transformation between SSOT, RingCentral and Zoom"
                .to_string(),
            supported_entity_types: EntityType::allowed_values(),
            supported_methods: TransformMethod::allowed_values(),
        }
    }
}

/// Tool execution result for MCP clients.
///
/// ```rust
/// # #[cfg(feature = "mcp")]
/// # {
/// use zoom_transform::mcp_integration::McpToolResult;
/// use serde_json::json;
///
/// let result = McpToolResult::failure("req-1", "Unknown tool 'ping'");
/// assert_eq!(
///     result.to_response(),
///     json!({"status": "error", "error": "Unknown tool 'ping'", "request_id": "req-1"})
/// );
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct McpToolResult {
    pub success: bool,
    /// Tool output on success, `{"error": ..}` plus context on failure
    pub content: Value,
    pub metadata: Option<Value>,
    pub request_id: String,
}

impl McpToolResult {
    pub fn success(request_id: impl Into<String>, content: Value) -> Self {
        Self {
            success: true,
            content,
            metadata: None,
            request_id: request_id.into(),
        }
    }

    pub fn failure(request_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            content: json!({ "error": error.into() }),
            metadata: None,
            request_id: request_id.into(),
        }
    }

    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Error message for a failed result.
    pub fn error_message(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            self.content.get("error").and_then(Value::as_str)
        }
    }

    /// Render the wire envelope returned to agents.
    pub fn to_response(&self) -> Value {
        if self.success {
            json!({
                "status": "success",
                "result": self.content,
                "request_id": self.request_id,
            })
        } else {
            let mut response = json!({
                "status": "error",
                "error": self.error_message().unwrap_or("Tool execution failed"),
                "request_id": self.request_id,
            });
            if let Some(allowed) = self.content.get("allowed_values") {
                response["allowed_values"] = allowed.clone();
            }
            response
        }
    }
}

/// MCP server wrapper for the transform router.
///
/// Cheap to share behind an `Arc`; the only mutable state is the ledger,
/// which synchronizes internally.
pub struct TransformMcpServer {
    pub(crate) operation_handler: TransformHandler,
    pub(crate) server_info: McpServerInfo,
    pub(crate) ledger: Option<Arc<dyn RequestLedger>>,
    pub(crate) default_raw_platform: Platform,
}

impl TransformMcpServer {
    /// Create a server with default info, an in-memory ledger and
    /// RingCentral as the raw platform.
    pub fn new() -> Self {
        Self::with_server_info(TransformHandler::new(), McpServerInfo::default())
    }

    pub fn with_server_info(operation_handler: TransformHandler, server_info: McpServerInfo) -> Self {
        Self {
            operation_handler,
            server_info,
            ledger: Some(Arc::new(InMemoryLedger::new(DEFAULT_LEDGER_CAPACITY))),
            default_raw_platform: Platform::RingCentral,
        }
    }

    /// Build from service configuration. A ledger capacity of 0 disables
    /// the ledger.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let server = Self::new().with_default_raw_platform(config.default_raw_platform);
        if config.ledger_enabled() {
            server.with_ledger(Arc::new(InMemoryLedger::new(config.ledger_capacity)))
        } else {
            server.without_ledger()
        }
    }

    pub fn with_ledger(mut self, ledger: Arc<dyn RequestLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn without_ledger(mut self) -> Self {
        self.ledger = None;
        self
    }

    pub fn with_default_raw_platform(mut self, platform: Platform) -> Self {
        self.default_raw_platform = platform;
        self
    }

    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }

    pub fn ledger(&self) -> Option<&Arc<dyn RequestLedger>> {
        self.ledger.as_ref()
    }

    pub fn default_raw_platform(&self) -> Platform {
        self.default_raw_platform
    }
}

impl Default for TransformMcpServer {
    fn default() -> Self {
        Self::new()
    }
}
