//! MCP protocol layer for tool discovery and dispatch.

use super::core::{McpToolResult, TransformMcpServer};
use super::handlers::{discovery, transform};
use super::tools::transform_schemas;
use log::{debug, warn};
use serde_json::Value;

/// Names of every tool, in manifest order.
pub const TOOL_NAMES: [&str; 2] = ["transform", "list_tools"];

impl TransformMcpServer {
    /// Tool manifest: exactly `transform` and `list_tools`.
    pub fn get_tools(&self) -> Vec<Value> {
        vec![
            transform_schemas::transform_tool(),
            transform_schemas::list_tools_tool(),
        ]
    }

    /// Execute a tool by name.
    ///
    /// Unknown tools produce a failed result naming the available tools.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> McpToolResult {
        debug!("Executing MCP tool: {} with args: {}", tool_name, arguments);

        match tool_name {
            "transform" => transform::handle_transform(self, arguments).await,
            "list_tools" => discovery::handle_list_tools(self, arguments).await,
            _ => {
                warn!("Unknown MCP tool requested: {}", tool_name);
                McpToolResult::failure(
                    uuid::Uuid::new_v4().to_string(),
                    format!(
                        "Unknown tool '{}'. Available tools: {}",
                        tool_name,
                        TOOL_NAMES.join(", ")
                    ),
                )
            }
        }
    }

    /// Handle a `{tool, parameters}` request body and return the wire
    /// envelope.
    pub async fn handle_request(&self, request: Value) -> Value {
        let Some(tool) = request.get("tool").and_then(Value::as_str) else {
            return McpToolResult::failure(
                uuid::Uuid::new_v4().to_string(),
                format!(
                    "Missing required field 'tool'. Available tools: {}",
                    TOOL_NAMES.join(", ")
                ),
            )
            .to_response();
        };

        let parameters = match request.get("parameters") {
            None | Some(Value::Null) => Value::Object(Default::default()),
            Some(parameters) => parameters.clone(),
        };

        self.execute_tool(tool, parameters).await.to_response()
    }

    /// Run the `transform` tool on a direct parameters body, accepting the
    /// legacy ETL payload shape as well.
    pub async fn handle_transform_body(&self, body: Value) -> Value {
        let arguments = transform::normalize_etl_payload(body);
        transform::handle_transform(self, arguments).await.to_response()
    }

    /// Status envelope for a recorded request.
    pub async fn request_status(&self, request_id: &str) -> Value {
        discovery::handle_request_status(self, request_id)
            .await
            .to_response()
    }
}
