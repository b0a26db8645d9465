//! Discovery handlers: tool listing and ledger lookup.

use crate::{
    error::TransformError,
    mcp_integration::core::{McpToolResult, TransformMcpServer},
};
use log::warn;
use serde_json::{Value, json};

/// Handle the `list_tools` tool. The manifest does not depend on server
/// state.
pub async fn handle_list_tools(server: &TransformMcpServer, _arguments: Value) -> McpToolResult {
    McpToolResult::success(
        uuid::Uuid::new_v4().to_string(),
        json!({ "tools": server.get_tools() }),
    )
    .with_metadata(json!({ "tool": "list_tools" }))
}

/// Look up a recorded request.
pub async fn handle_request_status(server: &TransformMcpServer, request_id: &str) -> McpToolResult {
    let Some(ledger) = server.ledger() else {
        return McpToolResult::failure(request_id, "Request ledger is disabled");
    };

    match ledger.get(request_id).await {
        Some(entry) => match serde_json::to_value(&entry) {
            Ok(content) => McpToolResult::success(request_id, content),
            Err(e) => {
                warn!("Failed to serialize ledger entry: {} (request: '{}')", e, request_id);
                McpToolResult::failure(request_id, TransformError::from(e).public_message())
            }
        },
        None => McpToolResult::failure(
            request_id,
            TransformError::request_not_found(request_id).public_message(),
        ),
    }
}
