//! MCP adapter tests through the public API.

use crate::common::fixtures;
use futures::future::join_all;
use serde_json::{Value, json};
use std::sync::Arc;
use zoom_transform::TransformMcpServer;
use zoom_transform::mcp_integration::{InMemoryLedger, LedgerStatus, RequestLedger};

#[tokio::test]
async fn test_list_tools_envelope() {
    let mcp_server = TransformMcpServer::new();
    let response = mcp_server
        .handle_request(json!({"tool": "list_tools", "parameters": {}}))
        .await;

    assert_eq!(response["status"], "success");
    let tools = response["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, vec!["transform", "list_tools"]);
    assert_eq!(
        tools[0]["parameters"]["required"],
        json!(["method", "entity_type", "data"])
    );
}

#[tokio::test]
async fn test_transform_every_raw_entity() {
    let mcp_server = TransformMcpServer::new();
    let cases = [
        ("user", fixtures::ringcentral_user()),
        ("site", fixtures::ringcentral_site()),
        ("call_queue", fixtures::ringcentral_call_queue()),
        ("ivr", fixtures::ringcentral_ivr()),
    ];

    for (entity_type, data) in cases {
        let result = mcp_server
            .execute_tool(
                "transform",
                json!({"method": "raw_to_zoom", "entity_type": entity_type, "data": data}),
            )
            .await;
        assert!(result.success, "{} failed: {:?}", entity_type, result.content);
        assert_eq!(result.content["entity_type"], entity_type);
        assert_eq!(result.content["metadata"]["transformation_type"], "ringcentral_to_zoom");
    }
}

#[tokio::test]
async fn test_errors_never_escape_envelope() {
    let mcp_server = TransformMcpServer::new();
    let bodies = [
        json!({"tool": "transform"}),
        json!({"tool": "transform", "parameters": {"method": "raw_to_zoom", "entity_type": "widget", "data": {}}}),
        json!({"tool": "transform", "parameters": {"method": "ssot_to_zoom", "entity_type": "user", "data": 42}}),
        json!({"tool": "transform", "parameters": {"method": "ssot_to_zoom", "entity_type": "group", "data": {}}}),
        json!({"tool": "load"}),
        json!("not an object"),
    ];

    for body in bodies {
        let response = mcp_server.handle_request(body.clone()).await;
        assert_eq!(response["status"], "error", "body: {}", body);
        assert!(response["error"].is_string());
        assert!(response["request_id"].is_string());
    }
}

#[tokio::test]
async fn test_concurrent_transforms_share_ledger() {
    let ledger = Arc::new(InMemoryLedger::new(100));
    let mcp_server = Arc::new(TransformMcpServer::new().with_ledger(ledger.clone()));

    let calls = (0..20).map(|i| {
        let server = Arc::clone(&mcp_server);
        async move {
            server
                .execute_tool(
                    "transform",
                    json!({
                        "method": "ssot_to_zoom",
                        "entity_type": "user",
                        "request_id": format!("req-{}", i),
                        "data": {"email": format!("user{}@example.com", i), "status": "active"}
                    }),
                )
                .await
        }
    });
    let results = join_all(calls).await;

    assert!(results.iter().all(|r| r.success));
    assert_eq!(ledger.len().await, 20);
    for i in 0..20 {
        let entry = ledger.get(&format!("req-{}", i)).await.unwrap();
        assert_eq!(entry.status, LedgerStatus::Completed);
        assert_eq!(entry.method.as_deref(), Some("ssot_to_zoom"));
    }
}

#[tokio::test]
async fn test_identical_calls_are_idempotent() {
    let mcp_server = TransformMcpServer::new();
    let arguments = json!({
        "method": "raw_to_zoom",
        "entity_type": "call_queue",
        "data": fixtures::ringcentral_call_queue()
    });

    let first = mcp_server.execute_tool("transform", arguments.clone()).await;
    let second = mcp_server.execute_tool("transform", arguments).await;

    let data = |v: &Value| serde_json::to_string(&v["transformed_data"]).unwrap();
    assert_eq!(data(&first.content), data(&second.content));
    assert_eq!(
        first.content["metadata"]["fingerprint"],
        second.content["metadata"]["fingerprint"]
    );
}
