//! HTTP API tests against the axum router on an ephemeral port.

use crate::common::{fixtures, server::spawn_test_server, server::spawn_with_config};
use serde_json::{Value, json};
use zoom_transform::{EntityType, Platform, ServiceConfigBuilder};

async fn post_json(url: String, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn health_reports_service_name() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{}/health", base)).await.unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({"status": "healthy", "service": "zoom-platform-microservice"})
    );
}

#[tokio::test]
async fn raw_to_zoom_user_example() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/api/transform/raw-to-zoom", base),
        json!({
            "entity_type": "user",
            "data": {"firstName": "Test", "lastName": "User", "status": "Active"}
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(
        body["transformed_data"],
        json!({"first_name": "Test", "last_name": "User", "status": "active", "type": 1})
    );
    assert_eq!(body["source_platform"], "ringcentral");
    assert_eq!(body["target_platform"], "zoom");
    assert_eq!(body["entity_type"], "user");
    assert_eq!(body["metadata"]["transformation_type"], "ringcentral_to_zoom");
    assert!(body["metadata"]["transformed_at"].is_string());
}

#[tokio::test]
async fn ssot_and_zoom_directions() {
    let base = spawn_test_server().await;

    let (status, body) = post_json(
        format!("{}/api/transform/ssot-to-zoom", base),
        json!({"entity_type": "site", "data": fixtures::ssot_site()}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["transformed_data"]["site_code"], "DENVER_BRANCH_OFFICE");

    let (status, body) = post_json(
        format!("{}/api/transform/zoom-to-ssot", base),
        json!({"entity_type": "user", "data": fixtures::zoom_user()}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["transformed_data"]["role"], "admin");
}

#[tokio::test]
async fn unsupported_entity_type_is_422_with_allowed_values() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/api/transform/ssot-to-zoom", base),
        json!({"entity_type": "widget", "data": {}}),
    )
    .await;

    assert_eq!(status, 422);
    assert_eq!(body["allowed_values"], json!(EntityType::allowed_values()));
    let detail = body["detail"].as_str().unwrap();
    for entity in EntityType::ALL {
        assert!(detail.contains(entity.as_str()));
    }
}

#[tokio::test]
async fn unregistered_pair_is_404() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/api/transform/zoom/to/ringcentral", base),
        json!({"entity_type": "user", "data": {}}),
    )
    .await;

    assert_eq!(status, 404);
    assert!(body["available_combinations"].as_array().unwrap().len() >= 20);
}

#[tokio::test]
async fn generic_route_with_raw_alias() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/api/transform/raw/to/zoom", base),
        json!({"entity_type": "call-queue", "data": fixtures::ringcentral_call_queue()}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["source_platform"], "ringcentral");
    assert_eq!(body["entity_type"], "call_queue");
}

#[tokio::test]
async fn dialpad_records_reach_zoom() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/api/transform/raw-to-zoom", base),
        json!({"entity_type": "user", "raw_platform": "dialpad", "data": fixtures::dialpad_user()}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["metadata"]["transformation_type"], "dialpad_to_zoom");
    assert_eq!(body["transformed_data"]["email"], "mary.jackson@example.com");
    assert_eq!(body["transformed_data"]["display_name"], "Mary Jackson");
    assert_eq!(body["transformed_data"]["timezone"], "America/New_York");

    let (status, body) = post_json(
        format!("{}/api/transform/dialpad/to/zoom", base),
        json!({"entity_type": "ivr", "data": fixtures::dialpad_office_menu()}),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["source_platform"], "dialpad");
    let actions = body["transformed_data"]["ivr_actions"].as_array().unwrap();
    assert_eq!(actions.len(), 3);
    assert_eq!(actions[2], json!({"key": "timeout", "action": 200}));
}

#[tokio::test]
async fn malformed_bodies_are_422() {
    let base = spawn_test_server().await;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/transform/ssot-to-zoom", base))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    let body: Value = resp.json().await.unwrap();
    assert!(body["detail"].is_string());

    let (status, _) = post_json(
        format!("{}/api/transform/ssot-to-zoom", base),
        json!({"entity_type": "user"}),
    )
    .await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn raw_platform_must_be_a_vendor() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/api/transform/raw-to-zoom", base),
        json!({"entity_type": "user", "raw_platform": "ssot", "data": {}}),
    )
    .await;

    assert_eq!(status, 422);
    assert_eq!(body["allowed_values"], json!(["ringcentral", "dialpad"]));
}

#[tokio::test]
async fn supported_lists_registry() {
    let base = spawn_test_server().await;
    let body: Value = reqwest::get(format!("{}/api/transform/supported", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["transformers"].as_array().unwrap().len(), 20);
    assert_eq!(body["platforms"], json!(Platform::allowed_values()));
    assert_eq!(
        body["methods"],
        json!(["ssot_to_zoom", "raw_to_zoom", "zoom_to_ssot"])
    );
}

#[tokio::test]
async fn mcp_list_tools_on_every_route() {
    let base = spawn_test_server().await;
    let client = reqwest::Client::new();

    for path in [
        "/api/mcp/tools",
        "/api/mcp/list-tools",
        "/mcp/tools",
        "/mcp/list-tools",
    ] {
        let get: Value = client
            .get(format!("{}{}", base, path))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let post: Value = client
            .post(format!("{}{}", base, path))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(get["status"], "success", "{}", path);
        assert_eq!(get["result"], post["result"], "{}", path);
        assert_eq!(get["result"]["tools"].as_array().unwrap().len(), 2);
    }
}

#[tokio::test]
async fn mcp_errors_are_http_200() {
    let base = spawn_test_server().await;

    let (status, body) = post_json(
        format!("{}/api/mcp", base),
        json!({"tool": "transform", "parameters": {"method": "fax_to_zoom", "entity_type": "user", "data": {}}}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "error");
    assert!(body["error"].as_str().unwrap().contains("raw_to_zoom"));

    let resp = reqwest::Client::new()
        .post(format!("{}/api/mcp", base))
        .header("content-type", "application/json")
        .body("[")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn mcp_transform_and_status_lookup() {
    let base = spawn_test_server().await;
    let (status, body) = post_json(
        format!("{}/mcp/transform", base),
        json!({
            "method": "raw_to_zoom",
            "entity_type": "ivr",
            "data": fixtures::ringcentral_ivr(),
            "request_id": "http-ivr-1"
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "success");
    assert_eq!(body["request_id"], "http-ivr-1");

    let status_body: Value = reqwest::get(format!("{}/api/mcp/status/http-ivr-1", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status_body["status"], "success");
    assert_eq!(status_body["result"]["status"], "completed");
    assert_eq!(status_body["result"]["entity_type"], "ivr");

    let unknown = reqwest::get(format!("{}/api/mcp/status/nope", base))
        .await
        .unwrap();
    assert_eq!(unknown.status(), 200);
    let unknown: Value = unknown.json().await.unwrap();
    assert_eq!(unknown["status"], "error");
}

#[tokio::test]
async fn configured_service_name_and_disabled_ledger() {
    let config = ServiceConfigBuilder::new()
        .with_service_name("transform-staging")
        .with_ledger_capacity(0)
        .build()
        .unwrap();
    let base = spawn_with_config(config).await;

    let health: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["service"], "transform-staging");

    let status: Value = reqwest::get(format!("{}/api/mcp/status/any", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["error"], "Request ledger is disabled");
}
