//! MCP endpoints. Every response is HTTP 200 with a status envelope.

use super::AppState;
use crate::mcp_integration::McpToolResult;
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use log::debug;
use serde_json::{Value, json};
use std::sync::Arc;

/// Add the MCP routes under `prefix`.
pub(super) fn mount(router: Router<Arc<AppState>>, prefix: &str) -> Router<Arc<AppState>> {
    router
        .route(prefix, post(invoke))
        .route(&format!("{}/transform", prefix), post(transform))
        .route(&format!("{}/tools", prefix), get(list_tools).post(list_tools))
        .route(&format!("{}/list-tools", prefix), get(list_tools).post(list_tools))
        .route(&format!("{}/status/{{request_id}}", prefix), get(status))
}

async fn invoke(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<Value> {
    match body {
        Ok(Json(request)) => Json(state.mcp.handle_request(request).await),
        Err(rejection) => Json(malformed(&rejection)),
    }
}

async fn transform(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Json<Value> {
    match body {
        Ok(Json(parameters)) => Json(state.mcp.handle_transform_body(parameters).await),
        Err(rejection) => Json(malformed(&rejection)),
    }
}

async fn list_tools(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(state.mcp.execute_tool("list_tools", json!({})).await.to_response())
}

async fn status(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<String>,
) -> Json<Value> {
    Json(state.mcp.request_status(&request_id).await)
}

fn malformed(rejection: &JsonRejection) -> Value {
    debug!("Rejected MCP body: {}", rejection.body_text());
    McpToolResult::failure(
        uuid::Uuid::new_v4().to_string(),
        format!("Malformed request body: {}", rejection.body_text()),
    )
    .to_response()
}
