//! REST transformation endpoints.

use super::AppState;
use super::response::error_response;
use crate::error::{TransformError, ValidationError};
use crate::operation_handler::TransformRequest;
use crate::platform::{EntityType, Platform, TransformMethod};
use crate::transformers::{TransformOptions, registered_transformers};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Path alias that resolves to the configured default raw platform.
const RAW_ALIAS: &str = "raw";

type ApiResponse = (StatusCode, Json<Value>);

/// Body accepted by every transform endpoint.
#[derive(Debug, Deserialize)]
struct TransformBody {
    entity_type: String,
    data: Value,
    #[serde(default)]
    options: TransformOptions,
    /// Vendor of the raw data; only read by `raw-to-zoom`
    #[serde(default)]
    raw_platform: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
}

pub(super) async fn health(State(state): State<Arc<AppState>>) -> ApiResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": state.config.service_name,
        })),
    )
}

pub(super) async fn supported() -> ApiResponse {
    let transformers: Vec<Value> = registered_transformers()
        .iter()
        .map(|t| {
            json!({
                "entity_type": t.entity_type,
                "source_platform": t.source,
                "target_platform": t.target,
                "transformation_type": t.transformation_type(),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "transformers": transformers,
            "entity_types": EntityType::allowed_values(),
            "platforms": Platform::allowed_values(),
            "methods": TransformMethod::allowed_values(),
        })),
    )
}

pub(super) async fn ssot_to_zoom(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    transform_method(&state, TransformMethod::SsotToZoom, body)
}

pub(super) async fn raw_to_zoom(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    transform_method(&state, TransformMethod::RawToZoom, body)
}

pub(super) async fn zoom_to_ssot(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    transform_method(&state, TransformMethod::ZoomToSsot, body)
}

pub(super) async fn platform_pair(
    State(state): State<Arc<AppState>>,
    Path((source, target)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let body = match parse_body(body) {
        Ok(body) => body,
        Err(e) => return error_response(&e),
    };
    let source = resolve_alias(&state, &source);
    let target = resolve_alias(&state, &target);
    run(&state, body, source, target)
}

fn transform_method(
    state: &AppState,
    method: TransformMethod,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let body = match parse_body(body) {
        Ok(body) => body,
        Err(e) => return error_response(&e),
    };

    let raw_platform = match raw_platform(state, body.raw_platform.as_deref()) {
        Ok(platform) => platform,
        Err(e) => return error_response(&e),
    };

    let (source, target) = method.platforms(raw_platform);
    run(state, body, source.as_str().to_string(), target.as_str().to_string())
}

fn run(state: &AppState, body: TransformBody, source: String, target: String) -> ApiResponse {
    let mut request = TransformRequest::new(body.entity_type, source, target, body.data)
        .with_options(body.options);
    if let Some(request_id) = body.request_id {
        request = request.with_request_id(request_id);
    }

    let result = state
        .handler
        .handle_transform(request)
        .and_then(|envelope| Ok(serde_json::to_value(envelope)?));

    match result {
        Ok(envelope) => (StatusCode::OK, Json(envelope)),
        Err(e) => error_response(&e),
    }
}

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<TransformBody, TransformError> {
    let Json(value) = body.map_err(|rejection| {
        ValidationError::invalid_payload(format!("Malformed request body: {}", rejection.body_text()))
    })?;
    serde_json::from_value(value).map_err(|e| {
        ValidationError::invalid_payload(format!("Invalid request body: {}", e)).into()
    })
}

fn raw_platform(state: &AppState, name: Option<&str>) -> Result<Platform, TransformError> {
    let platform = match name {
        None => return Ok(state.config.default_raw_platform),
        Some(name) if name.eq_ignore_ascii_case(RAW_ALIAS) => state.config.default_raw_platform,
        Some(name) => name.parse::<Platform>()?,
    };

    if platform.is_raw_vendor() {
        Ok(platform)
    } else {
        let vendors = Platform::ALL
            .iter()
            .filter(|p| p.is_raw_vendor())
            .map(|p| p.as_str().to_string())
            .collect();
        Err(ValidationError::unsupported_platform(platform.as_str(), vendors).into())
    }
}

fn resolve_alias(state: &AppState, platform: &str) -> String {
    if platform.eq_ignore_ascii_case(RAW_ALIAS) {
        state.config.default_raw_platform.as_str().to_string()
    } else {
        platform.to_string()
    }
}
