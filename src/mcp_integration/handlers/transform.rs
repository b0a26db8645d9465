//! Handler for the `transform` tool.
//!
//! Arguments are validated here and converted into a [`TransformRequest`];
//! the router does the rest. Every outcome, including argument errors, is
//! recorded in the ledger when one is configured.

use crate::{
    error::{TransformError, ValidationError},
    mcp_integration::{
        core::{McpToolResult, TransformMcpServer},
        ledger::{LedgerEntry, LedgerStatus},
    },
    operation_handler::{TransformRequest, TransformResponse, create_error_response},
    platform::{EntityType, Platform, TransformMethod},
    transformers::TransformOptions,
};
use log::{debug, warn};
use serde_json::{Value, json};

/// Method name used by the batch ETL client.
pub const LEGACY_ETL_METHOD: &str = "transform_raw";

/// Job type codes sent by the batch ETL client.
static JOB_TYPES: [(&str, EntityType); 5] = [
    ("rc_zoom_sites", EntityType::Site),
    ("rc_zoom_users", EntityType::User),
    ("rc_zoom_call_queues", EntityType::CallQueue),
    ("rc_zoom_ars", EntityType::AutoReceptionist),
    ("rc_zoom_ivr", EntityType::Ivr),
];

/// Entity type for an ETL job type code.
pub fn entity_for_job_type(code: &str) -> Option<EntityType> {
    JOB_TYPES
        .iter()
        .find(|(job, _)| job.eq_ignore_ascii_case(code.trim()))
        .map(|(_, entity)| *entity)
}

pub fn job_type_codes() -> Vec<&'static str> {
    JOB_TYPES.iter().map(|(job, _)| *job).collect()
}

/// Rewrite a `{method: "transform_raw", params: {..}}` payload into
/// `transform` tool arguments. Anything else is returned unchanged.
pub fn normalize_etl_payload(payload: Value) -> Value {
    let is_legacy = payload.get("method").and_then(Value::as_str) == Some(LEGACY_ETL_METHOD)
        && payload.get("params").is_some_and(Value::is_object);
    if !is_legacy {
        return payload;
    }

    let params = &payload["params"];
    let mut arguments = json!({
        "method": TransformMethod::RawToZoom.as_str(),
        "data": params.get("raw_data").cloned().unwrap_or_else(|| json!({})),
    });
    for (from, to) in [
        ("job_type", "job_type"),
        ("source_format", "raw_platform"),
        ("target_format", "target_format"),
        ("request_id", "request_id"),
    ] {
        if let Some(value) = params.get(from).filter(|v| !v.is_null()) {
            arguments[to] = value.clone();
        }
    }
    arguments
}

/// Handle the `transform` tool.
pub async fn handle_transform(server: &TransformMcpServer, arguments: Value) -> McpToolResult {
    let request_id = arguments
        .get("request_id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    if let Some(ledger) = server.ledger() {
        let method = arguments.get("method").and_then(Value::as_str).map(str::to_string);
        let entity_type = arguments
            .get("entity_type")
            .or_else(|| arguments.get("job_type"))
            .and_then(Value::as_str)
            .map(str::to_string);
        ledger
            .record(LedgerEntry::processing(&request_id, "transform", method, entity_type))
            .await;
    }

    let result = match build_request(server, &arguments, &request_id) {
        Ok(request) => tool_result(server.operation_handler.handle_operation(request)),
        Err(error) => tool_result(create_error_response(error, request_id.clone())),
    };

    if let Some(ledger) = server.ledger() {
        let (status, error) = if result.success {
            (LedgerStatus::Completed, None)
        } else {
            (LedgerStatus::Failed, result.error_message().map(str::to_string))
        };
        if !ledger.finish(&request_id, status, error).await {
            warn!(
                "Ledger entry evicted before completion (request: '{}')",
                request_id
            );
        }
    }

    result
}

fn build_request(
    server: &TransformMcpServer,
    arguments: &Value,
    request_id: &str,
) -> Result<TransformRequest, TransformError> {
    let method: TransformMethod = required_str(arguments, "method")?.parse()?;

    let entity_type = match (
        arguments.get("entity_type").and_then(Value::as_str),
        arguments.get("job_type").and_then(Value::as_str),
    ) {
        (Some(entity_type), _) => entity_type.to_string(),
        (None, Some(job)) => entity_for_job_type(job)
            .map(|entity| entity.as_str().to_string())
            .ok_or_else(|| {
                ValidationError::invalid_payload(format!(
                    "Unsupported job type '{}'. Allowed values: {}",
                    job,
                    job_type_codes().join(", ")
                ))
            })?,
        (None, None) => return Err(missing_parameter("entity_type")),
    };

    let data = arguments
        .get("data")
        .filter(|d| !d.is_null())
        .cloned()
        .ok_or_else(|| missing_parameter("data"))?;

    let raw_platform = match arguments.get("raw_platform").and_then(Value::as_str) {
        Some(name) => name.parse::<Platform>()?,
        None => server.default_raw_platform,
    };
    if method == TransformMethod::RawToZoom && !raw_platform.is_raw_vendor() {
        return Err(ValidationError::unsupported_platform(
            raw_platform.as_str(),
            vendor_platforms(),
        )
        .into());
    }

    if let Some(target) = arguments.get("target_format").and_then(Value::as_str) {
        if target.parse::<Platform>()? != Platform::Zoom {
            return Err(ValidationError::invalid_payload(format!(
                "Raw transformations only target zoom, got '{}'",
                target
            ))
            .into());
        }
    }

    let options = match arguments.get("options") {
        None | Some(Value::Null) => TransformOptions::default(),
        Some(options) => serde_json::from_value(options.clone()).map_err(|e| {
            ValidationError::invalid_payload(format!("Invalid options: {}", e))
        })?,
    };

    debug!(
        "MCP transform resolved {} {} via {} (request: '{}')",
        method, entity_type, raw_platform, request_id
    );

    Ok(
        TransformRequest::for_method(method, entity_type, raw_platform, data)
            .with_options(options)
            .with_request_id(request_id),
    )
}

fn required_str<'a>(arguments: &'a Value, name: &str) -> Result<&'a str, TransformError> {
    arguments
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| missing_parameter(name))
}

fn missing_parameter(name: &str) -> TransformError {
    ValidationError::invalid_payload(format!("Missing required parameter '{}'", name)).into()
}

fn vendor_platforms() -> Vec<String> {
    Platform::ALL
        .iter()
        .filter(|p| p.is_raw_vendor())
        .map(|p| p.as_str().to_string())
        .collect()
}

/// Convert a router response into a tool result.
pub(crate) fn tool_result(response: TransformResponse) -> McpToolResult {
    let request_id = response.metadata.request_id;

    if response.success {
        return McpToolResult::success(request_id, response.data.unwrap_or(Value::Null))
            .with_metadata(json!({
                "tool": "transform",
                "transformation_type": response.metadata.transformation_type,
            }));
    }

    let mut result = McpToolResult::failure(
        request_id,
        response
            .error
            .unwrap_or_else(|| "Transformation failed".to_string()),
    );
    if let Some(code) = response.error_code {
        result.content["error_code"] = json!(code);
    }
    for (key, value) in response.metadata.additional {
        result.content[key.as_str()] = value;
    }
    result.with_metadata(json!({
        "tool": "transform",
        "status_code": response.metadata.status_code,
    }))
}
