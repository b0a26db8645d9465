//! Core router types and dispatch.

use crate::envelope::{DataFingerprint, EnvelopeMetadata, TransformEnvelope};
use crate::error::{TransformError, TransformResult, ValidationError};
use crate::platform::{EntityType, Platform};
use crate::transformers::{
    EntityTransformer, TransformOptions, available_combinations, find_transformer,
};
use chrono::Utc;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Router for transformation requests.
///
/// Holds no per-request state; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformHandler;

/// Structured transformation request.
///
/// Names are kept as strings until the handler validates them so that the
/// error can echo exactly what the caller sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformRequest {
    /// Entity type, e.g. "user" or "call_queue"
    pub entity_type: String,
    pub source_platform: String,
    pub target_platform: String,
    /// A single record or an array of records
    pub data: Value,
    pub options: TransformOptions,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

/// Envelope-level outcome used by the MCP adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResponse {
    /// Whether the transformation succeeded
    pub success: bool,
    /// Serialized [`TransformEnvelope`] on success
    pub data: Option<Value>,
    /// Caller-safe error message on failure
    pub error: Option<String>,
    /// Error code for programmatic handling
    pub error_code: Option<String>,
    pub metadata: OperationMetadata,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationMetadata {
    pub request_id: String,
    /// HTTP status the same failure would map to (200 on success)
    pub status_code: u16,
    pub transformation_type: Option<String>,
    /// Extra context such as the allowed values for a rejected input
    pub additional: HashMap<String, Value>,
}

impl TransformHandler {
    pub fn new() -> Self {
        Self
    }

    /// Validate, dispatch and wrap a request.
    pub fn handle_transform(&self, request: TransformRequest) -> TransformResult<TransformEnvelope> {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "Transform router processing {} from {} to {} (request: '{}')",
            request.entity_type, request.source_platform, request.target_platform, request_id
        );

        let result = self.dispatch(&request, &request_id);

        match &result {
            Ok(envelope) => debug!(
                "Transform router completed {} with {} record(s) (request: '{}')",
                envelope.metadata.transformation_type, envelope.metadata.record_count, request_id
            ),
            Err(e) => warn!("Transform router failed: {} (request: '{}')", e, request_id),
        }

        result
    }

    /// Same as [`handle_transform`](Self::handle_transform) with errors
    /// folded into the response.
    pub fn handle_operation(&self, request: TransformRequest) -> TransformResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let request = TransformRequest {
            request_id: Some(request_id.clone()),
            ..request
        };

        let result = self
            .handle_transform(request)
            .and_then(|envelope| Ok((serde_json::to_value(&envelope)?, envelope)));

        match result {
            Ok((data, envelope)) => TransformResponse {
                success: true,
                data: Some(data),
                error: None,
                error_code: None,
                metadata: OperationMetadata {
                    request_id,
                    status_code: 200,
                    transformation_type: Some(envelope.metadata.transformation_type),
                    additional: HashMap::new(),
                },
            },
            Err(e) => super::errors::create_error_response(e, request_id),
        }
    }

    fn dispatch(&self, request: &TransformRequest, request_id: &str) -> TransformResult<TransformEnvelope> {
        let entity_type: EntityType = request.entity_type.parse()?;
        let source: Platform = request.source_platform.parse()?;
        let target: Platform = request.target_platform.parse()?;

        let transformer = find_transformer(entity_type, source, target).ok_or_else(|| {
            TransformError::transformer_not_found(
                entity_type.as_str(),
                source.as_str(),
                target.as_str(),
                available_combinations(),
            )
        })?;

        let (transformed_data, stats) = match &request.data {
            Value::Array(records) => {
                let mut stats = BatchStats::default();
                let mut transformed = Vec::with_capacity(records.len());
                for (index, record) in records.iter().enumerate() {
                    if !record.is_object() {
                        return Err(ValidationError::invalid_payload(format!(
                            "record {} of the {} batch is not a JSON object",
                            index, entity_type
                        ))
                        .into());
                    }
                    transformed.push(stats.record(transformer, record, &request.options)?);
                }
                (Value::Array(transformed), stats)
            }
            record @ Value::Object(_) => {
                let mut stats = BatchStats::default();
                let transformed = stats.record(transformer, record, &request.options)?;
                (transformed, stats)
            }
            _ => {
                return Err(ValidationError::invalid_payload(
                    "data must be a JSON object or an array of objects",
                )
                .into());
            }
        };

        let fingerprint = DataFingerprint::of_value(&transformed_data)?;

        Ok(TransformEnvelope {
            transformed_data,
            source_platform: source,
            target_platform: target,
            entity_type,
            metadata: EnvelopeMetadata {
                transformation_type: transformer.transformation_type(),
                request_id: request_id.to_string(),
                transformed_at: Utc::now(),
                record_count: stats.record_count,
                rules_applied: stats.rules_applied,
                dropped_fields: stats.dropped_fields.into_iter().collect(),
                defaulted_fields: stats.defaulted_fields.into_iter().collect(),
                fingerprint,
            },
        })
    }
}

#[derive(Default)]
struct BatchStats {
    record_count: usize,
    rules_applied: usize,
    dropped_fields: BTreeSet<String>,
    defaulted_fields: BTreeSet<String>,
}

impl BatchStats {
    fn record(
        &mut self,
        transformer: &EntityTransformer,
        record: &Value,
        options: &TransformOptions,
    ) -> TransformResult<Value> {
        let transformed = transformer.transform(record, options)?;
        self.record_count += 1;
        self.rules_applied += transformed.rules_applied;
        self.dropped_fields.extend(transformed.dropped_fields);
        self.defaulted_fields.extend(transformed.defaulted_fields);
        Ok(transformed.data)
    }
}
