//! Shared test utilities.

use serde_json::Value;
use zoom_transform::TransformEnvelope;

pub mod fixtures;
pub mod server;

/// Assert the envelope metadata is internally consistent.
pub fn assert_envelope_consistent(envelope: &TransformEnvelope) {
    let metadata = &envelope.metadata;
    assert_eq!(
        metadata.transformation_type,
        format!("{}_to_{}", envelope.source_platform, envelope.target_platform)
    );
    assert!(!metadata.request_id.is_empty());
    assert_eq!(metadata.fingerprint.as_str().len(), 12);

    let expected_count = match &envelope.transformed_data {
        Value::Array(records) => records.len(),
        _ => 1,
    };
    assert_eq!(metadata.record_count, expected_count);
}
