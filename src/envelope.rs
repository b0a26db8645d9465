//! Transformation envelope returned by the router.
//!
//! The envelope wraps the transformed record(s) with the direction and a
//! metadata block. [`DataFingerprint`] is a short content hash of
//! `transformed_data` so callers can compare results across requests without
//! diffing the payload.

use crate::platform::{EntityType, Platform};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Content hash of transformed data.
///
/// Identical `transformed_data` always yields the same fingerprint; the
/// value is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataFingerprint(String);

impl DataFingerprint {
    /// Hash raw bytes; the first 8 bytes of the SHA-256 digest are kept.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();
        DataFingerprint(BASE64.encode(&hash[..8]))
    }

    /// Hash the canonical JSON serialization of a value.
    pub fn of_value(value: &Value) -> Result<Self, serde_json::Error> {
        Ok(Self::from_content(&serde_json::to_vec(value)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uniform response for every successful transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformEnvelope {
    /// A single object, or an array when the request carried a batch
    pub transformed_data: Value,
    pub source_platform: Platform,
    pub target_platform: Platform,
    pub entity_type: EntityType,
    pub metadata: EnvelopeMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeMetadata {
    /// Always `"{source}_to_{target}"`
    pub transformation_type: String,
    pub request_id: String,
    pub transformed_at: DateTime<Utc>,
    pub record_count: usize,
    pub rules_applied: usize,
    /// Source fields no rule consumed (empty with pass-through)
    pub dropped_fields: Vec<String>,
    /// Target fields filled in by a lossy default
    pub defaulted_fields: Vec<String>,
    pub fingerprint: DataFingerprint,
}
