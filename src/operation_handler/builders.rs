//! Builder methods for [`TransformRequest`].

use super::core::TransformRequest;
use crate::platform::{Platform, TransformMethod};
use crate::transformers::TransformOptions;
use serde_json::Value;

impl TransformRequest {
    /// Create a request for an explicit platform pair.
    pub fn new(
        entity_type: impl Into<String>,
        source_platform: impl Into<String>,
        target_platform: impl Into<String>,
        data: Value,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            source_platform: source_platform.into(),
            target_platform: target_platform.into(),
            data,
            options: TransformOptions::default(),
            request_id: None,
        }
    }

    /// SSOT to Zoom.
    pub fn ssot_to_zoom(entity_type: impl Into<String>, data: Value) -> Self {
        Self::new(entity_type, Platform::Ssot.as_str(), Platform::Zoom.as_str(), data)
    }

    /// Raw vendor export to Zoom.
    pub fn raw_to_zoom(
        entity_type: impl Into<String>,
        raw_platform: impl Into<String>,
        data: Value,
    ) -> Self {
        Self::new(entity_type, raw_platform, Platform::Zoom.as_str(), data)
    }

    /// Zoom to SSOT.
    pub fn zoom_to_ssot(entity_type: impl Into<String>, data: Value) -> Self {
        Self::new(entity_type, Platform::Zoom.as_str(), Platform::Ssot.as_str(), data)
    }

    /// Request for a named method; `raw_platform` only matters for
    /// [`TransformMethod::RawToZoom`].
    pub fn for_method(
        method: TransformMethod,
        entity_type: impl Into<String>,
        raw_platform: Platform,
        data: Value,
    ) -> Self {
        let (source, target) = method.platforms(raw_platform);
        Self::new(entity_type, source.as_str(), target.as_str(), data)
    }

    pub fn with_options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
