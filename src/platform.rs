//! Closed vocabularies for platforms, entity types and transformation methods.
//!
//! Every string coming from a caller is parsed into one of these enums before
//! the router dispatches, so an unsupported value is rejected with the exact
//! list of accepted values.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Data shape a record is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Canonical single-source-of-truth schema
    Ssot,
    /// Raw RingCentral export payloads
    #[serde(rename = "ringcentral")]
    RingCentral,
    /// Raw Dialpad export payloads
    Dialpad,
    /// Zoom Phone API schema
    Zoom,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Ssot,
        Platform::RingCentral,
        Platform::Dialpad,
        Platform::Zoom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ssot => "ssot",
            Platform::RingCentral => "ringcentral",
            Platform::Dialpad => "dialpad",
            Platform::Zoom => "zoom",
        }
    }

    /// Whether this platform is a raw vendor export.
    pub fn is_raw_vendor(&self) -> bool {
        matches!(self, Platform::RingCentral | Platform::Dialpad)
    }

    pub fn allowed_values() -> Vec<String> {
        Self::ALL.iter().map(|p| p.as_str().to_string()).collect()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ssot" => Ok(Platform::Ssot),
            "ringcentral" | "ring_central" | "rc" => Ok(Platform::RingCentral),
            "dialpad" => Ok(Platform::Dialpad),
            "zoom" => Ok(Platform::Zoom),
            _ => Err(ValidationError::unsupported_platform(
                s,
                Self::allowed_values(),
            )),
        }
    }
}

/// Domain object being transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Meeting,
    Recording,
    Contact,
    Account,
    Group,
    Site,
    CallQueue,
    Ivr,
    AutoReceptionist,
}

impl EntityType {
    pub const ALL: [EntityType; 10] = [
        EntityType::User,
        EntityType::Meeting,
        EntityType::Recording,
        EntityType::Contact,
        EntityType::Account,
        EntityType::Group,
        EntityType::Site,
        EntityType::CallQueue,
        EntityType::Ivr,
        EntityType::AutoReceptionist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::User => "user",
            EntityType::Meeting => "meeting",
            EntityType::Recording => "recording",
            EntityType::Contact => "contact",
            EntityType::Account => "account",
            EntityType::Group => "group",
            EntityType::Site => "site",
            EntityType::CallQueue => "call_queue",
            EntityType::Ivr => "ivr",
            EntityType::AutoReceptionist => "auto_receptionist",
        }
    }

    pub fn allowed_values() -> Vec<String> {
        Self::ALL.iter().map(|e| e.as_str().to_string()).collect()
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == normalized)
            .ok_or_else(|| ValidationError::unsupported_entity_type(s, Self::allowed_values()))
    }
}

/// Named transformation direction used by the MCP `transform` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMethod {
    SsotToZoom,
    RawToZoom,
    ZoomToSsot,
}

impl TransformMethod {
    pub const ALL: [TransformMethod; 3] = [
        TransformMethod::SsotToZoom,
        TransformMethod::RawToZoom,
        TransformMethod::ZoomToSsot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransformMethod::SsotToZoom => "ssot_to_zoom",
            TransformMethod::RawToZoom => "raw_to_zoom",
            TransformMethod::ZoomToSsot => "zoom_to_ssot",
        }
    }

    /// Resolve the (source, target) pair; `raw_platform` names the vendor
    /// for [`TransformMethod::RawToZoom`] and is ignored otherwise.
    pub fn platforms(&self, raw_platform: Platform) -> (Platform, Platform) {
        match self {
            TransformMethod::SsotToZoom => (Platform::Ssot, Platform::Zoom),
            TransformMethod::RawToZoom => (raw_platform, Platform::Zoom),
            TransformMethod::ZoomToSsot => (Platform::Zoom, Platform::Ssot),
        }
    }

    pub fn allowed_values() -> Vec<String> {
        Self::ALL.iter().map(|m| m.as_str().to_string()).collect()
    }
}

impl fmt::Display for TransformMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| ValidationError::unsupported_method(s, Self::allowed_values()))
    }
}
