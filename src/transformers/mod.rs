//! Entity transformers and the transformer registry.
//!
//! Each entity module declares one static [`EntityTransformer`] per
//! supported direction: an ordered rule list, optional structural steps for
//! values that are not simple renames, and the source fields that must be
//! present. [`find_transformer`] is the registry; it matches exhaustively on
//! [`EntityType`] so a new entity type has to be wired in explicitly.

pub mod auto_receptionist;
pub mod call_queue;
pub mod ivr;
pub mod site;
mod steps;
pub mod user;

pub use steps::StructuralStep;

use crate::error::{TransformResult, ValidationError};
use crate::mapping::{MappingRule, apply_rules, path};
use crate::platform::{EntityType, Platform};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-controlled transformation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Copy source fields that no rule reads into the output unchanged
    pub pass_through: bool,
}

impl TransformOptions {
    pub fn pass_through() -> Self {
        Self { pass_through: true }
    }
}

/// A single transformed record with its mapping statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedRecord {
    pub data: Value,
    pub rules_applied: usize,
    pub dropped_fields: Vec<String>,
    pub defaulted_fields: Vec<String>,
}

/// Mapping definition for one entity type in one direction.
#[derive(Debug)]
pub struct EntityTransformer {
    pub entity_type: EntityType,
    pub source: Platform,
    pub target: Platform,
    pub rules: &'static [MappingRule],
    pub steps: &'static [StructuralStep],
    /// Source paths that must hold a non-empty value
    pub required: &'static [&'static str],
}

impl EntityTransformer {
    /// `"{source}_to_{target}"`
    pub fn transformation_type(&self) -> String {
        format!("{}_to_{}", self.source, self.target)
    }

    /// Transform one record.
    pub fn transform(
        &self,
        record: &Value,
        options: &TransformOptions,
    ) -> TransformResult<TransformedRecord> {
        let source = record.as_object().ok_or_else(|| {
            ValidationError::invalid_payload(format!(
                "{} record must be a JSON object",
                self.entity_type
            ))
        })?;

        for field in self.required {
            let missing = match path::lookup(source, field) {
                None => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            if missing {
                return Err(ValidationError::missing_required(self.entity_type.as_str(), *field).into());
            }
        }

        let context = format!("{} {}", self.entity_type, self.transformation_type());
        let mut outcome = apply_rules(source, self.rules, &context);
        for step in self.steps {
            step.apply(source, &mut outcome, &context);
        }

        let dropped_fields = if options.pass_through {
            outcome.pass_through(source);
            Vec::new()
        } else {
            outcome.dropped_fields(source)
        };

        Ok(TransformedRecord {
            data: Value::Object(outcome.record),
            rules_applied: outcome.rules_applied,
            dropped_fields,
            defaulted_fields: outcome.defaulted,
        })
    }
}

/// Look up the transformer for an entity type and platform pair.
pub fn find_transformer(
    entity_type: EntityType,
    source: Platform,
    target: Platform,
) -> Option<&'static EntityTransformer> {
    match (source, target) {
        (Platform::Ssot, Platform::Zoom) => ssot_to_zoom(entity_type),
        (Platform::RingCentral, Platform::Zoom) => ringcentral_to_zoom(entity_type),
        (Platform::Dialpad, Platform::Zoom) => dialpad_to_zoom(entity_type),
        (Platform::Zoom, Platform::Ssot) => zoom_to_ssot(entity_type),
        _ => None,
    }
}

fn ssot_to_zoom(entity_type: EntityType) -> Option<&'static EntityTransformer> {
    match entity_type {
        EntityType::User => Some(&user::SSOT_TO_ZOOM),
        EntityType::Site => Some(&site::SSOT_TO_ZOOM),
        EntityType::CallQueue => Some(&call_queue::SSOT_TO_ZOOM),
        EntityType::AutoReceptionist => Some(&auto_receptionist::SSOT_TO_ZOOM),
        EntityType::Ivr => Some(&ivr::SSOT_TO_ZOOM),
        EntityType::Meeting
        | EntityType::Recording
        | EntityType::Contact
        | EntityType::Account
        | EntityType::Group => None,
    }
}

fn ringcentral_to_zoom(entity_type: EntityType) -> Option<&'static EntityTransformer> {
    match entity_type {
        EntityType::User => Some(&user::RINGCENTRAL_TO_ZOOM),
        EntityType::Site => Some(&site::RINGCENTRAL_TO_ZOOM),
        EntityType::CallQueue => Some(&call_queue::RINGCENTRAL_TO_ZOOM),
        EntityType::AutoReceptionist => Some(&auto_receptionist::RINGCENTRAL_TO_ZOOM),
        EntityType::Ivr => Some(&ivr::RINGCENTRAL_TO_ZOOM),
        EntityType::Meeting
        | EntityType::Recording
        | EntityType::Contact
        | EntityType::Account
        | EntityType::Group => None,
    }
}

fn dialpad_to_zoom(entity_type: EntityType) -> Option<&'static EntityTransformer> {
    match entity_type {
        EntityType::User => Some(&user::DIALPAD_TO_ZOOM),
        EntityType::Site => Some(&site::DIALPAD_TO_ZOOM),
        EntityType::CallQueue => Some(&call_queue::DIALPAD_TO_ZOOM),
        EntityType::AutoReceptionist => Some(&auto_receptionist::DIALPAD_TO_ZOOM),
        EntityType::Ivr => Some(&ivr::DIALPAD_TO_ZOOM),
        EntityType::Meeting
        | EntityType::Recording
        | EntityType::Contact
        | EntityType::Account
        | EntityType::Group => None,
    }
}

fn zoom_to_ssot(entity_type: EntityType) -> Option<&'static EntityTransformer> {
    match entity_type {
        EntityType::User => Some(&user::ZOOM_TO_SSOT),
        EntityType::Site => Some(&site::ZOOM_TO_SSOT),
        EntityType::CallQueue => Some(&call_queue::ZOOM_TO_SSOT),
        EntityType::AutoReceptionist => Some(&auto_receptionist::ZOOM_TO_SSOT),
        EntityType::Ivr => Some(&ivr::ZOOM_TO_SSOT),
        EntityType::Meeting
        | EntityType::Recording
        | EntityType::Contact
        | EntityType::Account
        | EntityType::Group => None,
    }
}

/// Every registered transformer, ordered by platform pair then entity type.
pub fn registered_transformers() -> Vec<&'static EntityTransformer> {
    let mut registered = Vec::new();
    for source in Platform::ALL {
        for target in Platform::ALL {
            for entity_type in EntityType::ALL {
                if let Some(transformer) = find_transformer(entity_type, source, target) {
                    registered.push(transformer);
                }
            }
        }
    }
    registered
}

/// Human-readable `"{entity}: {source} -> {target}"` entries for errors.
pub fn available_combinations() -> Vec<String> {
    registered_transformers()
        .iter()
        .map(|t| format!("{}: {} -> {}", t.entity_type, t.source, t.target))
        .collect()
}
