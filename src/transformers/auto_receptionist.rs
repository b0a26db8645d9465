//! Auto receptionist transformers.

use super::{EntityTransformer, StructuralStep};
use crate::mapping::converters::scalar_text;
use crate::mapping::{MappingRule, ValueConverter};
use crate::platform::{EntityType, Platform};
use serde_json::{Value, json};
use sha2::{Digest, Sha256};

/// Longest auto receptionist name Zoom accepts.
pub const NAME_MAX_LEN: usize = 30;

/// First extension handed out to auto receptionists without one.
pub const GENERATED_EXTENSION_BASE: u16 = 300;

pub static SSOT_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::AutoReceptionist,
    source: Platform::Ssot,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::convert("name", "name", ValueConverter::Truncate(NAME_MAX_LEN)),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::copy("audio_prompt_language", "audio_prompt_language"),
        MappingRule::convert(
            "business_hours_enabled",
            "business_hours_enabled",
            ValueConverter::Boolean,
        ),
    ],
    steps: &[],
    required: &["name"],
};

/// RingCentral exports sometimes flatten the site reference into a literal
/// `"site.id"` key; path lookup matches that before the nested form.
pub static RINGCENTRAL_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::AutoReceptionist,
    source: Platform::RingCentral,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::convert("name", "name", ValueConverter::Truncate(NAME_MAX_LEN)),
        MappingRule::convert("extensionNumber", "extension_number", ValueConverter::Text),
        MappingRule::convert("site.id", "site_id", ValueConverter::Text),
        MappingRule::convert(
            "regionalSettings.timezone",
            "timezone",
            ValueConverter::TimezoneToIana,
        ),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::copy(
            "regionalSettings.greetingLanguage.localeCode",
            "audio_prompt_language",
        ),
    ],
    steps: &[],
    required: &["name"],
};

/// Each Dialpad office becomes one auto receptionist on the Zoom site that
/// carries the office id.
pub static DIALPAD_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::AutoReceptionist,
    source: Platform::Dialpad,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::convert("office_id", "id", ValueConverter::Text),
        MappingRule::convert("name", "name", ValueConverter::Truncate(NAME_MAX_LEN)),
        MappingRule::convert("extension", "extension_number", ValueConverter::Text),
        MappingRule::convert("id", "site_id", ValueConverter::Text),
        MappingRule::convert("office_id", "site_id", ValueConverter::Text),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::convert("state", "status", ValueConverter::Status),
    ],
    steps: &[StructuralStep::GeneratedExtension {
        sources: &["id", "office_id"],
        base: GENERATED_EXTENSION_BASE,
        target: "extension_number",
    }],
    required: &["name"],
};

pub static ZOOM_TO_SSOT: EntityTransformer = EntityTransformer {
    entity_type: EntityType::AutoReceptionist,
    source: Platform::Zoom,
    target: Platform::Ssot,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::copy("audio_prompt_language", "audio_prompt_language"),
        MappingRule::convert(
            "business_hours_enabled",
            "business_hours_enabled",
            ValueConverter::Boolean,
        ),
    ],
    steps: &[],
    required: &["name"],
};

/// Extension in `[base, base + 100)` picked by hashing the record id with
/// the base, so the same record always lands on the same number.
pub(super) fn generated_extension(id: &Value, base: u16) -> Option<Value> {
    let id = scalar_text(id)?;
    let digest = Sha256::digest(format!("{}_{}", id, base).as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let offset = u64::from_be_bytes(prefix) % 100;
    Some(json!((u64::from(base) + offset).to_string()))
}
