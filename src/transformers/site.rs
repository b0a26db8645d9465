//! Site transformers.
//!
//! Zoom sites carry their address as `default_emergency_address`; the SSOT
//! schema keeps it flat. Street and city lines bound for Zoom are
//! normalized with [`ValueConverter::AddressLine`].

use super::{EntityTransformer, StructuralStep};
use crate::mapping::{Literal, MappingRule, ValueConverter, lookup};
use crate::platform::{EntityType, Platform};
use serde_json::Value;

/// Longest site code Zoom accepts.
pub const SITE_CODE_MAX_LEN: usize = 20;

const SITE_CODE_STEP: StructuralStep = StructuralStep::SiteCode {
    source: "name",
    target: "site_code",
};

pub static SSOT_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Site,
    source: Platform::Ssot,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("site_code", "site_code", ValueConverter::Uppercase),
        MappingRule::convert(
            "street_address",
            "default_emergency_address.address_line1",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "street_address_2",
            "default_emergency_address.address_line2",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "city",
            "default_emergency_address.city",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "state_province",
            "default_emergency_address.state_code",
            ValueConverter::Uppercase,
        ),
        MappingRule::convert("postal_code", "default_emergency_address.zip", ValueConverter::Text),
        MappingRule::convert(
            "country",
            "default_emergency_address.country",
            ValueConverter::CountryToIso,
        )
        .or_default(Literal::Str(lookup::DEFAULT_COUNTRY)),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
    ],
    steps: &[SITE_CODE_STEP],
    required: &["name"],
};

pub static RINGCENTRAL_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Site,
    source: Platform::RingCentral,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("code", "site_code", ValueConverter::Uppercase),
        MappingRule::convert(
            "businessAddress.street",
            "default_emergency_address.address_line1",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "address.street",
            "default_emergency_address.address_line1",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "businessAddress.street2",
            "default_emergency_address.address_line2",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "address.street2",
            "default_emergency_address.address_line2",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "businessAddress.city",
            "default_emergency_address.city",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "address.city",
            "default_emergency_address.city",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "businessAddress.state",
            "default_emergency_address.state_code",
            ValueConverter::Uppercase,
        ),
        MappingRule::convert(
            "address.state",
            "default_emergency_address.state_code",
            ValueConverter::Uppercase,
        ),
        MappingRule::convert("businessAddress.zip", "default_emergency_address.zip", ValueConverter::Text),
        MappingRule::convert("address.zip", "default_emergency_address.zip", ValueConverter::Text),
        MappingRule::convert(
            "businessAddress.country",
            "default_emergency_address.country",
            ValueConverter::CountryToIso,
        ),
        MappingRule::convert(
            "address.country",
            "default_emergency_address.country",
            ValueConverter::CountryToIso,
        )
        .or_default(Literal::Str(lookup::DEFAULT_COUNTRY)),
        MappingRule::convert(
            "regionalSettings.timezone",
            "timezone",
            ValueConverter::TimezoneToIana,
        ),
        MappingRule::convert("extensionNumber", "extension_number", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
    ],
    steps: &[SITE_CODE_STEP],
    required: &["name"],
};

/// Dialpad offices with their `e911_address` block.
pub static DIALPAD_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Site,
    source: Platform::Dialpad,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::convert("office_id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert(
            "e911_address.address",
            "default_emergency_address.address_line1",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "e911_address.address2",
            "default_emergency_address.address_line2",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "e911_address.city",
            "default_emergency_address.city",
            ValueConverter::AddressLine,
        ),
        MappingRule::convert(
            "e911_address.state",
            "default_emergency_address.state_code",
            ValueConverter::Uppercase,
        ),
        MappingRule::convert("e911_address.zip", "default_emergency_address.zip", ValueConverter::Text),
        MappingRule::convert(
            "e911_address.country",
            "default_emergency_address.country",
            ValueConverter::CountryToIso,
        )
        .or_default(Literal::Str(lookup::DEFAULT_COUNTRY)),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::convert("state", "status", ValueConverter::Status),
    ],
    steps: &[SITE_CODE_STEP],
    required: &["name"],
};

pub static ZOOM_TO_SSOT: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Site,
    source: Platform::Zoom,
    target: Platform::Ssot,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::copy("site_code", "site_code"),
        MappingRule::copy("default_emergency_address.address_line1", "street_address"),
        MappingRule::copy("default_emergency_address.address_line2", "street_address_2"),
        MappingRule::copy("default_emergency_address.city", "city"),
        MappingRule::copy("default_emergency_address.state_code", "state_province"),
        MappingRule::convert("default_emergency_address.zip", "postal_code", ValueConverter::Text),
        MappingRule::copy("default_emergency_address.country", "country"),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
    ],
    steps: &[],
    required: &["name"],
};

/// Derive a site code from a site name.
///
/// Uppercase, spaces and dashes become underscores, anything outside
/// `[A-Z0-9_]` is removed, and the result is cut to
/// [`SITE_CODE_MAX_LEN`] characters.
pub fn site_code(name: &Value) -> Option<Value> {
    let code: String = name
        .as_str()?
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_uppercase() })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .take(SITE_CODE_MAX_LEN)
        .collect();

    if code.is_empty() {
        None
    } else {
        Some(Value::String(code))
    }
}
