//! User transformers.
//!
//! The Zoom user shape is flat: `email`, `first_name`, `last_name`,
//! `display_name`, `type`, `status`, `timezone`, `dept`, `job_title`,
//! `company`, `phone_number`, `phone_numbers`, `extension_number`, `site_id`
//! and `language`.
//!
//! `display_name` is derived from the mapped names when the source has none,
//! except on the RingCentral path, which only carries a vendor-supplied name.

use super::{EntityTransformer, StructuralStep};
use crate::mapping::converters::scalar_text;
use crate::mapping::{Conversion, Literal, MappingRule, ValueConverter};
use crate::platform::{EntityType, Platform};
use log::debug;
use serde_json::{Map, Value, json};

const DISPLAY_NAME_STEP: StructuralStep = StructuralStep::DisplayName {
    first: "first_name",
    last: "last_name",
    target: "display_name",
};

pub static SSOT_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::User,
    source: Platform::Ssot,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("email", "email"),
        MappingRule::copy("first_name", "first_name"),
        MappingRule::copy("firstName", "first_name"),
        MappingRule::copy("last_name", "last_name"),
        MappingRule::copy("lastName", "last_name"),
        MappingRule::convert("display_name", "display_name", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::convert("role", "type", ValueConverter::UserTypeToZoom),
        MappingRule::convert("user_type", "type", ValueConverter::UserTypeToZoom)
            .or_default(Literal::Int(1)),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::copy("department", "dept"),
        MappingRule::copy("job_title", "job_title"),
        MappingRule::copy("company", "company"),
        MappingRule::convert("phone_number", "phone_number", ValueConverter::Text),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::copy("language", "language"),
    ],
    steps: &[
        StructuralStep::PhoneNumbersToZoom {
            source: "phone_numbers",
            target: "phone_numbers",
        },
        DISPLAY_NAME_STEP,
    ],
    required: &[],
};

pub static RINGCENTRAL_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::User,
    source: Platform::RingCentral,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("contact.email", "email"),
        MappingRule::copy("email", "email"),
        MappingRule::copy("contact.firstName", "first_name"),
        MappingRule::copy("firstName", "first_name"),
        MappingRule::copy("contact.lastName", "last_name"),
        MappingRule::copy("lastName", "last_name"),
        MappingRule::convert("name", "display_name", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::convert("type", "type", ValueConverter::UserTypeToZoom)
            .or_default(Literal::Int(1)),
        MappingRule::convert(
            "regionalSettings.timezone",
            "timezone",
            ValueConverter::TimezoneToIana,
        ),
        MappingRule::copy("contact.department", "dept"),
        MappingRule::copy("contact.jobTitle", "job_title"),
        MappingRule::copy("contact.company", "company"),
        MappingRule::convert("contact.businessPhone", "phone_number", ValueConverter::Text),
        MappingRule::convert("extensionNumber", "extension_number", ValueConverter::Text),
        MappingRule::convert("site.id", "site_id", ValueConverter::Text),
        MappingRule::copy("regionalSettings.language.localeCode", "language"),
    ],
    steps: &[],
    required: &[],
};

/// Dialpad users list their addresses and numbers as arrays; the first entry
/// of each is the primary one.
pub static DIALPAD_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::User,
    source: Platform::Dialpad,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("emails.0", "email"),
        MappingRule::copy("email", "email"),
        MappingRule::copy("first_name", "first_name"),
        MappingRule::copy("last_name", "last_name"),
        MappingRule::convert("display_name", "display_name", ValueConverter::Text),
        MappingRule::convert("state", "status", ValueConverter::Status),
        MappingRule::convert("is_admin", "type", ValueConverter::AdminFlag)
            .or_default(Literal::Int(1)),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::copy("job_title", "job_title"),
        MappingRule::convert("phone_numbers.0", "phone_number", ValueConverter::Text),
        MappingRule::convert("extension", "extension_number", ValueConverter::Text),
        MappingRule::convert("office_id", "site_id", ValueConverter::Text),
        MappingRule::copy("language", "language"),
    ],
    steps: &[DISPLAY_NAME_STEP],
    required: &[],
};

pub static ZOOM_TO_SSOT: EntityTransformer = EntityTransformer {
    entity_type: EntityType::User,
    source: Platform::Zoom,
    target: Platform::Ssot,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("email", "email"),
        MappingRule::copy("first_name", "first_name"),
        MappingRule::copy("last_name", "last_name"),
        MappingRule::convert("display_name", "display_name", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::convert("type", "role", ValueConverter::ZoomTypeToRole),
        MappingRule::convert("timezone", "timezone", ValueConverter::TimezoneToIana),
        MappingRule::copy("dept", "department"),
        MappingRule::copy("job_title", "job_title"),
        MappingRule::copy("company", "company"),
        MappingRule::convert("phone_number", "phone_number", ValueConverter::Text),
        MappingRule::copy("phone_numbers", "phone_numbers"),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::copy("language", "language"),
    ],
    steps: &[],
    required: &[],
};

/// `"{first} {last}"`, or whichever of the two is non-blank.
pub(super) fn display_name(first: Option<&Value>, last: Option<&Value>) -> Option<Value> {
    fn part(value: Option<&Value>) -> Option<&str> {
        value
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
    let name = match (part(first), part(last)) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => {
            debug!("No first or last name to build a display name from");
            return None;
        }
    };
    Some(json!(name))
}

/// Normalize `[{type, number}]` entries; entries without a number are dropped.
pub(super) fn phone_numbers_to_zoom(input: &Value) -> Option<Value> {
    let entries = input.as_array()?;
    let formatted: Vec<Value> = entries
        .iter()
        .filter_map(|entry| {
            let number = entry
                .get("number")
                .or_else(|| entry.get("phone_number"))
                .and_then(scalar_text)?;
            let label = entry.get("type").cloned().unwrap_or(Value::Null);
            let kind = match ValueConverter::PhoneType.convert(&label) {
                Conversion::Mapped(kind) | Conversion::Defaulted(kind) => kind,
                Conversion::Skipped => json!("office"),
            };
            let mut formatted = Map::new();
            formatted.insert("number".to_string(), json!(number));
            formatted.insert("type".to_string(), kind);
            Some(Value::Object(formatted))
        })
        .collect();

    if formatted.is_empty() {
        None
    } else {
        Some(Value::Array(formatted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformers::TransformOptions;

    #[test]
    fn test_ringcentral_minimal_user() {
        let record = json!({"firstName": "Test", "lastName": "User", "status": "Active"});
        let result = RINGCENTRAL_TO_ZOOM
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(
            result.data,
            json!({"first_name": "Test", "last_name": "User", "status": "active", "type": 1})
        );
        assert!(result.dropped_fields.is_empty());
    }

    #[test]
    fn test_ringcentral_contact_block() {
        let record = json!({
            "id": 12345,
            "type": "DigitalUser",
            "status": "Active",
            "contact": {
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "department": "Engineering",
                "jobTitle": "Analyst",
                "company": "Analytical Engines"
            },
            "regionalSettings": {"timezone": {"id": "58"}},
            "extensionNumber": 101
        });
        let result = RINGCENTRAL_TO_ZOOM
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(result.data["id"], json!("12345"));
        assert_eq!(result.data["email"], json!("ada@example.com"));
        assert_eq!(result.data["type"], json!(2));
        assert_eq!(result.data["timezone"], json!("America/New_York"));
        assert_eq!(result.data["dept"], json!("Engineering"));
        assert_eq!(result.data["job_title"], json!("Analyst"));
        assert_eq!(result.data["company"], json!("Analytical Engines"));
        assert_eq!(result.data["extension_number"], json!("101"));
    }

    #[test]
    fn test_ssot_roles_map_to_zoom_types() {
        let admin = json!({"email": "admin@example.com", "role": "admin"});
        let result = SSOT_TO_ZOOM
            .transform(&admin, &TransformOptions::default())
            .unwrap();
        assert_eq!(result.data["type"], json!(2));

        let unspecified = json!({"email": "incomplete@example.com"});
        let result = SSOT_TO_ZOOM
            .transform(&unspecified, &TransformOptions::default())
            .unwrap();
        assert_eq!(result.data, json!({"email": "incomplete@example.com", "type": 1}));
    }

    #[test]
    fn test_display_name_is_derived() {
        let record = json!({"email": "kj@example.com", "first_name": "Katherine", "last_name": "Johnson"});
        let result = SSOT_TO_ZOOM
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(result.data["display_name"], json!("Katherine Johnson"));

        let record = json!({"first_name": "Cher", "last_name": "  ", "display_name": "CHER"});
        let result = SSOT_TO_ZOOM
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(result.data["display_name"], json!("CHER"));

        assert_eq!(display_name(None, Some(&json!("Hopper"))), Some(json!("Hopper")));
        assert_eq!(display_name(Some(&json!(" ")), None), None);
    }

    #[test]
    fn test_dialpad_user() {
        let record = json!({
            "id": "5712345678901234",
            "first_name": "Dorothy",
            "last_name": "Vaughan",
            "emails": ["dorothy@example.com", "dv@example.org"],
            "phone_numbers": ["+15125550100"],
            "state": "active",
            "is_admin": true,
            "timezone": "US/Pacific",
            "office_id": 4400,
            "extension": "120"
        });
        let result = DIALPAD_TO_ZOOM
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(
            result.data,
            json!({
                "id": "5712345678901234",
                "email": "dorothy@example.com",
                "first_name": "Dorothy",
                "last_name": "Vaughan",
                "display_name": "Dorothy Vaughan",
                "status": "active",
                "type": 2,
                "timezone": "America/Los_Angeles",
                "phone_number": "+15125550100",
                "extension_number": "120",
                "site_id": "4400"
            })
        );
        assert!(result.dropped_fields.is_empty());
        assert!(result.defaulted_fields.is_empty());
    }

    #[test]
    fn test_phone_numbers_are_normalized() {
        let record = json!({
            "email": "a@example.com",
            "phone_numbers": [
                {"type": "work", "number": "+13035550100"},
                {"type": "cell", "number": "+13035550101"},
                {"type": "pager"}
            ]
        });
        let result = SSOT_TO_ZOOM
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(
            result.data["phone_numbers"],
            json!([
                {"number": "+13035550100", "type": "office"},
                {"number": "+13035550101", "type": "mobile"}
            ])
        );
    }

    #[test]
    fn test_zoom_to_ssot_renames() {
        let record = json!({"email": "a@example.com", "type": 99, "dept": "Ops", "status": "pending"});
        let result = ZOOM_TO_SSOT
            .transform(&record, &TransformOptions::default())
            .unwrap();
        assert_eq!(result.data["role"], json!("other"));
        assert_eq!(result.data["department"], json!("Ops"));
        assert_eq!(result.data["status"], json!("inactive"));
        assert_eq!(result.defaulted_fields, vec!["status".to_string()]);
    }
}
