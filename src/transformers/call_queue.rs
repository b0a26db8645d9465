//! Call queue transformers.
//!
//! Business hours arrive as a weekly range object keyed by day name (or, in
//! Dialpad exports, as one `{day}_hours` pair per day) and leave as Zoom
//! `custom_hours_settings` entries.

use super::{EntityTransformer, StructuralStep};
use crate::mapping::converters::{as_integer, scalar_text};
use crate::mapping::{MappingRule, ValueConverter};
use crate::platform::{EntityType, Platform};
use serde_json::{Map, Value, json};

/// Day names with their Zoom weekday numbers, in week order.
static WEEKDAYS: [(&str, i64); 7] = [
    ("sunday", 1),
    ("monday", 2),
    ("tuesday", 3),
    ("wednesday", 4),
    ("thursday", 5),
    ("friday", 6),
    ("saturday", 7),
];

/// Zoom `custom_hours_settings` type for a custom time window.
const CUSTOM_HOURS_TYPE: i64 = 2;

/// First extension handed out to call queues without one.
pub const GENERATED_EXTENSION_BASE: u16 = 200;

pub static SSOT_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::CallQueue,
    source: Platform::Ssot,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::copy("description", "description"),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::convert("max_wait_time", "max_wait_time", ValueConverter::Integer),
    ],
    steps: &[StructuralStep::WeeklyHoursToZoom {
        sources: &["business_hours.weekly_ranges"],
        target: "custom_hours_settings",
    }],
    required: &["name"],
};

pub static RINGCENTRAL_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::CallQueue,
    source: Platform::RingCentral,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extensionNumber", "extension_number", ValueConverter::Text),
        MappingRule::convert("site.id", "site_id", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::convert(
            "serviceLevelSettings.maxWaitTime",
            "max_wait_time",
            ValueConverter::Integer,
        ),
    ],
    steps: &[StructuralStep::WeeklyHoursToZoom {
        sources: &[
            "business_hours.0.schedule.weeklyRanges",
            "business_hours.schedule.weeklyRanges",
            "businessHours.schedule.weeklyRanges",
        ],
        target: "custom_hours_settings",
    }],
    required: &["name"],
};

/// Dialpad call centers. The office id doubles as the Zoom site id.
pub static DIALPAD_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::CallQueue,
    source: Platform::Dialpad,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extension", "extension_number", ValueConverter::Text),
        MappingRule::convert("office_id", "site_id", ValueConverter::Text),
        MappingRule::convert("state", "status", ValueConverter::Status),
    ],
    steps: &[
        StructuralStep::DayHoursToZoom {
            target: "custom_hours_settings",
        },
        StructuralStep::GeneratedExtension {
            sources: &["id"],
            base: GENERATED_EXTENSION_BASE,
            target: "extension_number",
        },
    ],
    required: &["name"],
};

pub static ZOOM_TO_SSOT: EntityTransformer = EntityTransformer {
    entity_type: EntityType::CallQueue,
    source: Platform::Zoom,
    target: Platform::Ssot,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::copy("description", "description"),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::convert("status", "status", ValueConverter::Status),
        MappingRule::convert("max_wait_time", "max_wait_time", ValueConverter::Integer),
    ],
    steps: &[StructuralStep::WeeklyHoursFromZoom {
        source: "custom_hours_settings",
        target: "business_hours.weekly_ranges",
    }],
    required: &["name"],
};

/// Flatten `{monday: [{from, to}], ...}` into Zoom custom hours in week
/// order. Unknown day names and ranges without both ends are skipped.
pub(super) fn weekly_ranges_to_zoom(input: &Value) -> Option<Value> {
    let days = input.as_object()?;
    let mut settings = Vec::new();

    for (day, weekday) in WEEKDAYS {
        let Some(ranges) = days
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(day))
            .map(|(_, ranges)| ranges)
        else {
            continue;
        };
        let ranges = match ranges {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            single @ Value::Object(_) => vec![single],
            _ => continue,
        };
        for range in ranges {
            let (Some(from), Some(to)) = (
                range.get("from").and_then(scalar_text),
                range.get("to").and_then(scalar_text),
            ) else {
                continue;
            };
            settings.push(json!({
                "weekday": weekday,
                "from": from,
                "to": to,
                "type": CUSTOM_HOURS_TYPE,
            }));
        }
    }

    if settings.is_empty() {
        None
    } else {
        Some(Value::Array(settings))
    }
}

/// Collect Dialpad `{day}_hours: [from, to]` pairs into a weekly range
/// object, with the source keys that contributed.
pub(super) fn day_hours_to_weekly(source: &Map<String, Value>) -> Option<(Vec<String>, Value)> {
    let mut keys = Vec::new();
    let mut weekly = Map::new();

    for (day, _) in WEEKDAYS {
        let key = format!("{}_hours", day);
        let Some(Value::Array(pair)) = source.get(&key) else {
            continue;
        };
        let (Some(from), Some(to)) = (
            pair.first().and_then(scalar_text),
            pair.get(1).and_then(scalar_text),
        ) else {
            continue;
        };
        weekly.insert(day.to_string(), json!([{"from": from, "to": to}]));
        keys.push(key);
    }

    if keys.is_empty() {
        None
    } else {
        Some((keys, Value::Object(weekly)))
    }
}

/// Group Zoom custom hours back into a weekly range object.
pub(super) fn weekly_ranges_from_zoom(input: &Value) -> Option<Value> {
    let mut days = Map::new();
    for setting in input.as_array()? {
        let Some(day) = setting
            .get("weekday")
            .and_then(as_integer)
            .and_then(|n| WEEKDAYS.iter().find(|(_, weekday)| *weekday == n))
            .map(|(day, _)| *day)
        else {
            continue;
        };
        let (Some(from), Some(to)) = (
            setting.get("from").and_then(scalar_text),
            setting.get("to").and_then(scalar_text),
        ) else {
            continue;
        };
        let entry = days
            .entry(day.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(ranges) = entry {
            ranges.push(json!({"from": from, "to": to}));
        }
    }

    if days.is_empty() {
        None
    } else {
        Some(Value::Object(days))
    }
}
