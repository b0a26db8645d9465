//! Value converters applied by mapping rules.
//!
//! Converters are total over JSON input: a recognized value maps to its
//! destination form, an unrecognized enumerated value falls back to the
//! documented default, and a value of the wrong shape is skipped.

use super::lookup;
use serde_json::{Value, json};

/// Result of running a converter over a single source value.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Input was recognized
    Mapped(Value),
    /// Input was not recognized; the documented default was substituted
    Defaulted(Value),
    /// Input has a shape the converter cannot use; the field is dropped
    Skipped,
}

/// Closed set of value converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueConverter {
    /// Vendor or SSOT status to `active`/`inactive`; unknown is `inactive`
    Status,
    /// Role or vendor extension type to Zoom user `type`; unknown is 1
    UserTypeToZoom,
    /// Zoom user `type` to SSOT role; unknown is `user`
    ZoomTypeToRole,
    /// Timezone id, name or `{id, name}` object to an IANA zone
    TimezoneToIana,
    /// Country name to ISO alpha-2; unknown names pass through
    CountryToIso,
    /// Phone number label to Zoom phone type; unknown is `office`
    PhoneType,
    /// Street or city line, title-cased with street abbreviations capitalized
    AddressLine,
    /// Admin flag to Zoom user `type`; a non-boolean is 1
    AdminFlag,
    Text,
    Integer,
    Boolean,
    Uppercase,
    /// Keep at most the given number of characters
    Truncate(usize),
}

impl ValueConverter {
    pub fn name(&self) -> &'static str {
        match self {
            ValueConverter::Status => "status",
            ValueConverter::UserTypeToZoom => "user_type_to_zoom",
            ValueConverter::ZoomTypeToRole => "zoom_type_to_role",
            ValueConverter::TimezoneToIana => "timezone_to_iana",
            ValueConverter::CountryToIso => "country_to_iso",
            ValueConverter::PhoneType => "phone_type",
            ValueConverter::AddressLine => "address_line",
            ValueConverter::AdminFlag => "admin_flag",
            ValueConverter::Text => "text",
            ValueConverter::Integer => "integer",
            ValueConverter::Boolean => "boolean",
            ValueConverter::Uppercase => "uppercase",
            ValueConverter::Truncate(_) => "truncate",
        }
    }

    pub fn convert(&self, value: &Value) -> Conversion {
        match self {
            ValueConverter::Status => convert_status(value),
            ValueConverter::UserTypeToZoom => convert_user_type(value),
            ValueConverter::ZoomTypeToRole => convert_zoom_type(value),
            ValueConverter::TimezoneToIana => convert_timezone(value),
            ValueConverter::CountryToIso => convert_country(value),
            ValueConverter::PhoneType => match value.as_str() {
                Some(label) => match lookup::zoom_phone_type(label) {
                    Some(kind) => Conversion::Mapped(json!(kind)),
                    None => Conversion::Defaulted(json!(lookup::DEFAULT_PHONE_TYPE)),
                },
                None => Conversion::Defaulted(json!(lookup::DEFAULT_PHONE_TYPE)),
            },
            ValueConverter::AddressLine => match scalar_text(value) {
                Some(line) => Conversion::Mapped(json!(lookup::normalize_address_line(&line))),
                None => Conversion::Skipped,
            },
            ValueConverter::AdminFlag => match as_boolean(value) {
                Some(true) => Conversion::Mapped(json!(2)),
                Some(false) => Conversion::Mapped(json!(lookup::DEFAULT_USER_TYPE)),
                None => Conversion::Defaulted(json!(lookup::DEFAULT_USER_TYPE)),
            },
            ValueConverter::Text => match scalar_text(value) {
                Some(text) => Conversion::Mapped(json!(text)),
                None => Conversion::Skipped,
            },
            ValueConverter::Integer => match as_integer(value) {
                Some(number) => Conversion::Mapped(json!(number)),
                None => Conversion::Skipped,
            },
            ValueConverter::Boolean => match as_boolean(value) {
                Some(flag) => Conversion::Mapped(json!(flag)),
                None => Conversion::Skipped,
            },
            ValueConverter::Uppercase => match value.as_str() {
                Some(text) => Conversion::Mapped(json!(text.to_uppercase())),
                None => Conversion::Skipped,
            },
            ValueConverter::Truncate(limit) => match value.as_str() {
                Some(text) => Conversion::Mapped(json!(text.chars().take(*limit).collect::<String>())),
                None => Conversion::Skipped,
            },
        }
    }
}

/// Render a scalar as text; objects, arrays and null have no text form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub(crate) fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|n| n != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" | "on" | "enabled" => Some(true),
            "false" | "no" | "0" | "off" | "disabled" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn convert_status(value: &Value) -> Conversion {
    let active = match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(s) => match lookup::normalize_token(s).as_str() {
            "active" | "enabled" => Some(true),
            "inactive" | "disabled" | "notactivated" | "frozen" | "deleted" => Some(false),
            _ => None,
        },
        _ => None,
    };
    match active {
        Some(true) => Conversion::Mapped(json!("active")),
        Some(false) => Conversion::Mapped(json!("inactive")),
        None => Conversion::Defaulted(json!("inactive")),
    }
}

fn convert_user_type(value: &Value) -> Conversion {
    let code = match value {
        Value::Number(_) => as_integer(value).filter(|code| lookup::is_zoom_user_type(*code)),
        Value::String(s) => lookup::zoom_user_type(s).or_else(|| {
            s.trim()
                .parse::<i64>()
                .ok()
                .filter(|code| lookup::is_zoom_user_type(*code))
        }),
        _ => None,
    };
    match code {
        Some(code) => Conversion::Mapped(json!(code)),
        None => Conversion::Defaulted(json!(lookup::DEFAULT_USER_TYPE)),
    }
}

fn convert_zoom_type(value: &Value) -> Conversion {
    match as_integer(value).and_then(lookup::ssot_user_role) {
        Some(role) => Conversion::Mapped(json!(role)),
        None => Conversion::Defaulted(json!(lookup::DEFAULT_USER_ROLE)),
    }
}

fn convert_timezone(value: &Value) -> Conversion {
    let resolved = match value {
        Value::Object(zone) => ["id", "name"]
            .iter()
            .filter_map(|key| zone.get(*key).and_then(scalar_text))
            .find_map(|candidate| lookup::iana_timezone(&candidate)),
        other => scalar_text(other).and_then(|candidate| lookup::iana_timezone(&candidate)),
    };
    match resolved {
        Some(zone) => Conversion::Mapped(json!(zone)),
        None => Conversion::Defaulted(json!(lookup::DEFAULT_TIMEZONE)),
    }
}

fn convert_country(value: &Value) -> Conversion {
    match value.as_str() {
        Some(name) => match lookup::iso_country(name) {
            Some(code) => Conversion::Mapped(json!(code)),
            None => Conversion::Mapped(json!(name.trim())),
        },
        None => Conversion::Skipped,
    }
}
