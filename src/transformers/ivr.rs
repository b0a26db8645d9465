//! IVR menu transformers.
//!
//! Zoom encodes each menu entry as `{key, action, target}` where `action` is
//! a numeric code whose value depends on what kind of extension the target
//! is. Vendor exports only name the action and the target extension, so the
//! target kind is inferred from the extension name.

use super::{EntityTransformer, StructuralStep};
use crate::mapping::converters::{as_integer, scalar_text};
use crate::mapping::lookup::{normalize_token, zoom_ivr_key};
use crate::mapping::{MappingRule, ValueConverter};
use crate::platform::{EntityType, Platform};
use log::{debug, warn};
use serde_json::{Map, Value, json};

/// Action codes that never carry a target.
const NO_TARGET_CODES: [i64; 4] = [DISCONNECT, REPEAT, RETURN_TO_ROOT, RETURN_TO_PREVIOUS];

pub const DISCONNECT: i64 = -1;
pub const REPEAT: i64 = 21;
pub const RETURN_TO_ROOT: i64 = 22;
pub const RETURN_TO_PREVIOUS: i64 = 23;
pub const TRANSFER: i64 = 10;
pub const DIAL_BY_NAME: i64 = 4;

const CALL_QUEUE_KEYWORDS: &[&str] = &[
    "queue",
    "support",
    "sales",
    "service",
    "help",
    "department",
    "team",
    "pso",
];

const AUTO_RECEPTIONIST_KEYWORDS: &[&str] =
    &["receptionist", "menu", "main", "ivr", "auto", "greeting"];

pub static SSOT_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Ivr,
    source: Platform::Ssot,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::convert(
            "audio_prompt.audio_id",
            "audio_prompt.audio_prompt_id",
            ValueConverter::Text,
        ),
        MappingRule::copy("audio_prompt.text", "audio_prompt.text_prompt"),
    ],
    steps: &[StructuralStep::MenuOptionsToZoom {
        source: "menu_options",
        target: "ivr_actions",
    }],
    required: &["name"],
};

pub static RINGCENTRAL_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Ivr,
    source: Platform::RingCentral,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extensionNumber", "extension_number", ValueConverter::Text),
        MappingRule::convert("site.id", "site_id", ValueConverter::Text),
        MappingRule::convert(
            "prompt.audio.uri",
            "audio_prompt.audio_prompt_id",
            ValueConverter::Text,
        ),
        MappingRule::convert(
            "prompt.audio.id",
            "audio_prompt.audio_prompt_id",
            ValueConverter::Text,
        ),
        MappingRule::copy("prompt.text", "audio_prompt.text_prompt"),
        MappingRule::copy("prompt.mode", "audio_prompt.mode"),
    ],
    steps: &[StructuralStep::VendorIvrActions {
        sources: &["ivr_details.0.actions", "actions"],
        target: "ivr_actions",
    }],
    required: &["name"],
};

pub static ZOOM_TO_SSOT: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Ivr,
    source: Platform::Zoom,
    target: Platform::Ssot,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extension_number", "extension_number", ValueConverter::Text),
        MappingRule::convert("site_id", "site_id", ValueConverter::Text),
        MappingRule::convert(
            "audio_prompt.audio_prompt_id",
            "audio_prompt.audio_id",
            ValueConverter::Text,
        ),
        MappingRule::copy("audio_prompt.text_prompt", "audio_prompt.text"),
    ],
    steps: &[StructuralStep::MenuOptionsFromZoom {
        source: "ivr_actions",
        target: "menu_options",
    }],
    required: &["name"],
};

/// Dialpad offices carrying `routing_options.{open,closed}.dtmf` menus.
pub static DIALPAD_TO_ZOOM: EntityTransformer = EntityTransformer {
    entity_type: EntityType::Ivr,
    source: Platform::Dialpad,
    target: Platform::Zoom,
    rules: &[
        MappingRule::convert("id", "id", ValueConverter::Text),
        MappingRule::convert("office_id", "id", ValueConverter::Text),
        MappingRule::copy("name", "name"),
        MappingRule::convert("extension", "extension_number", ValueConverter::Text),
        MappingRule::convert("id", "site_id", ValueConverter::Text),
        MappingRule::convert("office_id", "site_id", ValueConverter::Text),
    ],
    steps: &[StructuralStep::DialpadRouting {
        source: "routing_options",
        fallback_action: "no_operators_action",
        target: "ivr_actions",
    }],
    required: &["name"],
};

/// Routing states read from Dialpad exports; open hours win on duplicate keys.
const DIALPAD_ROUTING_STATES: [&str; 2] = ["open", "closed"];

/// Action used for the timeout entry when an office names none.
const DIALPAD_DEFAULT_FALLBACK: &str = "voicemail";

/// Kind of extension an IVR entry routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IvrTargetType {
    User,
    CallQueue,
    AutoReceptionist,
    PhoneNumber,
}

impl IvrTargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IvrTargetType::User => "user",
            IvrTargetType::CallQueue => "call_queue",
            IvrTargetType::AutoReceptionist => "auto_receptionist",
            IvrTargetType::PhoneNumber => "phone_number",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "user" | "extension" => Some(IvrTargetType::User),
            "callqueue" | "queue" => Some(IvrTargetType::CallQueue),
            "department" => Some(IvrTargetType::CallQueue),
            "autoreceptionist" | "ivr" | "office" => Some(IvrTargetType::AutoReceptionist),
            "phonenumber" | "external" => Some(IvrTargetType::PhoneNumber),
            _ => None,
        }
    }

    /// Infer the target kind from an extension display name.
    pub fn detect(extension_name: &str) -> Self {
        let name = extension_name.to_ascii_lowercase();
        if CALL_QUEUE_KEYWORDS.iter().any(|k| name.contains(k)) {
            IvrTargetType::CallQueue
        } else if AUTO_RECEPTIONIST_KEYWORDS.iter().any(|k| name.contains(k)) {
            IvrTargetType::AutoReceptionist
        } else {
            IvrTargetType::User
        }
    }

    fn from_action_code(code: i64) -> Self {
        match code {
            7 | 400 => IvrTargetType::CallQueue,
            8 | 300 => IvrTargetType::AutoReceptionist,
            _ => IvrTargetType::User,
        }
    }
}

/// Zoom action code for a named action routed to `target`.
pub fn action_code(action: &str, target: IvrTargetType) -> Option<i64> {
    let token = normalize_token(action);
    match token.as_str() {
        "repeat" | "repeatmenu" => return Some(REPEAT),
        "returntoroot" | "returntotoplevelmenu" => return Some(RETURN_TO_ROOT),
        "returntoprevious" | "returntopreviousmenu" => return Some(RETURN_TO_PREVIOUS),
        "disconnect" | "donothing" | "hangup" | "disabled" => return Some(DISCONNECT),
        _ => {}
    }

    let (connect, voicemail) = match target {
        IvrTargetType::User => (2, 200),
        IvrTargetType::CallQueue => (7, 400),
        IvrTargetType::AutoReceptionist => (8, 300),
        IvrTargetType::PhoneNumber => (TRANSFER, 200),
    };
    match token.as_str() {
        "connect" | "connecttoextension" | "connecttooperator" | "operator" | "forward"
        | "department" => {
            Some(connect)
        }
        "voicemail" | "leavevoicemail" => Some(voicemail),
        "transfer" | "transfertoexternal" | "forwardtoexternal" => Some(TRANSFER),
        "dialbyname" | "dialbynamedirectory" | "directory" => Some(DIAL_BY_NAME),
        _ => None,
    }
}

/// SSOT action name for a Zoom action code.
pub fn action_name(code: i64) -> Option<&'static str> {
    match code {
        2 | 7 | 8 => Some("connect"),
        200 | 300 | 400 => Some("voicemail"),
        TRANSFER => Some("transfer"),
        DIAL_BY_NAME => Some("dial_by_name"),
        REPEAT => Some("repeat"),
        RETURN_TO_ROOT => Some("return_to_root"),
        RETURN_TO_PREVIOUS => Some("return_to_previous"),
        DISCONNECT => Some("disconnect"),
        _ => None,
    }
}

fn resolve_code(action: Option<String>, target: IvrTargetType, context: &str) -> i64 {
    let Some(action) = action else {
        warn!("{}: IVR entry without an action, using disconnect", context);
        return DISCONNECT;
    };
    action_code(&action, target).unwrap_or_else(|| {
        warn!("{}: unknown IVR action '{}', using disconnect", context, action);
        DISCONNECT
    })
}

fn zoom_action(
    key: String,
    code: i64,
    target_type: IvrTargetType,
    extension_id: Option<String>,
    phone_number: Option<String>,
) -> Value {
    let mut action = Map::new();
    action.insert("key".to_string(), json!(key));
    action.insert("action".to_string(), json!(code));

    if !NO_TARGET_CODES.contains(&code) {
        let target = match (target_type, extension_id, phone_number) {
            (IvrTargetType::PhoneNumber, _, Some(number)) | (_, None, Some(number)) => {
                Some(json!({"type": "phone_number", "phone_number": number}))
            }
            (kind, Some(id), _) => Some(json!({"type": kind.as_str(), "extension_id": id})),
            _ => None,
        };
        if let Some(target) = target {
            action.insert("target".to_string(), target);
        }
    }
    Value::Object(action)
}

/// RingCentral `[{input, action, extension: {id, name}, phoneNumber}]` to
/// Zoom `ivr_actions`.
pub(super) fn vendor_actions_to_zoom(input: &Value, context: &str) -> Option<Value> {
    let actions: Vec<Value> = input
        .as_array()?
        .iter()
        .filter_map(|entry| {
            let key = entry.get("input").and_then(scalar_text)?;
            let extension = entry.get("extension");
            let phone_number = entry.get("phoneNumber").and_then(scalar_text);
            let target_type = match extension.and_then(|e| e.get("name")).and_then(Value::as_str) {
                Some(name) => IvrTargetType::detect(name),
                None if phone_number.is_some() => IvrTargetType::PhoneNumber,
                None => IvrTargetType::User,
            };
            let code = resolve_code(
                entry.get("action").and_then(scalar_text),
                target_type,
                context,
            );
            let extension_id = extension.and_then(|e| e.get("id")).and_then(scalar_text);
            Some(zoom_action(
                zoom_ivr_key(&key),
                code,
                target_type,
                extension_id,
                phone_number,
            ))
        })
        .collect();

    if actions.is_empty() { None } else { Some(Value::Array(actions)) }
}

/// Dialpad `{open: {dtmf: [..]}, closed: {dtmf: [..]}}` to Zoom
/// `ivr_actions`, followed by a `timeout` entry built from the office's
/// no-operators action.
pub(super) fn dialpad_routing_to_zoom(
    input: &Value,
    fallback_action: Option<&Value>,
    context: &str,
) -> Option<Value> {
    let routing = input.as_object()?;
    let mut actions: Vec<Value> = Vec::new();
    let mut seen_keys: Vec<String> = Vec::new();

    for state in DIALPAD_ROUTING_STATES {
        let Some(entries) = routing
            .get(state)
            .and_then(|options| options.get("dtmf"))
            .and_then(Value::as_array)
        else {
            continue;
        };
        for entry in entries {
            let (Some(input_key), Some(options)) = (
                entry.get("input").and_then(scalar_text),
                entry.get("options").filter(|o| o.is_object()),
            ) else {
                continue;
            };
            let key = zoom_ivr_key(&input_key);
            if seen_keys.contains(&key) {
                debug!("{}: key '{}' already routed, ignoring {} entry", context, key, state);
                continue;
            }

            let action = options.get("action").and_then(scalar_text);
            let target_type = dialpad_target_type(action.as_deref(), options);
            let code = resolve_code(action, target_type, context);
            let extension_id = if code == DIAL_BY_NAME {
                None
            } else {
                options.get("action_target_id").and_then(scalar_text)
            };
            actions.push(zoom_action(key.clone(), code, target_type, extension_id, None));
            seen_keys.push(key);
        }
    }

    if actions.is_empty() {
        return None;
    }

    let fallback = fallback_action
        .and_then(scalar_text)
        .unwrap_or_else(|| DIALPAD_DEFAULT_FALLBACK.to_string());
    let timeout_code = match normalize_token(&fallback).as_str() {
        "voicemail" => action_code("voicemail", IvrTargetType::User).unwrap_or(DISCONNECT),
        _ => DISCONNECT,
    };
    if !seen_keys.iter().any(|key| key == "timeout") {
        actions.push(json!({"key": "timeout", "action": timeout_code}));
    }
    Some(Value::Array(actions))
}

/// Target kind of a Dialpad DTMF entry: departments are call queues,
/// operators are users and office targets are auto receptionists.
fn dialpad_target_type(action: Option<&str>, options: &Value) -> IvrTargetType {
    let declared = options.get("action_target_type").and_then(Value::as_str);
    match (action.map(normalize_token).as_deref(), declared) {
        (Some("department"), _) => IvrTargetType::CallQueue,
        (Some("operator"), _) => IvrTargetType::User,
        (_, Some(kind)) => IvrTargetType::parse(kind).unwrap_or(IvrTargetType::User),
        _ => IvrTargetType::User,
    }
}

/// SSOT `[{key, action, target: {type, id | phone_number}}]` to Zoom
/// `ivr_actions`.
pub(super) fn menu_options_to_zoom(input: &Value, context: &str) -> Option<Value> {
    let actions: Vec<Value> = input
        .as_array()?
        .iter()
        .filter_map(|option| {
            let key = option.get("key").and_then(scalar_text)?;
            let target = option.get("target");
            let phone_number = target
                .and_then(|t| t.get("phone_number"))
                .and_then(scalar_text);
            let target_type = target
                .and_then(|t| t.get("type"))
                .and_then(Value::as_str)
                .and_then(IvrTargetType::parse)
                .unwrap_or(if phone_number.is_some() {
                    IvrTargetType::PhoneNumber
                } else {
                    IvrTargetType::User
                });
            let code = resolve_code(
                option.get("action").and_then(scalar_text),
                target_type,
                context,
            );
            let extension_id = target
                .and_then(|t| t.get("id").or_else(|| t.get("extension_id")))
                .and_then(scalar_text);
            Some(zoom_action(
                zoom_ivr_key(&key),
                code,
                target_type,
                extension_id,
                phone_number,
            ))
        })
        .collect();

    if actions.is_empty() { None } else { Some(Value::Array(actions)) }
}

/// Zoom `ivr_actions` back to SSOT `menu_options`.
pub(super) fn menu_options_from_zoom(input: &Value, context: &str) -> Option<Value> {
    let options: Vec<Value> = input
        .as_array()?
        .iter()
        .filter_map(|action| {
            let key = action.get("key").and_then(scalar_text)?;
            let code = action.get("action").and_then(as_integer);
            let name = match code.and_then(action_name) {
                Some(name) => name,
                None => {
                    warn!(
                        "{}: unknown IVR action code {:?} for key '{}', using disconnect",
                        context, code, key
                    );
                    "disconnect"
                }
            };

            let mut option = Map::new();
            option.insert("key".to_string(), json!(key));
            option.insert("action".to_string(), json!(name));

            if let Some(target) = action.get("target").filter(|t| t.is_object()) {
                let kind = target
                    .get("type")
                    .and_then(Value::as_str)
                    .and_then(IvrTargetType::parse)
                    .unwrap_or_else(|| IvrTargetType::from_action_code(code.unwrap_or(DISCONNECT)));
                let converted = match kind {
                    IvrTargetType::PhoneNumber => target
                        .get("phone_number")
                        .and_then(scalar_text)
                        .map(|number| json!({"type": kind.as_str(), "phone_number": number})),
                    _ => target
                        .get("extension_id")
                        .and_then(scalar_text)
                        .map(|id| json!({"type": kind.as_str(), "id": id})),
                };
                if let Some(converted) = converted {
                    option.insert("target".to_string(), converted);
                }
            }
            Some(Value::Object(option))
        })
        .collect();

    if options.is_empty() { None } else { Some(Value::Array(options)) }
}
