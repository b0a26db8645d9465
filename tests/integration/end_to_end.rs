//! Realistic records through each transformation direction.

use crate::common::{assert_envelope_consistent, fixtures};
use serde_json::json;
use zoom_transform::{TransformHandler, TransformRequest, registered_transformers};

#[test]
fn test_ssot_site_to_zoom() {
    let envelope = TransformHandler::new()
        .handle_transform(TransformRequest::ssot_to_zoom("site", fixtures::ssot_site()))
        .unwrap();
    assert_envelope_consistent(&envelope);

    assert_eq!(
        envelope.transformed_data,
        json!({
            "name": "Denver Branch-Office",
            "site_code": "DENVER_BRANCH_OFFICE",
            "timezone": "America/Denver",
            "default_emergency_address": {
                "address_line1": "1700 Lincoln ST",
                "city": "Denver",
                "state_code": "CO",
                "zip": "80203",
                "country": "US"
            }
        })
    );
}

#[test]
fn test_ringcentral_site_to_zoom() {
    let envelope = TransformHandler::new()
        .handle_transform(TransformRequest::raw_to_zoom(
            "site",
            "ringcentral",
            fixtures::ringcentral_site(),
        ))
        .unwrap();

    let site = &envelope.transformed_data;
    assert_eq!(site["id"], "rc-site-1");
    assert_eq!(site["site_code"], "LON");
    assert_eq!(site["default_emergency_address"]["country"], "GB");
    assert_eq!(site["default_emergency_address"]["zip"], "EC2R 8EJ");
    assert!(site["default_emergency_address"].get("state_code").is_none());
}

#[test]
fn test_ringcentral_call_queue_to_zoom() {
    let envelope = TransformHandler::new()
        .handle_transform(TransformRequest::raw_to_zoom(
            "call_queue",
            "ringcentral",
            fixtures::ringcentral_call_queue(),
        ))
        .unwrap();

    let queue = &envelope.transformed_data;
    assert_eq!(queue["status"], "active");
    assert_eq!(queue["extension_number"], "2001");
    assert_eq!(
        queue["custom_hours_settings"],
        json!([
            {"weekday": 2, "from": "09:00", "to": "17:00", "type": 2},
            {"weekday": 7, "from": "10:00", "to": "14:00", "type": 2}
        ])
    );
}

#[test]
fn test_call_queue_hours_survive_round_trip() {
    let handler = TransformHandler::new();
    let ssot = json!({
        "name": "Billing",
        "business_hours": {
            "weekly_ranges": {
                "monday": [{"from": "08:00", "to": "18:00"}],
                "sunday": [{"from": "12:00", "to": "16:00"}]
            }
        }
    });

    let zoom = handler
        .handle_transform(TransformRequest::ssot_to_zoom("call_queue", ssot.clone()))
        .unwrap();
    let back = handler
        .handle_transform(TransformRequest::zoom_to_ssot(
            "call_queue",
            zoom.transformed_data,
        ))
        .unwrap();

    assert_eq!(back.transformed_data, ssot);
}

#[test]
fn test_ringcentral_ivr_to_zoom() {
    let envelope = TransformHandler::new()
        .handle_transform(TransformRequest::raw_to_zoom(
            "ivr",
            "ringcentral",
            fixtures::ringcentral_ivr(),
        ))
        .unwrap();

    let ivr = &envelope.transformed_data;
    assert_eq!(
        ivr["ivr_actions"],
        json!([
            {"key": "1", "action": 7, "target": {"type": "call_queue", "extension_id": "301"}},
            {"key": "0", "action": 2, "target": {"type": "user", "extension_id": "302"}},
            {"key": "#", "action": 22}
        ])
    );
    assert_eq!(
        ivr["audio_prompt"],
        json!({"text_prompt": "Press one for sales", "mode": "TextToSpeech"})
    );
}

#[test]
fn test_ssot_auto_receptionist_name_is_truncated() {
    let envelope = TransformHandler::new()
        .handle_transform(TransformRequest::ssot_to_zoom(
            "auto_receptionist",
            fixtures::ssot_auto_receptionist(),
        ))
        .unwrap();

    let receptionist = &envelope.transformed_data;
    assert_eq!(receptionist["name"], "Headquarters Main Receptionist");
    assert_eq!(receptionist["extension_number"], "800");
    assert_eq!(receptionist["timezone"], "America/Los_Angeles");
}

#[test]
fn test_required_name_is_enforced() {
    let handler = TransformHandler::new();
    for entity_type in ["site", "call_queue", "auto_receptionist", "ivr"] {
        let error = handler
            .handle_transform(TransformRequest::ssot_to_zoom(
                entity_type,
                json!({"name": "  ", "id": "x"}),
            ))
            .unwrap_err();
        assert_eq!(error.status_code(), 422, "{}", entity_type);
    }
}

#[test]
fn test_every_transformer_accepts_an_empty_named_record() {
    let handler = TransformHandler::new();
    for transformer in registered_transformers() {
        let request = TransformRequest::new(
            transformer.entity_type.as_str(),
            transformer.source.as_str(),
            transformer.target.as_str(),
            json!({"name": "Placeholder"}),
        );
        let envelope = handler.handle_transform(request).unwrap();
        assert_envelope_consistent(&envelope);
        assert!(envelope.transformed_data.is_object());
    }
}
