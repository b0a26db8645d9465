//! Unit tests for the transform router.

use crate::common::{assert_envelope_consistent, fixtures};
use serde_json::json;
use zoom_transform::{
    EntityType, Platform, TransformHandler, TransformMethod, TransformOptions, TransformRequest,
};

#[test]
fn test_ringcentral_user_envelope() {
    let handler = TransformHandler::new();
    let request = TransformRequest::raw_to_zoom("user", "ringcentral", fixtures::ringcentral_user());

    let envelope = handler.handle_transform(request).unwrap();
    assert_envelope_consistent(&envelope);
    assert_eq!(envelope.entity_type, EntityType::User);
    assert_eq!(envelope.source_platform, Platform::RingCentral);
    assert_eq!(envelope.metadata.transformation_type, "ringcentral_to_zoom");

    assert_eq!(
        envelope.transformed_data,
        json!({
            "id": "63140001",
            "email": "grace.hopper@example.com",
            "first_name": "Grace",
            "last_name": "Hopper",
            "status": "active",
            "type": 1,
            "timezone": "America/Chicago",
            "dept": "Engineering",
            "job_title": "Rear Admiral",
            "extension_number": "101",
            "site_id": "site-77",
            "language": "en-US"
        })
    );
    assert!(envelope.metadata.dropped_fields.is_empty());
}

#[test]
fn test_handle_operation_success() {
    let handler = TransformHandler::new();
    let request = TransformRequest::ssot_to_zoom("user", fixtures::ssot_user())
        .with_request_id("req-42");

    let response = handler.handle_operation(request);
    assert!(response.success);
    assert!(response.error.is_none());
    assert_eq!(response.metadata.request_id, "req-42");
    assert_eq!(response.metadata.status_code, 200);
    assert_eq!(
        response.metadata.transformation_type.as_deref(),
        Some("ssot_to_zoom")
    );

    let data = response.data.unwrap();
    assert_eq!(data["metadata"]["request_id"], "req-42");
    assert_eq!(data["transformed_data"]["type"], 2);
    assert_eq!(
        data["transformed_data"]["phone_numbers"],
        json!([{"number": "+17575550100", "type": "office"}])
    );
}

#[test]
fn test_unsupported_entity_type_lists_allowed_values() {
    let handler = TransformHandler::new();
    let request = TransformRequest::ssot_to_zoom("widget", json!({"name": "x"}));

    let response = handler.handle_operation(request);
    assert!(!response.success);
    assert_eq!(response.metadata.status_code, 422);
    assert_eq!(response.error_code.as_deref(), Some("VALIDATION_ERROR"));

    let allowed = response.metadata.additional.get("allowed_values").unwrap();
    assert_eq!(allowed, &json!(EntityType::allowed_values()));
}

#[test]
fn test_unregistered_pair_is_not_found() {
    let handler = TransformHandler::new();

    for request in [
        TransformRequest::ssot_to_zoom("recording", json!({"id": "r1"})),
        TransformRequest::new("user", "ssot", "ringcentral", json!({"email": "a@b.com"})),
    ] {
        let error = handler.handle_transform(request).unwrap_err();
        assert_eq!(error.status_code(), 404);
        assert!(error.to_string().contains("user: ssot -> zoom"));
    }
}

#[test]
fn test_batch_transformation() {
    let handler = TransformHandler::new();
    let request = TransformRequest::raw_to_zoom(
        "user",
        "ringcentral",
        json!([
            {"firstName": "A", "status": "Active"},
            {"firstName": "B", "status": "Suspended", "nickname": "bee"}
        ]),
    );

    let envelope = handler.handle_transform(request).unwrap();
    assert_envelope_consistent(&envelope);
    assert_eq!(envelope.metadata.record_count, 2);
    assert_eq!(envelope.transformed_data[0]["status"], "active");
    assert_eq!(envelope.transformed_data[1]["status"], "inactive");
    assert_eq!(envelope.metadata.dropped_fields, vec!["nickname".to_string()]);
    assert!(envelope.metadata.defaulted_fields.contains(&"status".to_string()));
}

#[test]
fn test_batch_with_non_object_is_rejected() {
    let handler = TransformHandler::new();
    let request = TransformRequest::ssot_to_zoom("user", json!([{"email": "a@b.com"}, 7]));

    let error = handler.handle_transform(request).unwrap_err();
    assert_eq!(error.status_code(), 422);
    assert!(error.to_string().contains("record 1"));

    let scalar = TransformRequest::ssot_to_zoom("user", json!("not a record"));
    assert_eq!(handler.handle_transform(scalar).unwrap_err().status_code(), 422);
}

#[test]
fn test_pass_through_option() {
    let handler = TransformHandler::new();
    let data = json!({"email": "a@b.com", "custom_flag": true});

    let plain = handler
        .handle_transform(TransformRequest::ssot_to_zoom("user", data.clone()))
        .unwrap();
    assert!(plain.transformed_data.get("custom_flag").is_none());

    let passed = handler
        .handle_transform(
            TransformRequest::ssot_to_zoom("user", data)
                .with_options(TransformOptions::pass_through()),
        )
        .unwrap();
    assert_eq!(passed.transformed_data["custom_flag"], true);
}

#[test]
fn test_fingerprint_is_stable_and_request_ids_unique() {
    let handler = TransformHandler::new();
    let first = handler
        .handle_transform(TransformRequest::ssot_to_zoom("site", fixtures::ssot_site()))
        .unwrap();
    let second = handler
        .handle_transform(TransformRequest::ssot_to_zoom("site", fixtures::ssot_site()))
        .unwrap();

    assert_eq!(first.transformed_data, second.transformed_data);
    assert_eq!(first.metadata.fingerprint, second.metadata.fingerprint);
    assert_ne!(first.metadata.request_id, second.metadata.request_id);
}

#[test]
fn test_for_method_builder() {
    let handler = TransformHandler::new();
    let request = TransformRequest::for_method(
        TransformMethod::ZoomToSsot,
        "user",
        Platform::RingCentral,
        fixtures::zoom_user(),
    );

    let envelope = handler.handle_transform(request).unwrap();
    assert_eq!(envelope.target_platform, Platform::Ssot);
    assert_eq!(envelope.transformed_data["role"], "admin");
    assert_eq!(envelope.transformed_data["status"], "inactive");
}
