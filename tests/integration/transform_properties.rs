//! Property-based checks over the transformer registry.

use proptest::prelude::*;
use serde_json::{Value, json};
use zoom_transform::{
    EntityType, Platform, TransformMcpServer, TransformOptions, find_transformer,
    registered_transformers,
};

const ZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "Europe/London",
    "Asia/Tokyo",
    "UTC",
];

prop_compose! {
    fn ssot_user()(
        local in "[a-z]{1,12}",
        first_name in "[A-Z][a-z]{0,12}",
        last_name in "[A-Z][a-z]{0,12}",
        active in any::<bool>(),
        admin in any::<bool>(),
        zone in prop::sample::select(ZONES),
    ) -> Value {
        json!({
            "email": format!("{}@example.com", local),
            "first_name": first_name,
            "last_name": last_name,
            "status": if active { "active" } else { "inactive" },
            "role": if admin { "admin" } else { "user" },
            "timezone": zone,
        })
    }
}

prop_compose! {
    fn named_record()(
        name in "[A-Za-z][A-Za-z0-9 -]{0,40}",
        extension in 100u32..9999,
        status in prop::option::of("[A-Za-z]{0,10}"),
    ) -> Value {
        let mut record = json!({"name": name, "extension_number": extension, "extensionNumber": extension});
        if let Some(status) = status {
            record["status"] = json!(status);
        }
        record
    }
}

proptest! {
    #[test]
    fn transformers_are_deterministic(record in named_record()) {
        for transformer in registered_transformers() {
            let options = TransformOptions::default();
            let first = transformer.transform(&record, &options);
            let second = transformer.transform(&record, &options);
            match (first, second) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(
                        serde_json::to_string(&a.data).unwrap(),
                        serde_json::to_string(&b.data).unwrap()
                    );
                    prop_assert_eq!(a.dropped_fields, b.dropped_fields);
                }
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                _ => prop_assert!(false, "outcome changed between runs"),
            }
        }
    }

    #[test]
    fn ssot_user_survives_zoom_round_trip(user in ssot_user()) {
        let options = TransformOptions::default();
        let outbound = find_transformer(EntityType::User, Platform::Ssot, Platform::Zoom).unwrap();
        let inbound = find_transformer(EntityType::User, Platform::Zoom, Platform::Ssot).unwrap();

        let zoom = outbound.transform(&user, &options).unwrap();
        let back = inbound.transform(&zoom.data, &options).unwrap();

        for field in ["email", "first_name", "last_name", "status", "timezone", "role"] {
            prop_assert_eq!(&back.data[field], &user[field], "field {}", field);
        }
    }

    #[test]
    fn status_is_always_normalized(status in ".{0,16}") {
        let transformer = find_transformer(EntityType::User, Platform::RingCentral, Platform::Zoom).unwrap();
        let record = json!({"status": status});
        let result = transformer.transform(&record, &TransformOptions::default()).unwrap();
        let normalized = result.data["status"].as_str().unwrap();
        prop_assert!(normalized == "active" || normalized == "inactive");
    }

    #[test]
    fn mcp_always_answers_with_an_envelope(
        method in "[a-z_]{0,16}",
        entity_type in "[a-z_-]{0,20}",
        record in named_record(),
    ) {
        let mcp_server = TransformMcpServer::new();
        tokio_test::block_on(async {
            let response = mcp_server
                .handle_request(json!({
                    "tool": "transform",
                    "parameters": {"method": method, "entity_type": entity_type, "data": record}
                }))
                .await;

            let status = response["status"].as_str().unwrap();
            assert!(status == "success" || status == "error");
            assert!(response["request_id"].is_string());
            if status == "error" {
                assert!(response["error"].is_string());
            }
        });
    }
}
