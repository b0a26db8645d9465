//! Sample records in each platform's shape.

use serde_json::{Value, json};

pub fn ringcentral_user() -> Value {
    json!({
        "id": 63140001,
        "extensionNumber": "101",
        "type": "User",
        "status": "Active",
        "contact": {
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace.hopper@example.com",
            "department": "Engineering",
            "jobTitle": "Rear Admiral"
        },
        "regionalSettings": {
            "timezone": {"id": "59", "name": "Central Standard Time"},
            "language": {"localeCode": "en-US"}
        },
        "site": {"id": "site-77"}
    })
}

pub fn ssot_user() -> Value {
    json!({
        "email": "katherine.johnson@example.com",
        "first_name": "Katherine",
        "last_name": "Johnson",
        "status": "active",
        "role": "admin",
        "timezone": "America/New_York",
        "department": "Flight Research",
        "phone_numbers": [{"type": "business", "number": "+17575550100"}]
    })
}

pub fn ssot_site() -> Value {
    json!({
        "name": "Denver Branch-Office",
        "street_address": "1700 Lincoln St",
        "city": "Denver",
        "state_province": "co",
        "postal_code": 80203,
        "country": "United States",
        "timezone": "Mountain Standard Time"
    })
}

pub fn ringcentral_site() -> Value {
    json!({
        "id": "rc-site-1",
        "name": "London",
        "code": "lon",
        "businessAddress": {
            "street": "1 Poultry",
            "city": "London",
            "zip": "EC2R 8EJ",
            "country": "United Kingdom"
        }
    })
}

pub fn ringcentral_call_queue() -> Value {
    json!({
        "id": "cq-10",
        "name": "Support Queue",
        "extensionNumber": 2001,
        "status": "Enabled",
        "business_hours": [{
            "schedule": {
                "weeklyRanges": {
                    "monday": [{"from": "09:00", "to": "17:00"}],
                    "saturday": [{"from": "10:00", "to": "14:00"}]
                }
            }
        }]
    })
}

pub fn ringcentral_ivr() -> Value {
    json!({
        "id": "ivr-200",
        "name": "Main Menu",
        "extensionNumber": "200",
        "prompt": {"mode": "TextToSpeech", "text": "Press one for sales"},
        "ivr_details": [{
            "actions": [
                {"input": "1", "action": "Connect", "extension": {"id": "301", "name": "Sales Queue"}},
                {"input": "0", "action": "Connect", "extension": {"id": "302", "name": "Operator Jane"}},
                {"input": "Hash", "action": "ReturnToRoot"}
            ]
        }]
    })
}

pub fn ssot_auto_receptionist() -> Value {
    json!({
        "name": "Headquarters Main Receptionist Line",
        "extension_number": 800,
        "timezone": "Pacific Standard Time",
        "status": "active"
    })
}

pub fn zoom_user() -> Value {
    json!({
        "id": "zu-1",
        "email": "dorothy.vaughan@example.com",
        "first_name": "Dorothy",
        "last_name": "Vaughan",
        "type": 2,
        "status": "inactive",
        "timezone": "America/Chicago"
    })
}

pub fn dialpad_user() -> Value {
    json!({
        "id": "5712345678901234",
        "first_name": "Mary",
        "last_name": "Jackson",
        "emails": ["mary.jackson@example.com"],
        "state": "active",
        "is_admin": false,
        "timezone": "US/Eastern",
        "office_id": 4400
    })
}

pub fn dialpad_office_menu() -> Value {
    json!({
        "id": 4400,
        "name": "Hampton Office",
        "routing_options": {
            "open": {"dtmf": [
                {"input": "1", "options": {"action": "department", "action_target_id": 7001}},
                {"input": "0", "options": {"action": "operator", "action_target_id": 9001}}
            ]}
        }
    })
}
