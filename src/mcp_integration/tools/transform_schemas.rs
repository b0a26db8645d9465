//! Tool schemas for the transform adapter.

use crate::platform::{EntityType, Platform, TransformMethod};
use serde_json::{Value, json};

/// Schema for the `transform` tool.
pub fn transform_tool() -> Value {
    let raw_platforms: Vec<&str> = Platform::ALL
        .iter()
        .filter(|p| p.is_raw_vendor())
        .map(|p| p.as_str())
        .collect();

    json!({
        "name": "transform",
        "description": "Transform telephony entity data between SSOT, vendor raw exports and the Zoom Phone schema",
        "parameters": {
            "type": "object",
            "properties": {
                "method": {
                    "type": "string",
                    "enum": TransformMethod::allowed_values(),
                    "description": "Transformation direction"
                },
                "entity_type": {
                    "type": "string",
                    "enum": EntityType::allowed_values(),
                    "description": "Entity being transformed"
                },
                "data": {
                    "type": ["object", "array"],
                    "description": "A single record or an array of records"
                },
                "raw_platform": {
                    "type": "string",
                    "enum": raw_platforms,
                    "description": "Vendor of the raw data for raw_to_zoom"
                },
                "options": {
                    "type": "object",
                    "properties": {
                        "pass_through": {
                            "type": "boolean",
                            "description": "Copy unmapped top-level fields into the output"
                        }
                    }
                },
                "request_id": {
                    "type": "string",
                    "description": "Caller-supplied id for correlation"
                }
            },
            "required": ["method", "entity_type", "data"]
        }
    })
}

/// Schema for the `list_tools` tool.
pub fn list_tools_tool() -> Value {
    json!({
        "name": "list_tools",
        "description": "List the tools exposed by this MCP adapter",
        "parameters": {
            "type": "object",
            "properties": {}
        }
    })
}
