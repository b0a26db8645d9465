//! Whole-service integration tests.
//!
//! - `end_to_end` - vendor and SSOT fixtures through every registered transformer
//! - `http_api` - REST and MCP routes over a real socket
//! - `transform_properties` - property-based invariants

pub mod end_to_end;
pub mod http_api;
pub mod transform_properties;
