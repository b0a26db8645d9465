//! MCP tool manifest definitions.
//!
//! Each function returns one tool as `{name, description, parameters}` where
//! `parameters` is a JSON Schema object. The manifest is static.

pub mod transform_schemas;

pub use transform_schemas::*;
