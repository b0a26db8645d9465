//! Unit tests for the router and the MCP adapter.
//!
//! ## Organization
//!
//! - [`operation_handler`] - request validation, dispatch and envelopes
//! - [`mcp_integration`] - MCP tool calls through the public API

pub mod mcp_integration;
pub mod operation_handler;
