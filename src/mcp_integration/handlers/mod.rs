//! MCP tool handlers
//!
//! - `transform` - the `transform` tool and legacy ETL payloads
//! - `discovery` - tool listing and ledger status lookup

pub mod discovery;
pub mod transform;

pub use discovery::*;
pub use transform::*;
