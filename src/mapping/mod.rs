//! Declarative field mapping.
//!
//! A transformation is an ordered list of [`MappingRule`]s: read a value at a
//! source path, optionally run a [`ValueConverter`], write it at a target
//! path. Converters never fail on unknown enumerated input; they substitute a
//! documented default and the engine logs the substitution.
//!
//! # Examples
//!
//! ```rust
//! use zoom_transform::mapping::{MappingRule, ValueConverter, apply_rules};
//! use serde_json::json;
//!
//! let rules = [
//!     MappingRule::copy("firstName", "first_name"),
//!     MappingRule::convert("status", "status", ValueConverter::Status),
//! ];
//! let source = json!({"firstName": "Ada", "status": "Active", "extra": 1});
//! let outcome = apply_rules(source.as_object().unwrap(), &rules, "example");
//! assert_eq!(outcome.record["first_name"], "Ada");
//! assert_eq!(outcome.record["status"], "active");
//! assert!(!outcome.record.contains_key("extra"));
//! ```

pub mod converters;
pub mod lookup;
pub mod path;
mod rule;

pub use converters::{Conversion, ValueConverter};
pub use rule::{Literal, MappingOutcome, MappingRule, apply_rules};
