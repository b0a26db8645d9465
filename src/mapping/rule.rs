//! Mapping rules and the ordered rule engine.

use super::converters::{Conversion, ValueConverter};
use super::path;
use log::{debug, warn};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;

/// Constant written when a rule's source is absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Str(&'static str),
    Bool(bool),
}

impl Literal {
    pub fn to_value(self) -> Value {
        match self {
            Literal::Int(n) => json!(n),
            Literal::Str(s) => json!(s),
            Literal::Bool(b) => json!(b),
        }
    }
}

/// A single source-path to target-path association.
///
/// Rules for the same target act as alternates: the first rule that writes
/// the target wins and later ones are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappingRule {
    pub source: &'static str,
    pub target: &'static str,
    pub converter: Option<ValueConverter>,
    pub default: Option<Literal>,
}

impl MappingRule {
    /// Copy the value unchanged.
    pub const fn copy(source: &'static str, target: &'static str) -> Self {
        Self {
            source,
            target,
            converter: None,
            default: None,
        }
    }

    /// Copy the value through a converter.
    pub const fn convert(
        source: &'static str,
        target: &'static str,
        converter: ValueConverter,
    ) -> Self {
        Self {
            source,
            target,
            converter: Some(converter),
            default: None,
        }
    }

    /// Write `default` when the source is absent or null.
    pub const fn or_default(mut self, default: Literal) -> Self {
        self.default = Some(default);
        self
    }
}

/// Record produced by applying a rule list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingOutcome {
    pub record: Map<String, Value>,
    /// Rules that wrote a value (converted, copied or defaulted)
    pub rules_applied: usize,
    /// Target paths filled in by a lossy default
    pub defaulted: Vec<String>,
    /// Top-level source keys whose value was written, shadowed by an
    /// earlier alternate, or explicitly null
    pub consumed: BTreeSet<String>,
}

impl MappingOutcome {
    /// Source keys that left no trace in the record, in key order.
    pub fn dropped_fields(&self, source: &Map<String, Value>) -> Vec<String> {
        source
            .keys()
            .filter(|key| !self.consumed.contains(key.as_str()))
            .cloned()
            .collect()
    }

    /// Copy unconsumed top-level source fields that the target does not
    /// already hold.
    pub fn pass_through(&mut self, source: &Map<String, Value>) {
        for (key, value) in source {
            if !self.consumed.contains(key.as_str()) && !self.record.contains_key(key) {
                self.record.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Apply `rules` in order to `source`.
///
/// `context` names the transformation in log lines.
pub fn apply_rules(
    source: &Map<String, Value>,
    rules: &[MappingRule],
    context: &str,
) -> MappingOutcome {
    let mut outcome = MappingOutcome::default();

    for rule in rules {
        let root = path::root_key(source, rule.source);
        let present = path::contains(source, rule.source);

        // A shadowed alternate or an explicit null carries nothing to drop.
        if path::contains(&outcome.record, rule.target) {
            if present {
                outcome.consumed.insert(root.to_string());
            }
            continue;
        }

        let Some(value) = path::lookup(source, rule.source) else {
            if present {
                outcome.consumed.insert(root.to_string());
            }
            if let Some(default) = rule.default {
                path::assign(&mut outcome.record, rule.target, default.to_value());
                outcome.rules_applied += 1;
            }
            continue;
        };

        let converted = match rule.converter {
            None => Conversion::Mapped(value.clone()),
            Some(converter) => converter.convert(value),
        };

        match converted {
            Conversion::Mapped(mapped) => {
                path::assign(&mut outcome.record, rule.target, mapped);
                outcome.consumed.insert(root.to_string());
                outcome.rules_applied += 1;
            }
            Conversion::Defaulted(fallback) => {
                warn!(
                    "{}: unrecognized value {} at '{}', using default {} for '{}'",
                    context, value, rule.source, fallback, rule.target
                );
                path::assign(&mut outcome.record, rule.target, fallback);
                outcome.consumed.insert(root.to_string());
                outcome.defaulted.push(rule.target.to_string());
                outcome.rules_applied += 1;
            }
            Conversion::Skipped => {
                debug!(
                    "{}: {} converter skipped value at '{}'",
                    context,
                    rule.converter.map(|c| c.name()).unwrap_or("copy"),
                    rule.source
                );
            }
        }
    }

    outcome
}
