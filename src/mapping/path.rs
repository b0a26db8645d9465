//! Dot-separated field paths over JSON records.
//!
//! `contact.email` walks nested objects and `business_hours.0.schedule`
//! indexes into arrays. A key that itself contains a dot (`"site.id"`, as
//! found in some vendor exports) is matched before the nested walk.

use serde_json::{Map, Value};

/// Look up a path, treating `null` as absent.
pub fn lookup<'a>(record: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(path) {
        return present(value);
    }

    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = record.get(first)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    present(current)
}

fn present(value: &Value) -> Option<&Value> {
    if value.is_null() { None } else { Some(value) }
}

/// Top-level key a path reads from.
pub fn root_key<'p>(record: &Map<String, Value>, path: &'p str) -> &'p str {
    if record.contains_key(path) {
        path
    } else {
        path.split('.').next().unwrap_or(path)
    }
}

/// Write `value` at `path`, creating intermediate objects as needed.
///
/// A non-object value sitting on an intermediate segment is replaced.
pub fn assign(record: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = record;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(next) = slot else {
            return;
        };
        current = next;
    }
}

/// Whether anything is stored at `path` (including `null`).
pub fn contains(record: &Map<String, Value>, path: &str) -> bool {
    let mut segments = path.split('.');
    let Some(first) = segments.next() else {
        return false;
    };
    let Some(mut current) = record.get(first) else {
        return false;
    };
    for segment in segments {
        match current.get(segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    true
}
