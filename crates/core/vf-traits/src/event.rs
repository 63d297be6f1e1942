//! Event capability trait and field references.

use serde_json::{Map, Value};
use std::fmt;

/// Reference to a (possibly nested) event field.
///
/// A bare name such as `src_mac` addresses a top-level key. Bracketed
/// segments such as `[network][src_mac]` walk nested objects. Anything that
/// is not fully bracketed is taken as a literal top-level key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    raw: String,
    segments: Vec<String>,
}

impl FieldRef {
    /// Parses a field reference.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse_bracketed(&raw).unwrap_or_else(|| vec![raw.clone()]);
        Self { raw, segments }
    }

    /// Returns the path segments, outermost first. Never empty.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the reference as originally written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for FieldRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for FieldRef {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

fn parse_bracketed(raw: &str) -> Option<Vec<String>> {
    let mut rest = raw.strip_prefix('[')?;
    let mut segments = Vec::new();

    loop {
        let (segment, after) = rest.split_once(']')?;
        if segment.is_empty() || segment.contains('[') {
            return None;
        }
        segments.push(segment.to_string());

        if after.is_empty() {
            return Some(segments);
        }
        rest = after.strip_prefix('[')?;
    }
}

/// Mutable key-value record flowing through a pipeline.
///
/// Filters only see events through this trait, so they never assume a fixed
/// schema. An event is owned by the calling worker for the duration of a
/// filter call.
pub trait Event: Send {
    /// Returns the value at `field`, or `None` if any segment is missing.
    fn get(&self, field: &FieldRef) -> Option<&Value>;

    /// Stores `value` at `field`, creating intermediate objects as needed.
    fn set(&mut self, field: &FieldRef, value: Value);
}

impl Event for Map<String, Value> {
    fn get(&self, field: &FieldRef) -> Option<&Value> {
        let (first, rest) = field.segments().split_first()?;
        let mut value = Map::get(self, first.as_str())?;
        for segment in rest {
            value = value.as_object()?.get(segment.as_str())?;
        }
        Some(value)
    }

    fn set(&mut self, field: &FieldRef, value: Value) {
        let Some((last, parents)) = field.segments().split_last() else {
            return;
        };

        let mut current = self;
        for segment in parents {
            let slot = current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(next) = slot else {
                return;
            };
            current = next;
        }

        current.insert(last.clone(), value);
    }
}
