//! Path segments
//!
//! A dotted path is split on `.` into segments. A segment written as a
//! canonical non-negative decimal integer (`0`, `7`, `42`, but not `07` or
//! `-1`) is an index; everything else is an object key.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// One step of a dotted path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object key
    Key(String),
    /// Array index; addresses the key of the same text on objects
    Index(usize),
}

impl Segment {
    /// Classify a raw segment
    pub fn parse(raw: &str) -> Self {
        if is_canonical_index(raw) {
            if let Ok(index) = raw.parse::<usize>() {
                return Segment::Index(index);
            }
        }
        Segment::Key(raw.to_string())
    }

    /// The segment as an object key
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            Segment::Key(key) => Cow::Borrowed(key.as_str()),
            Segment::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    /// Whether a container of this shape can be addressed by the segment
    pub(crate) fn addresses(&self, value: &Value) -> bool {
        matches!(
            (value, self),
            (Value::Object(_), _) | (Value::Array(_), Segment::Index(_))
        )
    }

    /// Empty container materialized when the segment has nothing to descend into
    pub(crate) fn empty_container(&self) -> Value {
        match self {
            Segment::Key(_) => Value::Object(serde_json::Map::new()),
            Segment::Index(_) => Value::Array(Vec::new()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{}", key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

fn is_canonical_index(raw: &str) -> bool {
    !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'))
}
