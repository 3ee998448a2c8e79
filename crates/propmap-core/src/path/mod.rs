//! Dotted-path accessor for reading and writing nested values
//!
//! Paths such as `author.name` or `articles.0.title` address values inside
//! a `serde_json::Value` graph. Reads short-circuit to `None` as soon as a
//! segment is missing or cannot be indexed. Writes create the intermediate
//! objects and arrays needed to reach the final segment.
//!
//! # Examples
//!
//! ```
//! use propmap_core::path;
//! use serde_json::json;
//!
//! let mut target = json!({});
//! path::set(&mut target, "tags.1", json!("http")).unwrap();
//! assert_eq!(target, json!({"tags": [null, "http"]}));
//! assert_eq!(path::get(&target, "tags.1"), Some(&json!("http")));
//! assert_eq!(path::get(&target, "tags.5"), None);
//! ```
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

pub mod segment;


pub use segment::Segment;

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;

/// Longest array a write may grow
///
/// Writing at an index past the end of an array pads it with `null`. An index
/// at or above this bound fails with [`Error::Path`] instead, unless the array
/// is already long enough to hold it.
pub const MAX_ARRAY_LEN: usize = 1 << 20;

/// A pre-parsed dotted path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<Segment>,
}

impl PropertyPath {
    /// Parse a dotted path; the empty string addresses the root
    pub fn parse(path: &str) -> Self {
        let segments = if path.is_empty() {
            Vec::new()
        } else {
            path.split('.').map(Segment::parse).collect()
        };
        Self {
            raw: path.to_string(),
            segments,
        }
    }

    /// The path as originally written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolve the path against `root`
    pub fn get<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| child(current, segment))
    }

    /// Write `value` at the path, failing if a scalar is in the way
    pub fn set(&self, root: &mut Value, value: Value) -> Result<()> {
        self.write(root, value, false)
    }

    /// Write `value` at the path, replacing any scalar in the way with a
    /// fresh container
    pub fn set_replacing_scalars(&self, root: &mut Value, value: Value) -> Result<()> {
        self.write(root, value, true)
    }

    pub(crate) fn write(&self, root: &mut Value, value: Value, overwrite_scalars: bool) -> Result<()> {
        let Some((last, parents)) = self.segments.split_last() else {
            *root = value;
            return Ok(());
        };
        self.check_array_growth(root)?;

        let mut current = root;
        for segment in parents {
            current = self.child_slot(current, segment, overwrite_scalars)?;
        }
        *self.child_slot(current, last, overwrite_scalars)? = value;
        Ok(())
    }

    /// Fail before mutating anything if the write would grow an array to
    /// [`MAX_ARRAY_LEN`] elements or more
    fn check_array_growth(&self, root: &Value) -> Result<()> {
        let mut current = Some(root);
        for segment in &self.segments {
            if let Segment::Index(index) = segment {
                // Anything that is not an object ends up as an array here
                let len = match current {
                    Some(Value::Object(_)) => None,
                    Some(Value::Array(items)) => Some(items.len()),
                    _ => Some(0),
                };
                if matches!(len, Some(len) if *index >= len && *index >= MAX_ARRAY_LEN) {
                    return Err(Error::path(
                        &self.raw,
                        format!("index {} exceeds the maximum array length {}", index, MAX_ARRAY_LEN),
                    ));
                }
            }
            current = current.and_then(|value| child(value, segment));
        }
        Ok(())
    }

    /// Slot addressed by `segment` inside `current`, created as `null` when
    /// missing. A `null` container is replaced by an empty one.
    fn child_slot<'a>(
        &self,
        current: &'a mut Value,
        segment: &Segment,
        overwrite_scalars: bool,
    ) -> Result<&'a mut Value> {
        if current.is_null() || (overwrite_scalars && !segment.addresses(current)) {
            *current = segment.empty_container();
        }

        match current {
            Value::Object(map) => Ok(map.entry(segment.key().into_owned()).or_insert(Value::Null)),
            Value::Array(items) => match segment {
                Segment::Index(index) => {
                    let len = index.checked_add(1).ok_or_else(|| {
                        Error::path(&self.raw, format!("index {} is out of range", index))
                    })?;
                    if items.len() < len {
                        items.resize(len, Value::Null);
                    }
                    Ok(&mut items[*index])
                }
                Segment::Key(key) => Err(Error::path(
                    &self.raw,
                    format!("cannot address array with non-numeric segment '{}'", key),
                )),
            },
            other => Err(Error::path(
                &self.raw,
                format!("cannot descend into {} at segment '{}'", value_kind(other), segment),
            )),
        }
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

fn child<'a>(current: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match current {
        Value::Object(map) => map.get(&*segment.key()),
        Value::Array(items) => match segment {
            Segment::Index(index) => items.get(*index),
            Segment::Key(_) => None,
        },
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve a dotted path against `root`
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    PropertyPath::parse(path).get(root)
}

/// Write `value` at a dotted path inside `root`
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    PropertyPath::parse(path).set(root, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "author": {"name": "Lukasz", "surname": "Kuzynski"},
            "tags": ["rpc", "http", "api"],
            "counts": {"0": "zero"},
            "nothing": null
        })
    }

    #[test]
    fn test_get_nested_property() {
        let data = sample();
        assert_eq!(get(&data, "author.name"), Some(&json!("Lukasz")));
        assert_eq!(get(&data, "author"), Some(&json!({"name": "Lukasz", "surname": "Kuzynski"})));
    }

    #[test]
    fn test_get_array_index() {
        let data = sample();
        assert_eq!(get(&data, "tags.0"), Some(&json!("rpc")));
        assert_eq!(get(&data, "tags.2"), Some(&json!("api")));
        assert_eq!(get(&data, "tags.3"), None);
    }

    #[test]
    fn test_get_numeric_segment_on_object() {
        let data = sample();
        assert_eq!(get(&data, "counts.0"), Some(&json!("zero")));
    }

    #[test]
    fn test_get_missing_short_circuits() {
        let data = sample();
        assert_eq!(get(&data, "author.age"), None);
        assert_eq!(get(&data, "publisher.name"), None);
        assert_eq!(get(&data, "author.name.first"), None);
        assert_eq!(get(&data, "tags.length"), None);
        assert_eq!(get(&data, "nothing.inner"), None);
    }

    #[test]
    fn test_get_null_is_defined() {
        let data = sample();
        assert_eq!(get(&data, "nothing"), Some(&Value::Null));
    }

    #[test]
    fn test_get_root() {
        let data = sample();
        assert_eq!(get(&data, ""), Some(&data));
    }

    #[test]
    fn test_set_creates_intermediate_objects() {
        let mut target = json!({});
        set(&mut target, "a.b.c", json!(1)).unwrap();
        assert_eq!(target, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_set_creates_intermediate_arrays() {
        let mut target = json!({});
        set(&mut target, "items.0.title", json!("T1")).unwrap();
        assert_eq!(target, json!({"items": [{"title": "T1"}]}));

        set(&mut target, "items.2", json!("T3")).unwrap();
        assert_eq!(target, json!({"items": [{"title": "T1"}, null, "T3"]}));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let mut target = json!({"a": {"b": 1, "keep": true}});
        set(&mut target, "a.b", json!({"nested": 2})).unwrap();
        assert_eq!(target, json!({"a": {"b": {"nested": 2}, "keep": true}}));
    }

    #[test]
    fn test_set_numeric_segment_on_existing_object() {
        let mut target = json!({"map": {}});
        set(&mut target, "map.0", json!("x")).unwrap();
        assert_eq!(target, json!({"map": {"0": "x"}}));
    }

    #[test]
    fn test_set_replaces_null_intermediate() {
        let mut target = json!({"a": null});
        set(&mut target, "a.b", json!(1)).unwrap();
        assert_eq!(target, json!({"a": {"b": 1}}));

        let mut target = Value::Null;
        set(&mut target, "x", json!(1)).unwrap();
        assert_eq!(target, json!({"x": 1}));
    }

    #[test]
    fn test_set_through_scalar_fails() {
        let mut target = json!({"a": "text"});
        let err = set(&mut target, "a.b", json!(1)).unwrap_err();
        assert!(matches!(err, Error::Path { ref path, .. } if path == "a.b"));
        assert_eq!(target, json!({"a": "text"}));
    }

    #[test]
    fn test_set_key_on_array_fails() {
        let mut target = json!({"a": [1, 2]});
        let err = set(&mut target, "a.name", json!(1)).unwrap_err();
        assert!(err.to_string().contains("non-numeric segment 'name'"));
    }

    #[test]
    fn test_set_huge_index_fails_without_changes() {
        let mut target = json!({"tags": ["rpc"]});
        for path in ["tags.18446744073709551615", "tags.4000000000", "fresh.list.4000000000"] {
            let err = set(&mut target, path, json!(1)).unwrap_err();
            assert!(matches!(err, Error::Path { path: ref p, .. } if p == path));
            assert!(err.to_string().contains("maximum array length"));
        }
        assert_eq!(target, json!({"tags": ["rpc"]}));

        let err = PropertyPath::parse("n.4000000000")
            .set_replacing_scalars(&mut json!({"n": 5}), json!(1))
            .unwrap_err();
        assert!(matches!(err, Error::Path { .. }));
    }

    #[test]
    fn test_set_large_numeric_key_on_object() {
        let mut target = json!({"ids": {}});
        set(&mut target, "ids.18446744073709551615", json!(true)).unwrap();
        assert_eq!(target, json!({"ids": {"18446744073709551615": true}}));
        assert_eq!(get(&target, "ids.18446744073709551615"), Some(&json!(true)));
    }

    #[test]
    fn test_set_grows_array_up_to_limit() {
        let mut target = json!({});
        set(&mut target, &format!("items.{}", MAX_ARRAY_LEN - 1), json!("last")).unwrap();
        let items = target["items"].as_array().unwrap();
        assert_eq!(items.len(), MAX_ARRAY_LEN);
        assert_eq!(items[MAX_ARRAY_LEN - 1], json!("last"));

        let err = set(&mut target, &format!("items.{}", MAX_ARRAY_LEN), json!(1)).unwrap_err();
        assert!(matches!(err, Error::Path { .. }));
    }

    #[test]
    fn test_set_replacing_scalars() {
        let path = PropertyPath::parse("a.b");
        let mut target = json!({"a": "text"});
        path.set_replacing_scalars(&mut target, json!(1)).unwrap();
        assert_eq!(target, json!({"a": {"b": 1}}));

        let path = PropertyPath::parse("list.key");
        let mut target = json!({"list": [1]});
        path.set_replacing_scalars(&mut target, json!(2)).unwrap();
        assert_eq!(target, json!({"list": {"key": 2}}));
    }

    #[test]
    fn test_set_root_replaces_value() {
        let mut target = json!({"old": true});
        set(&mut target, "", json!([1, 2])).unwrap();
        assert_eq!(target, json!([1, 2]));
    }

    #[test]
    fn test_parsed_path_accessors() {
        let path = PropertyPath::from("articles.0.title");
        assert_eq!(path.as_str(), "articles.0.title");
        assert_eq!(path.to_string(), "articles.0.title");
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("articles".to_string()),
                Segment::Index(0),
                Segment::Key("title".to_string()),
            ]
        );
        assert!(!path.is_root());
        assert!(PropertyPath::parse("").is_root());
    }
}
