//! Property mapping descriptors and their validation
//!
//! A descriptor declares a single property copy: read `from` on one side,
//! write `to` on the other, optionally transforming the value and falling
//! back to a default. Descriptors are built with a fluent API or parsed from
//! JSON, where transforms are referenced by registry name.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, InvalidDescriptorKind, Result};
use crate::transform::{transform_fn, TransformFn, TransformRegistry};
use serde_json::{Map, Value};
use std::fmt;

const NOT_AN_OBJECT: &str = "Property mapping descriptor must be an object";
const MISSING_FROM: &str = "\"from\" must be defined for property mapping descriptor";

/// Declarative description of one property mapping
#[derive(Clone, Default)]
pub struct PropertyMapping {
    /// Source path to read the value from
    pub from: Option<String>,
    /// Target path to write to; `from` is used when absent or empty
    pub to: Option<String>,
    /// Applied to the value during forward mapping
    pub transform: Option<TransformFn>,
    /// Applied to the value during reverse mapping
    pub reverse_transform: Option<TransformFn>,
    /// Written when the source value is undefined (forward mapping only)
    pub default: Option<Value>,
}

impl PropertyMapping {
    /// Start a descriptor reading from `from`
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::default()
        }
    }

    /// Set the target path
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set the forward transform
    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.transform = Some(transform_fn(f));
        self
    }

    /// Set the reverse transform
    pub fn reverse_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        self.reverse_transform = Some(transform_fn(f));
        self
    }

    /// Set the default written when the source value is undefined
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Check the descriptor can be compiled
    pub fn validate(&self) -> Result<()> {
        if self.from.is_none() {
            return Err(Error::invalid_descriptor(InvalidDescriptorKind::MissingFrom, MISSING_FROM));
        }
        Ok(())
    }

    /// Target path after applying the `to` fallback
    pub fn target_path(&self) -> Option<&str> {
        match self.to.as_deref() {
            Some(to) if !to.is_empty() => Some(to),
            _ => self.from.as_deref(),
        }
    }

    /// Parse a descriptor from JSON
    ///
    /// Recognized keys are `from`, `to`, `transform`, `reverseTransform`
    /// (or `reverse_transform`) and `default`. Transform names are resolved
    /// through `registry`. A `null` `to` or transform counts as absent; a
    /// `default` of `null` is a real default.
    pub fn from_value(descriptor: &Value, registry: &TransformRegistry) -> Result<Self> {
        let fields = descriptor.as_object().ok_or_else(|| {
            Error::invalid_descriptor(InvalidDescriptorKind::NotAnObject, NOT_AN_OBJECT)
        })?;

        let from = match fields.get("from") {
            None => {
                return Err(Error::invalid_descriptor(InvalidDescriptorKind::MissingFrom, MISSING_FROM))
            }
            Some(value) => string_field(value, "from")?,
        };

        let to = match fields.get("to") {
            None | Some(Value::Null) => None,
            Some(value) => Some(string_field(value, "to")?),
        };

        let transform = transform_field(fields, &["transform"], registry)?;
        let reverse_transform =
            transform_field(fields, &["reverseTransform", "reverse_transform"], registry)?;

        Ok(Self {
            from: Some(from),
            to,
            transform,
            reverse_transform,
            default: fields.get("default").cloned(),
        })
    }
}

fn string_field(value: &Value, name: &str) -> Result<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        Error::invalid_descriptor(
            InvalidDescriptorKind::InvalidField,
            format!("\"{}\" must be a string, got {}", name, value),
        )
    })
}

fn transform_field(
    fields: &Map<String, Value>,
    keys: &[&str],
    registry: &TransformRegistry,
) -> Result<Option<TransformFn>> {
    let Some((key, value)) = keys
        .iter()
        .find_map(|key| fields.get(*key).map(|value| (*key, value)))
    else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::String(name) => registry.resolve(name).map(Some),
        other => Err(Error::invalid_descriptor(
            InvalidDescriptorKind::InvalidField,
            format!("\"{}\" must name a registered transform, got {}", key, other),
        )),
    }
}

impl fmt::Debug for PropertyMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMapping")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("transform", &self.transform.is_some())
            .field("reverse_transform", &self.reverse_transform.is_some())
            .field("default", &self.default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> TransformRegistry {
        TransformRegistry::with_built_ins()
    }

    #[test]
    fn test_builder() {
        let descriptor = PropertyMapping::new("lastName")
            .to("surname")
            .transform(|v| Ok(v.clone()))
            .with_default("unknown");

        assert_eq!(descriptor.from.as_deref(), Some("lastName"));
        assert_eq!(descriptor.to.as_deref(), Some("surname"));
        assert!(descriptor.transform.is_some());
        assert!(descriptor.reverse_transform.is_none());
        assert_eq!(descriptor.default, Some(json!("unknown")));
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn test_missing_from() {
        let err = PropertyMapping::default().validate().unwrap_err();
        assert_eq!(err.descriptor_kind(), Some(InvalidDescriptorKind::MissingFrom));
        assert!(err.to_string().contains(MISSING_FROM));
    }

    #[test]
    fn test_target_path_falls_back_to_from() {
        assert_eq!(PropertyMapping::new("a").target_path(), Some("a"));
        assert_eq!(PropertyMapping::new("a").to("").target_path(), Some("a"));
        assert_eq!(PropertyMapping::new("a").to("b").target_path(), Some("b"));
        assert_eq!(PropertyMapping::default().target_path(), None);
    }

    #[test]
    fn test_from_value_not_an_object() {
        for descriptor in [json!("not an object"), json!(1), json!(["from"]), Value::Null] {
            let err = PropertyMapping::from_value(&descriptor, &registry()).unwrap_err();
            assert_eq!(err.descriptor_kind(), Some(InvalidDescriptorKind::NotAnObject));
        }
    }

    #[test]
    fn test_from_value_missing_from() {
        let err = PropertyMapping::from_value(&json!({}), &registry()).unwrap_err();
        assert_eq!(err.descriptor_kind(), Some(InvalidDescriptorKind::MissingFrom));

        let err = PropertyMapping::from_value(&json!({"to": "x"}), &registry()).unwrap_err();
        assert_eq!(err.descriptor_kind(), Some(InvalidDescriptorKind::MissingFrom));
    }

    #[test]
    fn test_from_value_invalid_fields() {
        for descriptor in [
            json!({"from": 1}),
            json!({"from": null}),
            json!({"from": "a", "to": ["b"]}),
            json!({"from": "a", "transform": true}),
        ] {
            let err = PropertyMapping::from_value(&descriptor, &registry()).unwrap_err();
            assert_eq!(err.descriptor_kind(), Some(InvalidDescriptorKind::InvalidField), "{}", descriptor);
        }
    }

    #[test]
    fn test_from_value_full() {
        let descriptor = PropertyMapping::from_value(
            &json!({
                "from": "age",
                "to": "profile.age",
                "transform": "to_number",
                "reverseTransform": "to_string",
                "default": 18,
                "comment": "ignored"
            }),
            &registry(),
        )
        .unwrap();

        assert_eq!(descriptor.from.as_deref(), Some("age"));
        assert_eq!(descriptor.target_path(), Some("profile.age"));
        assert_eq!(descriptor.default, Some(json!(18)));
        let transform = descriptor.transform.as_ref().unwrap();
        assert_eq!(transform(&json!("7")).unwrap(), json!(7));
        let reverse = descriptor.reverse_transform.as_ref().unwrap();
        assert_eq!(reverse(&json!(7)).unwrap(), json!("7"));
    }

    #[test]
    fn test_from_value_snake_case_and_nulls() {
        let descriptor = PropertyMapping::from_value(
            &json!({"from": "a", "to": null, "transform": null, "reverse_transform": "trim", "default": null}),
            &registry(),
        )
        .unwrap();

        assert_eq!(descriptor.to, None);
        assert!(descriptor.transform.is_none());
        assert!(descriptor.reverse_transform.is_some());
        assert_eq!(descriptor.default, Some(Value::Null));
    }

    #[test]
    fn test_from_value_unknown_transform() {
        let err = PropertyMapping::from_value(&json!({"from": "a", "transform": "rot13"}), &registry())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownTransform { ref name } if name == "rot13"));
    }
}
