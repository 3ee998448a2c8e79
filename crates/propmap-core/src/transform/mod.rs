//! Value transforms applied by property mappings
//!
//! A transform converts the value read from one side of a property mapping
//! before it is written to the other side. Transforms are plain closures;
//! the [`TransformRegistry`] gives them names so that mapping documents can
//! reference them as data.
//!
//! # Examples
//!
//! ```
//! use propmap_core::transform::TransformRegistry;
//! use serde_json::json;
//!
//! let mut registry = TransformRegistry::with_built_ins();
//! registry.register("exclaim", |value| {
//!     Ok(json!(format!("{}!", value.as_str().unwrap_or_default())))
//! });
//!
//! let exclaim = registry.resolve("exclaim").unwrap();
//! assert_eq!(exclaim(&json!("hi")).unwrap(), json!("hi!"));
//! assert!(registry.resolve("missing").is_err());
//! ```
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

pub mod built_in;

use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A function converting one value into another
pub type TransformFn = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Wrap a closure as a [`TransformFn`]
pub fn transform_fn<F>(f: F) -> TransformFn
where
    F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Named transforms available to mapping documents
#[derive(Clone)]
pub struct TransformRegistry {
    transforms: HashMap<String, TransformFn>,
}

impl TransformRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    /// Create a registry holding the built-in transforms
    pub fn with_built_ins() -> Self {
        let mut registry = Self::new();
        registry
            .register("identity", built_in::identity)
            .register("to_string", built_in::to_string)
            .register("to_number", built_in::to_number)
            .register("to_boolean", built_in::to_boolean)
            .register("uppercase", built_in::uppercase)
            .register("lowercase", built_in::lowercase)
            .register("trim", built_in::trim);
        registry
    }

    /// Register a transform, replacing any previous one with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.transforms.insert(name.clone(), Arc::new(f)).is_some() {
            log::debug!("Replaced registered transform '{}'", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<TransformFn> {
        self.transforms.get(name).cloned()
    }

    /// Look up a transform, failing for unknown names
    pub fn resolve(&self, name: &str) -> Result<TransformFn> {
        self.get(name).ok_or_else(|| Error::UnknownTransform {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_built_ins()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.transforms.keys().collect();
        names.sort();
        f.debug_struct("TransformRegistry")
            .field("transforms", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_built_ins_registered() {
        let registry = TransformRegistry::default();
        for name in ["identity", "to_string", "to_number", "to_boolean", "uppercase", "lowercase", "trim"] {
            assert!(registry.contains(name), "missing built-in {}", name);
        }
        assert!(!TransformRegistry::new().contains("identity"));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = TransformRegistry::with_built_ins();
        registry.register("uppercase", |_| Ok(json!("replaced")));

        let uppercase = registry.resolve("uppercase").unwrap();
        assert_eq!(uppercase(&json!("abc")).unwrap(), json!("replaced"));
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = TransformRegistry::new();
        let err = registry.resolve("rot13").err().unwrap();
        assert!(matches!(err, Error::UnknownTransform { ref name } if name == "rot13"));
    }

    #[test]
    fn test_debug_lists_names() {
        let mut registry = TransformRegistry::new();
        registry.register("b", built_in::identity).register("a", built_in::identity);
        assert_eq!(format!("{:?}", registry), r#"TransformRegistry { transforms: ["a", "b"] }"#);
    }
}
