//! Mapping documents
//!
//! A mapping document describes a whole [`ObjectMapper`] as JSON, so mapping
//! definitions can live in configuration rather than code:
//!
//! ```json
//! {
//!   "config": {"default_policy": "defined"},
//!   "simple": ["id", "email"],
//!   "properties": [
//!     {"from": "lastName", "to": "surname", "transform": "uppercase",
//!      "reverseTransform": "lowercase"},
//!     {"from": "age", "default": 18}
//!   ]
//! }
//! ```
//!
//! Simple assignments are added first, then property descriptors in order.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use crate::config::MapperConfig;
use crate::error::{Error, Result};
use crate::mapper::ObjectMapper;
use crate::transform::TransformRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Serialized definition of a mapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingDocument {
    /// Mapper configuration
    pub config: MapperConfig,
    /// Property names copied unchanged in both directions
    pub simple: Vec<String>,
    /// Property mapping descriptors, validated when the mapper is built
    pub properties: Vec<Value>,
}

impl MappingDocument {
    /// Parse a document from a JSON string
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::Configuration {
            message: format!("Failed to parse mapping document: {}", e),
            source: Some(e.into()),
        })
    }

    /// Load a document from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            message: format!("Failed to read mapping document {}: {}", path.display(), e),
            source: e,
        })?;
        log::debug!("Loading mapping document from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Build a mapper, resolving transform names through `registry`
    pub fn build(&self, registry: &TransformRegistry) -> Result<ObjectMapper> {
        let mut mapper = ObjectMapper::with_config(self.config.clone());
        mapper.add_simple_properties_assignments(&self.simple)?;

        for (index, descriptor) in self.properties.iter().enumerate() {
            mapper
                .add_property_mapping_value(descriptor, registry)
                .inspect_err(|e| log::debug!("Property mapping #{} rejected: {}", index, e))?;
        }

        log::debug!(
            "Built mapper from document ({} simple, {} property mappings)",
            self.simple.len(),
            self.properties.len()
        );
        Ok(mapper)
    }
}
