//! Bidirectional object mapping engine
//!
//! An [`ObjectMapper`] holds an ordered list of mapping rules. `map` applies
//! the forward side of each rule, in insertion order, to a target that
//! starts out empty; `reverse_map` applies the backward sides the same way.
//! When two rules write the same target path, the later rule wins.
//!
//! # Module Organization
//!
//! - [`types`] - mapping function and rule types
//! - [`descriptor`] - property mapping descriptors and their validation
//! - [`compiler`] - turns descriptors into forward/backward functions
//!
//! # Examples
//!
//! ```
//! use propmap_core::{ObjectMapper, PropertyMapping};
//! use serde_json::json;
//!
//! let mut mapper = ObjectMapper::new();
//! mapper
//!     .add_property_mapping(PropertyMapping::new("author.name").to("authorName"))?
//!     .add_property_mapping(PropertyMapping::new("tags.0").to("lastTag"))?;
//!
//! let target = mapper.map(&json!({
//!     "author": {"name": "Lukasz", "surname": "Kuzynski"},
//!     "tags": ["rpc", "http", "api"]
//! }))?;
//! assert_eq!(target, json!({"authorName": "Lukasz", "lastTag": "rpc"}));
//!
//! let source = mapper.reverse_map(&target)?;
//! assert_eq!(source, json!({"author": {"name": "Lukasz"}, "tags": ["rpc"]}));
//! # Ok::<(), propmap_core::Error>(())
//! ```
//!
//! Custom rules receive the read side and a mutable accumulator. A failing
//! rule stops the fold; rules that ran before it stay applied to the
//! accumulator handed to [`ObjectMapper::map_into`].
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

pub mod compiler;
pub mod descriptor;
pub mod types;


pub use compiler::{compile, CompiledMapping};
pub use descriptor::PropertyMapping;
pub use types::{MappingDirection, MappingFn, MappingRule};

use crate::config::MapperConfig;
use crate::transform::TransformRegistry;
use crate::Result;
use serde_json::Value;
use std::sync::Arc;

/// Ordered collection of mapping rules
#[derive(Debug, Clone, Default)]
pub struct ObjectMapper {
    /// Rules in application order
    mappings: Vec<MappingRule>,
    /// Settings applied when compiling property mappings
    config: MapperConfig,
}

impl ObjectMapper {
    /// Create a mapper with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with no rules and the given configuration
    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            mappings: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Append a rule that only runs during `map`
    pub fn add_mapping<F>(&mut self, mapping: F) -> &mut Self
    where
        F: Fn(&Value, &mut Value) -> Result<()> + Send + Sync + 'static,
    {
        self.push_forward(Arc::new(mapping))
    }

    /// Append a rule that only runs during `reverse_map`
    pub fn add_reverse_mapping<F>(&mut self, reverse_mapping: F) -> &mut Self
    where
        F: Fn(&Value, &mut Value) -> Result<()> + Send + Sync + 'static,
    {
        self.push_backward(Arc::new(reverse_mapping))
    }

    /// Append a forward rule followed by a reverse rule
    ///
    /// These are two separate entries, not one paired rule.
    pub fn add_both_mappings<F, R>(&mut self, mapping: F, reverse_mapping: R) -> &mut Self
    where
        F: Fn(&Value, &mut Value) -> Result<()> + Send + Sync + 'static,
        R: Fn(&Value, &mut Value) -> Result<()> + Send + Sync + 'static,
    {
        self.add_mapping(mapping).add_reverse_mapping(reverse_mapping)
    }

    /// Validate and compile a property mapping, then append its forward and
    /// backward functions
    ///
    /// Nothing is appended when the descriptor is invalid.
    pub fn add_property_mapping(&mut self, descriptor: PropertyMapping) -> Result<&mut Self> {
        let compiled = compile(descriptor, &self.config)?;
        Ok(self.push_forward(compiled.forward).push_backward(compiled.backward))
    }

    /// Parse a JSON property mapping descriptor and add it
    ///
    /// Transform names in the descriptor are resolved through `registry`.
    pub fn add_property_mapping_value(
        &mut self,
        descriptor: &Value,
        registry: &TransformRegistry,
    ) -> Result<&mut Self> {
        let descriptor = PropertyMapping::from_value(descriptor, registry)?;
        self.add_property_mapping(descriptor)
    }

    /// Add a straight copy for each name, keeping the same path on both sides
    pub fn add_simple_properties_assignments<I>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            self.add_property_mapping(PropertyMapping::new(name).to(name))?;
        }
        Ok(self)
    }

    /// Map `source` into a new object
    pub fn map(&self, source: &Value) -> Result<Value> {
        let mut target = Value::Object(serde_json::Map::new());
        self.map_into(source, &mut target)?;
        Ok(target)
    }

    /// Map `source` into an existing target, mutating it in place
    pub fn map_into(&self, source: &Value, target: &mut Value) -> Result<()> {
        self.run_mapping(MappingDirection::Forward, source, target)
    }

    /// Reverse-map `target` into a new object
    pub fn reverse_map(&self, target: &Value) -> Result<Value> {
        let mut source = Value::Object(serde_json::Map::new());
        self.reverse_map_into(target, &mut source)?;
        Ok(source)
    }

    /// Reverse-map `target` into an existing source, mutating it in place
    pub fn reverse_map_into(&self, target: &Value, source: &mut Value) -> Result<()> {
        self.run_mapping(MappingDirection::Reverse, target, source)
    }

    fn run_mapping(&self, direction: MappingDirection, read: &Value, accumulator: &mut Value) -> Result<()> {
        log::trace!("Running {} mapping rules ({:?})", self.mappings.len(), direction);
        for mapping in self.mappings.iter().filter_map(|rule| rule.function(direction)) {
            mapping(read, accumulator)?;
        }
        Ok(())
    }

    fn push_forward(&mut self, mapping: MappingFn) -> &mut Self {
        self.mappings.push(MappingRule::forward(mapping));
        self
    }

    fn push_backward(&mut self, mapping: MappingFn) -> &mut Self {
        self.mappings.push(MappingRule::backward(mapping));
        self
    }
}
