//! Mapper configuration
//!
//! Settings that change how compiled property mappings behave. Configuration
//! can be built in code or loaded from JSON, either standalone or embedded in
//! a mapping document.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// When a descriptor's `default` is substituted for an undefined source value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultPolicy {
    /// Any supplied default is used, including `null`, `false`, `0` and `""`
    #[default]
    Defined,
    /// Only truthy defaults are used; `null`, `false`, `0`, `""` and NaN are ignored
    Truthy,
}

impl DefaultPolicy {
    /// Whether `default` should be written under this policy
    pub fn accepts(&self, default: &Value) -> bool {
        match self {
            DefaultPolicy::Defined => true,
            DefaultPolicy::Truthy => is_truthy(default),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Configuration for an [`ObjectMapper`](crate::ObjectMapper)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Policy deciding whether a descriptor default is applied
    pub default_policy: DefaultPolicy,

    /// Replace scalars found in the middle of a target path with fresh
    /// containers instead of failing the write
    pub overwrite_scalars: bool,
}

impl MapperConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::Configuration {
            message: format!("Failed to parse mapper configuration: {}", e),
            source: Some(e.into()),
        })
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            message: format!("Failed to read config file {}: {}", path.display(), e),
            source: e,
        })?;
        log::debug!("Loading mapper configuration from {}", path.display());
        Self::from_json_str(&content)
    }

    /// Set the default policy
    pub fn with_default_policy(mut self, policy: DefaultPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Allow scalars on a target path to be replaced by containers
    pub fn with_overwrite_scalars(mut self, overwrite: bool) -> Self {
        self.overwrite_scalars = overwrite;
        self
    }
}
