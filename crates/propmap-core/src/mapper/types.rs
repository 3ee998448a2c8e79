//! Core types for the mapping engine
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use crate::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A mapping function: reads from the first argument and writes into the
/// accumulator passed as the second.
///
/// Custom rules and compiled property mappings share this one shape.
pub type MappingFn = Arc<dyn Fn(&Value, &mut Value) -> Result<()> + Send + Sync>;

/// Direction a mapping runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingDirection {
    /// Source to target (`map`)
    Forward,
    /// Target back to source (`reverse_map`)
    Reverse,
}

/// A stored rule; either side may be absent and is then skipped
#[derive(Clone, Default)]
pub struct MappingRule {
    forward: Option<MappingFn>,
    backward: Option<MappingFn>,
}

impl MappingRule {
    /// Rule that only participates in forward mapping
    pub fn forward(mapping: MappingFn) -> Self {
        Self {
            forward: Some(mapping),
            backward: None,
        }
    }

    /// Rule that only participates in reverse mapping
    pub fn backward(mapping: MappingFn) -> Self {
        Self {
            forward: None,
            backward: Some(mapping),
        }
    }

    /// The side of the rule used for `direction`
    pub fn function(&self, direction: MappingDirection) -> Option<&MappingFn> {
        match direction {
            MappingDirection::Forward => self.forward.as_ref(),
            MappingDirection::Reverse => self.backward.as_ref(),
        }
    }
}

impl fmt::Debug for MappingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRule")
            .field("forward", &self.forward.is_some())
            .field("backward", &self.backward.is_some())
            .finish()
    }
}
