//! Compiles property mapping descriptors into mapping functions
//!
//! A descriptor becomes two independent closures. The forward closure reads
//! `from` and writes `to`; the backward closure reads `to` and writes `from`.
//! Paths are parsed once here rather than on every call.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use super::descriptor::PropertyMapping;
use super::types::MappingFn;
use crate::config::MapperConfig;
use crate::error::{Error, InvalidDescriptorKind, Result};
use crate::path::PropertyPath;
use crate::transform::TransformFn;
use serde_json::Value;
use std::sync::Arc;

/// Forward and backward functions compiled from one descriptor
pub struct CompiledMapping {
    pub forward: MappingFn,
    pub backward: MappingFn,
}

/// Validate and compile a descriptor
///
/// The default value only ever takes part in the forward direction, and is
/// dropped here when `config.default_policy` rejects it.
pub fn compile(descriptor: PropertyMapping, config: &MapperConfig) -> Result<CompiledMapping> {
    descriptor.validate()?;

    let to = descriptor.target_path().map(str::to_string);
    let PropertyMapping {
        from,
        transform,
        reverse_transform,
        default,
        ..
    } = descriptor;
    let (Some(from), Some(to)) = (from, to) else {
        return Err(Error::invalid_descriptor(
            InvalidDescriptorKind::MissingFrom,
            "\"from\" must be defined for property mapping descriptor",
        ));
    };

    let from = PropertyPath::parse(&from);
    let to = PropertyPath::parse(&to);
    let default = default.filter(|value| {
        let accepted = config.default_policy.accepts(value);
        if !accepted {
            log::debug!(
                "Default {} for '{}' ignored under {:?} policy",
                value,
                from,
                config.default_policy
            );
        }
        accepted
    });

    log::debug!("Compiled property mapping '{}' -> '{}'", from, to);

    Ok(CompiledMapping {
        forward: property_mapping_fn(from.clone(), to.clone(), transform, default, config.overwrite_scalars),
        backward: property_mapping_fn(to, from, reverse_transform, None, config.overwrite_scalars),
    })
}

fn property_mapping_fn(
    read: PropertyPath,
    write: PropertyPath,
    transform: Option<TransformFn>,
    default: Option<Value>,
    overwrite_scalars: bool,
) -> MappingFn {
    Arc::new(move |source: &Value, target: &mut Value| -> Result<()> {
        let Some(value) = read.get(source) else {
            if let Some(default) = &default {
                log::trace!("'{}' is undefined, writing default to '{}'", read, write);
                write.write(target, default.clone(), overwrite_scalars)?;
            }
            return Ok(());
        };

        let value = match &transform {
            Some(transform) => transform(value)?,
            None => value.clone(),
        };
        write.write(target, value, overwrite_scalars)
    })
}
