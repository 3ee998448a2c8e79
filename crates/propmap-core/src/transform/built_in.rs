//! Built-in value transforms
//!
//! Pre-configured transforms for common conversions, registered by
//! [`TransformRegistry::with_built_ins`](super::TransformRegistry::with_built_ins).
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde_json::{Number, Value};

/// Return the value unchanged
pub fn identity(value: &Value) -> Result<Value> {
    Ok(value.clone())
}

/// Convert strings, numbers and booleans to a string
pub fn to_string(value: &Value) -> Result<Value> {
    match value {
        Value::String(_) => Ok(value.clone()),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        other => Err(conversion_error(other, "string")),
    }
}

/// Convert numeric strings and booleans to a number
pub fn to_number(value: &Value) -> Result<Value> {
    match value {
        Value::Number(_) => Ok(value.clone()),
        Value::Bool(b) => Ok(Value::Number(Number::from(u8::from(*b)))),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return Ok(Value::Number(Number::from(n)));
            }
            let parsed = trimmed.parse::<f64>().map_err(|e| {
                Error::transform_with_source(format!("cannot convert {} to number", value), e)
            })?;
            Number::from_f64(parsed)
                .map(Value::Number)
                .ok_or_else(|| conversion_error(value, "number"))
        }
        other => Err(conversion_error(other, "number")),
    }
}

/// Convert strings like `yes`/`off` and numbers to a boolean
pub fn to_boolean(value: &Value) -> Result<Value> {
    match value {
        Value::Bool(_) => Ok(value.clone()),
        Value::Number(n) => Ok(Value::Bool(n.as_f64().map(|f| f != 0.0).unwrap_or(true))),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(Value::Bool(true)),
            "false" | "no" | "0" | "off" => Ok(Value::Bool(false)),
            _ => Err(conversion_error(value, "boolean")),
        },
        other => Err(conversion_error(other, "boolean")),
    }
}

pub fn uppercase(value: &Value) -> Result<Value> {
    map_string(value, "uppercase", |s| s.to_uppercase())
}

pub fn lowercase(value: &Value) -> Result<Value> {
    map_string(value, "lowercase", |s| s.to_lowercase())
}

pub fn trim(value: &Value) -> Result<Value> {
    map_string(value, "trim", |s| s.trim().to_string())
}

fn map_string(value: &Value, name: &str, f: impl Fn(&str) -> String) -> Result<Value> {
    value
        .as_str()
        .map(|s| Value::String(f(s)))
        .ok_or_else(|| Error::transform(format!("{} expects a string, got {}", name, value)))
}

fn conversion_error(value: &Value, to: &str) -> Error {
    Error::transform(format!("cannot convert {} to {}", value, to))
}
