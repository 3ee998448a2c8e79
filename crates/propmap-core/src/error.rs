//! Error types for the Propmap core library
//!
//! This module defines the error handling system for Propmap, using thiserror
//! for error definitions and anyhow for wrapping failures raised by user code.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for Propmap operations
#[derive(Error, Debug)]
pub enum Error {
    /// A property mapping descriptor was rejected before compilation
    #[error("Invalid property mapping descriptor ({kind}): {message}")]
    InvalidDescriptor {
        kind: InvalidDescriptorKind,
        message: String,
    },

    /// A value could not be written at a path
    #[error("Path error at '{path}': {message}")]
    Path { path: String, message: String },

    /// A transform or custom mapping function failed
    #[error("Transform failed: {message}")]
    Transform {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A descriptor referenced a transform name that is not registered
    #[error("Unknown transform: {name}")]
    UnknownTransform { name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a property mapping descriptor can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidDescriptorKind {
    /// The descriptor is not a key-value structure
    NotAnObject,
    /// The descriptor has no `from` path
    MissingFrom,
    /// A field is present but has a type that cannot be used
    InvalidField,
}

impl fmt::Display for InvalidDescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDescriptorKind::NotAnObject => write!(f, "NotAnObject"),
            InvalidDescriptorKind::MissingFrom => write!(f, "MissingFrom"),
            InvalidDescriptorKind::InvalidField => write!(f, "InvalidField"),
        }
    }
}

impl Error {
    /// Create a descriptor validation error
    pub fn invalid_descriptor(kind: InvalidDescriptorKind, message: impl Into<String>) -> Self {
        Error::InvalidDescriptor {
            kind,
            message: message.into(),
        }
    }

    /// Create a path error
    pub fn path(path: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Path {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a transform error without an underlying cause
    ///
    /// This is the constructor user-supplied transforms and mapping functions
    /// are expected to reach for when they reject a value.
    pub fn transform(message: impl Into<String>) -> Self {
        Error::Transform {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transform error wrapping another error
    pub fn transform_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Error::Transform {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Descriptor kind, when this is a descriptor validation error
    pub fn descriptor_kind(&self) -> Option<InvalidDescriptorKind> {
        match self {
            Error::InvalidDescriptor { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
