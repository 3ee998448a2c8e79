//! Propmap Core - declarative bidirectional object-to-object property mapping
//!
//! This crate maps one JSON-shaped object onto another using an ordered list
//! of rules, and maps the result back again. It is intended for translating
//! between two object shapes (an API DTO and a domain model, say) without
//! writing field-copy code by hand.
//!
//! # Main Components
//!
//! - **Mapping Engine**: [`ObjectMapper`] holds the ordered rules and runs
//!   them forward (`map`) or backward (`reverse_map`)
//! - **Property Mappings**: [`PropertyMapping`] descriptors compiled into
//!   forward/backward rule pairs
//! - **Path Accessor**: dotted paths such as `articles.0.title`, see [`path`]
//! - **Transforms**: value conversions and the [`TransformRegistry`]
//! - **Mapping Documents**: whole mappers defined as JSON, see [`MappingDocument`]
//! - **Error Handling**: error types using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use propmap_core::{ObjectMapper, PropertyMapping, Result};
//! use serde_json::json;
//!
//! fn example() -> Result<()> {
//!     let mut mapper = ObjectMapper::new();
//!     mapper
//!         .add_simple_properties_assignments(["id"])?
//!         .add_property_mapping(
//!             PropertyMapping::new("lastName")
//!                 .to("surname")
//!                 .with_default("unknown"),
//!         )?;
//!
//!     let dto = mapper.map(&json!({"id": 1, "lastName": "Lee Jones"}))?;
//!     assert_eq!(dto, json!({"id": 1, "surname": "Lee Jones"}));
//!
//!     let model = mapper.reverse_map(&dto)?;
//!     assert_eq!(model, json!({"id": 1, "lastName": "Lee Jones"}));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod document;
pub mod error;
pub mod mapper;
pub mod path;
pub mod transform;

// Re-export main types for convenience
pub use config::{DefaultPolicy, MapperConfig};
pub use document::MappingDocument;
pub use error::{Error, InvalidDescriptorKind, Result};
pub use mapper::{MappingDirection, MappingFn, MappingRule, ObjectMapper, PropertyMapping};
pub use path::PropertyPath;
pub use transform::{TransformFn, TransformRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
