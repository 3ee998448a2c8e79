//! Maps a nested blog export onto a flat DTO and back
//!
//! Run with `cargo run -p propmap-core --example basic`.
//!
//! Copyright (c) 2025 Propmap Team
//! Licensed under the Apache-2.0 license

use propmap_core::{ObjectMapper, PropertyMapping, Result};
use serde_json::json;

fn main() -> Result<()> {
    let mut mapper = ObjectMapper::new();
    mapper
        .add_property_mapping(PropertyMapping::new("author.name").to("authorName"))?
        .add_property_mapping(PropertyMapping::new("tags.0").to("lastTag"))?;

    let source = json!({
        "author": {
            "name": "Lukasz",
            "surname": "Kuzynski"
        },
        "tags": ["rpc", "http", "api"]
    });

    let target = mapper.map(&source)?;
    println!("{}", serde_json::to_string_pretty(&target)?);

    let restored = mapper.reverse_map(&target)?;
    println!("{}", serde_json::to_string_pretty(&restored)?);
    Ok(())
}
