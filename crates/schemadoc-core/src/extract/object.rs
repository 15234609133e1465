//! Object property extraction and ordering
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::field::extract_field;
use crate::model::Field;
use crate::options::ExtractOptions;
use serde_json::Value;

/// Extract the properties of an object node as ordered fields at `depth`
///
/// Declaration order is kept, then fields are stably re-ordered: tagged
/// (discriminator) fields first, required fields next, optional fields last.
pub fn extract_object_fields(schema: &Value, options: &ExtractOptions, depth: usize) -> Vec<Field> {
    let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
        return Vec::new();
    };
    let required = required_names(schema);

    let mut fields: Vec<Field> = properties
        .iter()
        .map(|(name, property)| {
            let is_required = required.contains(&name.as_str());
            extract_field(name, property, is_required, options, depth)
        })
        .collect();

    sort_fields(&mut fields);
    fields
}

/// Names listed in a node's `required` array
pub fn required_names(schema: &Value) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Stable ordering: tagged fields, then required, then optional
pub fn sort_fields(fields: &mut [Field]) {
    fields.sort_by_key(field_rank);
}

fn field_rank(field: &Field) -> u8 {
    if field.is_discriminator_tagged() {
        0
    } else if field.is_required {
        1
    } else {
        2
    }
}
