//! Type classification of JSON-Schema nodes
//!
//! Several predicates can match the same node, so the checks below run in a
//! fixed order and the first match wins. `oneOf`/`anyOf` are checked before
//! `allOf`; an intersection is only folded into `object` when no alternative
//! set is present on the same node.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::model::FieldKind;
use serde_json::Value;

/// Classify an (already nullability-unwrapped) node into one field kind
pub fn classify(schema: &Value) -> FieldKind {
    if schema.get("enum").is_some() || schema.get("const").is_some() {
        return FieldKind::Enum;
    }

    if alternatives(schema).is_some() {
        return FieldKind::Union;
    }

    if schema.get("allOf").is_some() {
        return FieldKind::Object;
    }

    match schema.get("type") {
        Some(Value::Array(types)) if types.len() > 1 => FieldKind::Union,
        Some(Value::Array(types)) => types
            .first()
            .and_then(Value::as_str)
            .map(|type_name| classify_named(type_name, schema))
            .unwrap_or(FieldKind::Any),
        Some(Value::String(type_name)) => classify_named(type_name, schema),
        _ => FieldKind::Any,
    }
}

fn classify_named(type_name: &str, schema: &Value) -> FieldKind {
    match type_name {
        "object" if is_record(schema) => FieldKind::Record,
        "object" => FieldKind::Object,
        "array" if tuple_items(schema).is_some() => FieldKind::Tuple,
        "array" => FieldKind::Array,
        "string" if schema.get("format").and_then(Value::as_str) == Some("date-time") => {
            FieldKind::Date
        }
        "string" => FieldKind::String,
        "number" => FieldKind::Number,
        "integer" => FieldKind::Integer,
        "boolean" => FieldKind::Boolean,
        _ => FieldKind::Any,
    }
}

/// Kind for a bare JSON-Schema type name, as listed in a `type` array
pub fn kind_for_type_name(type_name: &str) -> FieldKind {
    match type_name {
        "string" => FieldKind::String,
        "number" => FieldKind::Number,
        "integer" => FieldKind::Integer,
        "boolean" => FieldKind::Boolean,
        "object" => FieldKind::Object,
        "array" => FieldKind::Array,
        _ => FieldKind::Any,
    }
}

/// An object whose only structure is an `additionalProperties` schema
fn is_record(schema: &Value) -> bool {
    schema.get("properties").is_none()
        && matches!(
            schema.get("additionalProperties"),
            Some(Value::Object(_)) | Some(Value::Bool(true))
        )
}

/// The `oneOf` or `anyOf` branch list of a node, `oneOf` preferred
pub fn alternatives(schema: &Value) -> Option<&Vec<Value>> {
    schema
        .get("oneOf")
        .and_then(Value::as_array)
        .or_else(|| schema.get("anyOf").and_then(Value::as_array))
}

/// Positional item schemas of a fixed-length array (`items` array or `prefixItems`)
pub fn tuple_items(schema: &Value) -> Option<&Vec<Value>> {
    schema
        .get("items")
        .and_then(Value::as_array)
        .or_else(|| schema.get("prefixItems").and_then(Value::as_array))
}

/// Coarse label for a union branch, computed without recursion
pub fn variant_type_name(schema: &Value) -> String {
    if schema.get("enum").is_some() || schema.get("const").is_some() {
        return FieldKind::Enum.as_str().to_string();
    }
    if schema.get("properties").is_some() {
        return FieldKind::Object.as_str().to_string();
    }
    match schema.get("type") {
        Some(Value::String(type_name)) => type_name.clone(),
        Some(Value::Array(types)) if types.len() > 1 => FieldKind::Union.as_str().to_string(),
        _ if alternatives(schema).is_some() => FieldKind::Union.as_str().to_string(),
        _ => FieldKind::Any.as_str().to_string(),
    }
}

/// Whether a node is the bare `{type: "null"}` branch
pub fn is_null_schema(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}
