//! Recursive field extraction
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::classify::{alternatives, classify, kind_for_type_name, tuple_items};
use super::constraints::{extract_constraints, scalar_text};
use super::examples::{extract_description, extract_examples};
use super::nullable::unwrap_nullable;
use super::object::extract_object_fields;
use super::union::{resolve_union, UnionResolution};
use crate::model::{Field, FieldKind, FieldType, TypeRef};
use crate::options::ExtractOptions;
use serde_json::Value;
use tracing::trace;

/// Name of the synthetic field describing array and tuple items
pub const ITEM_FIELD_NAME: &str = "item";

/// Name of the synthetic field describing record values
pub const VALUE_FIELD_NAME: &str = "value";

/// Build the canonical field for one named schema node
///
/// Never fails: shapes that cannot be classified become `any` fields.
pub fn extract_field(
    name: &str,
    schema: &Value,
    is_required: bool,
    options: &ExtractOptions,
    depth: usize,
) -> Field {
    // Wrapper metadata wins over whatever the nullable branch carries.
    let outer_description = extract_description(schema);
    let outer_examples = extract_examples(schema);

    let unwrapped = unwrap_nullable(schema);
    let node = unwrapped.schema.as_ref();
    let kind = classify(node);

    let mut field = Field::new(name, FieldType::bare(kind));
    field.is_required = is_required;
    field.is_nullable = unwrapped.is_nullable;
    field.description = outer_description.or_else(|| extract_description(node));
    field.examples = if outer_examples.is_empty() {
        extract_examples(node)
    } else {
        outer_examples
    };
    field.constraints = extract_constraints(node);

    field.field_type = if let Some(values) = node.get("enum").and_then(Value::as_array) {
        FieldType::Enum {
            values: values.iter().map(scalar_text).collect(),
        }
    } else if let Some(value) = node.get("const") {
        field.discriminator = Some(name.to_string());
        FieldType::Enum {
            values: vec![scalar_text(value)],
        }
    } else if kind == FieldKind::Record {
        record_type(node, options, depth)
    } else if kind == FieldKind::Object {
        if options.can_expand(depth) {
            FieldType::Object {
                fields: extract_object_fields(node, options, depth + 1),
            }
        } else {
            trace!(field = name, depth, "Depth limit reached, object fields omitted");
            FieldType::bare(FieldKind::Object)
        }
    } else if kind == FieldKind::Tuple {
        FieldType::Tuple {
            items: tuple_items(node)
                .map(|items| {
                    items
                        .iter()
                        .map(|item| extract_array_item(item, options, depth))
                        .collect()
                })
                .unwrap_or_default(),
        }
    } else if kind == FieldKind::Array {
        FieldType::Array {
            item: node
                .get("items")
                .map(|item| extract_array_item(item, options, depth))
                .unwrap_or(TypeRef::Kind(FieldKind::Any)),
        }
    } else if let Some(types) = multi_type(node) {
        FieldType::Union {
            types: types
                .iter()
                .map(|type_name| TypeRef::Kind(kind_for_type_name(type_name)))
                .collect(),
            type_names: types.iter().map(|type_name| type_name.to_string()).collect(),
        }
    } else if let Some(branches) = alternatives(node) {
        if options.can_expand(depth) {
            union_type(&mut field, branches, options, depth)
        } else {
            trace!(field = name, depth, "Depth limit reached, union left unexpanded");
            FieldType::bare(FieldKind::Union)
        }
    } else {
        FieldType::bare(kind)
    };

    if options.include_defaults {
        field.default_value = schema
            .get("default")
            .or_else(|| node.get("default"))
            .cloned();
    }

    field
}

/// Resolve the item type of an array (or one tuple slot)
///
/// Non-null scalars stay bare kinds; enums, objects, unions, nested
/// collections and nullable scalars become a nested field named `item`.
/// The item shares the array's depth, so its object fields are bounded the
/// same way as the fields of an object at that depth. An item union that
/// offers an enum branch is replaced by that enum, so the allowed values
/// stay visible.
pub fn extract_array_item(item: &Value, options: &ExtractOptions, depth: usize) -> TypeRef {
    let unwrapped = unwrap_nullable(item);
    let kind = classify(unwrapped.schema.as_ref());

    if kind.is_scalar() {
        if !unwrapped.is_nullable {
            return TypeRef::Kind(kind);
        }
    } else if kind != FieldKind::Enum && !options.can_expand(depth) {
        return TypeRef::Kind(kind);
    }

    let item_field = extract_field(ITEM_FIELD_NAME, item, true, options, depth);
    if let FieldType::Union { types, .. } = &item_field.field_type {
        let hoisted = types
            .iter()
            .filter_map(TypeRef::as_field)
            .find(|variant| variant.kind() == FieldKind::Enum);
        if let Some(enum_field) = hoisted {
            let mut enum_field = enum_field.clone();
            enum_field.name = ITEM_FIELD_NAME.to_string();
            enum_field.is_required = true;
            enum_field.is_nullable = item_field.is_nullable;
            if enum_field.description.is_none() {
                enum_field.description = item_field.description.clone();
            }
            return enum_field.into();
        }
    }
    item_field.into()
}

fn record_type(node: &Value, options: &ExtractOptions, depth: usize) -> FieldType {
    let value = match node.get("additionalProperties") {
        Some(value_schema @ Value::Object(_)) if value_schema.get("properties").is_some() => {
            if options.can_expand(depth) {
                let fields = extract_object_fields(value_schema, options, depth + 1);
                let mut value_field = Field::new(VALUE_FIELD_NAME, FieldType::Object { fields });
                value_field.is_required = true;
                value_field.description = extract_description(value_schema);
                value_field.into()
            } else {
                TypeRef::Kind(FieldKind::Object)
            }
        }
        Some(value_schema @ Value::Object(_))
            if value_schema.get("type").is_some_and(Value::is_string) =>
        {
            TypeRef::Kind(classify(value_schema))
        }
        _ => TypeRef::Kind(FieldKind::Any),
    };

    FieldType::Record {
        key: FieldKind::String,
        value,
    }
}

fn multi_type(node: &Value) -> Option<Vec<&str>> {
    let types = node.get("type")?.as_array()?;
    if types.len() < 2 {
        return None;
    }
    Some(types.iter().filter_map(Value::as_str).collect())
}

fn union_type(
    field: &mut Field,
    branches: &[Value],
    options: &ExtractOptions,
    depth: usize,
) -> FieldType {
    match resolve_union(branches, extract_object_fields, options, depth) {
        UnionResolution::Discriminated {
            discriminator,
            variants,
            has_null,
        } => {
            field.is_nullable |= has_null;
            field.discriminator = Some(discriminator);
            FieldType::DiscriminatedUnion { variants }
        }
        UnionResolution::Plain {
            types,
            type_names,
            has_null,
        } => {
            field.is_nullable |= has_null;
            if field.description.is_none() && !type_names.is_empty() {
                field.description = Some(format!("Union of {}", type_names.join(", ")));
            }
            FieldType::Union { types, type_names }
        }
    }
}
