//! Structured theme: the field tree re-serialized as JSON-Schema-like JSON
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::Theme;
use crate::model::{Field, FieldKind, FieldType, SchemaModel, TypeRef, UnionVariant};
use crate::options::RenderOptions;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{json, Map, Value};

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTheme;

impl Theme for JsonTheme {
    fn name(&self) -> &'static str {
        super::JSON
    }

    fn render(&self, model: &SchemaModel, options: &RenderOptions) -> String {
        if model.is_empty() {
            return String::new();
        }
        to_json_string(&model_value(model), options.indent_size)
    }
}

/// Structured representation of a whole model
pub fn model_value(model: &SchemaModel) -> Value {
    let mut node = Map::new();
    if let Some(title) = &model.metadata.title {
        node.insert("title".into(), json!(title));
    }
    if let Some(description) = &model.metadata.description {
        node.insert("description".into(), json!(description));
    }

    let body = match model.root_field() {
        Some(root) => field_node(root),
        None => object_node(&model.fields),
    };
    for (key, value) in body {
        // Document metadata wins over anything the root field carries.
        node.entry(key).or_insert(value);
    }

    Value::Object(node)
}

fn object_node(fields: &[Field]) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in fields {
        if field.is_required {
            required.push(json!(field.name));
        }
        properties.insert(field.name.clone(), Value::Object(field_node(field)));
    }

    let mut node = Map::new();
    node.insert("type".into(), json!("object"));
    node.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        node.insert("required".into(), Value::Array(required));
    }
    node
}

fn field_node(field: &Field) -> Map<String, Value> {
    let mut node = match &field.field_type {
        FieldType::Enum { values } if field.is_tag_field() && values.len() == 1 => {
            let mut node = Map::new();
            node.insert("const".into(), json!(values[0]));
            node
        }
        FieldType::Enum { values } => {
            let mut node = Map::new();
            node.insert("enum".into(), json!(values));
            node
        }
        FieldType::Object { fields } => object_node(fields),
        FieldType::Array { item } => {
            let mut node = kind_node(FieldKind::Array);
            node.insert("items".into(), type_ref_value(item));
            node
        }
        FieldType::Tuple { items } => {
            let mut node = kind_node(FieldKind::Tuple);
            node.insert(
                "items".into(),
                Value::Array(items.iter().map(type_ref_value).collect()),
            );
            node
        }
        FieldType::Record { value, .. } => {
            let mut node = kind_node(FieldKind::Record);
            node.insert("additionalProperties".into(), type_ref_value(value));
            node
        }
        FieldType::Union { types, type_names } => {
            let alternatives: Vec<Value> = if types.is_empty() {
                type_names.iter().map(|name| json!({"type": name})).collect()
            } else {
                types.iter().map(type_ref_value).collect()
            };
            let mut node = Map::new();
            node.insert("anyOf".into(), Value::Array(alternatives));
            node
        }
        FieldType::DiscriminatedUnion { variants } => {
            let discriminator = field.discriminator.as_deref().unwrap_or_default();
            discriminated_node(discriminator, variants)
        }
        scalar => kind_node(scalar.kind()),
    };

    if let Some(description) = &field.description {
        node.insert("description".into(), json!(description));
    }
    if field.is_nullable {
        node.insert("nullable".into(), Value::Bool(true));
    }
    for constraint in &field.constraints {
        node.insert(constraint.kind.keyword().into(), constraint.value.clone());
    }

    let examples: Vec<Value> = field.correct_examples().map(|e| e.value.clone()).collect();
    if !examples.is_empty() {
        node.insert("examples".into(), Value::Array(examples));
    }
    let invalid: Vec<Value> = field.invalid_examples().map(|e| e.value.clone()).collect();
    if !invalid.is_empty() {
        node.insert(
            crate::extract::examples::INVALID_EXAMPLES_KEY.into(),
            Value::Array(invalid),
        );
    }
    if let Some(default) = &field.default_value {
        node.insert("default".into(), default.clone());
    }

    node
}

fn discriminated_node(discriminator: &str, variants: &[UnionVariant]) -> Map<String, Value> {
    let values: Vec<&str> = variants
        .iter()
        .map(|variant| variant.discriminator_value.as_str())
        .collect();
    let branches: Vec<Value> = variants
        .iter()
        .map(|variant| variant_node(discriminator, variant))
        .collect();

    let mut node = Map::new();
    node.insert("oneOf".into(), Value::Array(branches));
    node.insert(
        "discriminator".into(),
        json!({"propertyName": discriminator, "values": values}),
    );
    node
}

/// One variant: the tag leaves `properties` but always leads `required`
fn variant_node(discriminator: &str, variant: &UnionVariant) -> Value {
    let own_fields: Vec<Field> = variant
        .fields
        .iter()
        .filter(|field| field.name != discriminator)
        .cloned()
        .collect();

    let mut node = Map::new();
    node.insert("title".into(), json!(variant.discriminator_value));
    node.extend(object_node(&own_fields));

    let mut required = vec![json!(discriminator)];
    if let Some(Value::Array(names)) = node.remove("required") {
        required.extend(names);
    }
    node.insert("required".into(), Value::Array(required));

    Value::Object(node)
}

fn type_ref_value(type_ref: &TypeRef) -> Value {
    match type_ref {
        TypeRef::Kind(kind) => Value::Object(kind_node(*kind)),
        TypeRef::Field(field) => Value::Object(field_node(field)),
    }
}

fn kind_node(kind: FieldKind) -> Map<String, Value> {
    let mut node = Map::new();
    let type_name = match kind {
        FieldKind::String => "string",
        FieldKind::Number => "number",
        FieldKind::Integer => "integer",
        FieldKind::Boolean => "boolean",
        FieldKind::Object | FieldKind::Record | FieldKind::DiscriminatedUnion => "object",
        FieldKind::Array | FieldKind::Tuple => "array",
        FieldKind::Date => {
            node.insert("type".into(), json!("string"));
            node.insert("format".into(), json!("date-time"));
            return node;
        }
        FieldKind::Enum | FieldKind::Union | FieldKind::Any => return node,
    };
    node.insert("type".into(), json!(type_name));
    node
}

/// Serialize with `indent` spaces per level; zero yields single-line JSON
pub fn to_json_string(value: &Value, indent: usize) -> String {
    if indent == 0 {
        return value.to_string();
    }

    let indent = vec![b' '; indent];
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(buffer).unwrap_or_else(|_| value.to_string())
}
