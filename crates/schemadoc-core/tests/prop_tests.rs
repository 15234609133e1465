//! Property-based tests for extraction and rendering
//!
//! These tests verify that extraction stays total and rendering stays
//! deterministic across a wide range of inputs.

use proptest::prelude::*;
use schemadoc_core::extract::unwrap_nullable;
use schemadoc_core::{extract_model, render, ExtractOptions, Field, FieldType, RenderOptions};
use serde_json::{json, Map, Value};

const THEMES: [&str; 4] = ["standard", "expanded", "condensed", "json"];

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(
        4,  // max depth
        24, // max size
        5,  // items per collection
        |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
                proptest::collection::btree_map(
                    prop_oneof![
                        Just("type".to_string()),
                        Just("properties".to_string()),
                        Just("items".to_string()),
                        Just("anyOf".to_string()),
                        Just("oneOf".to_string()),
                        Just("enum".to_string()),
                        "[a-z]{1,8}",
                    ],
                    inner,
                    0..5
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        },
    )
}

/// Strategy for generating schema nodes that are structurally valid
fn schema_strategy() -> BoxedStrategy<Value> {
    let leaf = prop_oneof![
        Just(json!({"type": "string"})),
        Just(json!({"type": "number", "minimum": 0})),
        Just(json!({"type": "integer"})),
        Just(json!({"type": "boolean"})),
        Just(json!({"type": "string", "format": "date-time"})),
        Just(json!({"type": ["string", "null"]})),
        Just(json!({"enum": ["a", "b", "c", "d"]})),
        Just(json!({"const": "fixed"})),
    ];

    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            object_schema_strategy(inner.clone()),
            inner.clone().prop_map(|item| json!({"type": "array", "items": item})),
            inner.clone().prop_map(|value| json!({"type": "object", "additionalProperties": value})),
            proptest::collection::vec(inner.clone(), 1..4).prop_map(|branches| json!({"anyOf": branches})),
            inner.prop_map(|schema| json!({"anyOf": [schema, {"type": "null"}]})),
        ]
    })
    .boxed()
}

fn object_schema_strategy(
    inner: impl Strategy<Value = Value> + Clone,
) -> impl Strategy<Value = Value> {
    proptest::collection::vec(("[a-z]{1,6}", inner, any::<bool>()), 0..5).prop_map(|props| {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for (name, schema, is_required) in props {
            if is_required && !properties.contains_key(&name) {
                required.push(json!(name));
            }
            properties.insert(name, schema);
        }
        json!({"type": "object", "properties": properties, "required": required})
    })
}

/// Tagged fields first, then required, then optional
fn ordering_holds(fields: &[Field]) -> bool {
    let ranks: Vec<u8> = fields
        .iter()
        .map(|f| {
            if f.is_discriminator_tagged() {
                0
            } else if f.is_required {
                1
            } else {
                2
            }
        })
        .collect();
    ranks.windows(2).all(|pair| pair[0] <= pair[1])
}

fn check_tree(fields: &[Field]) -> bool {
    ordering_holds(fields)
        && fields.iter().all(|field| match &field.field_type {
            FieldType::Object { fields } => check_tree(fields),
            FieldType::DiscriminatedUnion { variants } => {
                variants.iter().all(|variant| check_tree(&variant.fields))
            }
            _ => true,
        })
}

proptest! {
    #[test]
    fn prop_extraction_is_total(document in json_value_strategy()) {
        let model = extract_model(&document, &ExtractOptions::default());
        for theme in THEMES {
            prop_assert!(render(&model, theme, &RenderOptions::default()).is_ok());
        }
    }

    #[test]
    fn prop_object_field_ordering(schema in object_schema_strategy(schema_strategy())) {
        let model = extract_model(&schema, &ExtractOptions::default());
        prop_assert!(check_tree(&model.fields));
    }

    #[test]
    fn prop_rendering_is_idempotent(
        schema in schema_strategy(),
        indent in 0usize..5,
        max_depth in 0usize..5,
    ) {
        let model = extract_model(&schema, &ExtractOptions::default().with_max_depth(max_depth));
        let options = RenderOptions::default().with_indent_size(indent);
        for theme in THEMES {
            let first = render(&model, theme, &options).unwrap();
            let second = render(&model, theme, &options).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn prop_plain_nodes_unwrap_to_themselves(document in json_value_strategy()) {
        prop_assume!(document.get("anyOf").is_none());
        prop_assume!(!document.get("type").is_some_and(Value::is_array));

        let unwrapped = unwrap_nullable(&document);
        prop_assert!(!unwrapped.is_nullable);
        prop_assert_eq!(unwrapped.schema.as_ref(), &document);
    }

    #[test]
    fn prop_json_theme_output_parses(schema in schema_strategy()) {
        let model = extract_model(&schema, &ExtractOptions::default());
        let output = render(&model, "json", &RenderOptions::default()).unwrap();
        if !output.is_empty() {
            prop_assert!(serde_json::from_str::<Value>(&output).is_ok());
        }
    }
}
