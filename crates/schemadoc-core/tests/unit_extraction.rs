//! Integration tests for the extraction engine
//!
//! These tests drive `extract_model` with whole documents and check the
//! shape of the resulting field tree.

use schemadoc_core::extract::{unwrap_nullable, resolve_union, extract_object_fields, UnionResolution};
use schemadoc_core::{extract_model, ExtractOptions, Field, FieldKind, FieldType, TypeRef};
use serde_json::{json, Value};

fn names(fields: &[Field]) -> Vec<&str> {
    fields.iter().map(|f| f.name.as_str()).collect()
}

#[cfg(test)]
mod object_roots {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_field_per_property_with_required_flags() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "age": {"type": "number"},
                "email": {"type": "string", "format": "email"}
            },
            "required": ["email", "name"]
        });
        let model = extract_model(&schema, &ExtractOptions::default());

        assert_eq!(model.fields.len(), 3);
        assert_eq!(names(&model.fields), vec!["name", "email", "age"]);
        let required: Vec<bool> = model.fields.iter().map(|f| f.is_required).collect();
        assert_eq!(required, vec![true, true, false]);
    }

    #[test]
    fn test_tagged_fields_lead_the_ordering() {
        let schema = json!({
            "type": "object",
            "properties": {
                "payload": {"type": "string"},
                "id": {"type": "string"},
                "kind": {"const": "event"}
            },
            "required": ["id"]
        });
        let model = extract_model(&schema, &ExtractOptions::default());
        assert_eq!(names(&model.fields), vec!["kind", "id", "payload"]);
        assert_eq!(model.fields[0].discriminator.as_deref(), Some("kind"));
    }

    #[test]
    fn test_depth_bound() {
        let schema = json!({
            "type": "object",
            "properties": {
                "a": {
                    "type": "object",
                    "properties": {
                        "b": {
                            "type": "object",
                            "properties": {
                                "c": {"type": "string"}
                            }
                        }
                    }
                }
            }
        });
        let model = extract_model(&schema, &ExtractOptions::default().with_max_depth(1));

        let a = &model.fields[0];
        let b_fields = a.object_fields().unwrap_or_default();
        assert_eq!(names(b_fields), vec!["b"]);
        assert_eq!(b_fields[0].kind(), FieldKind::Object);
        assert_eq!(b_fields[0].object_fields().map(<[Field]>::len), Some(0));

        let deep = extract_model(&schema, &ExtractOptions::default());
        let c_fields = deep.fields[0].object_fields().unwrap_or_default()[0]
            .object_fields()
            .unwrap_or_default();
        assert_eq!(names(c_fields), vec!["c"]);
    }

    #[test]
    fn test_self_referential_schema_terminates() {
        let schema = json!({
            "type": "object",
            "properties": {
                "child": {"$ref": "#"},
                "children": {"type": "array", "items": {"$ref": "#"}}
            }
        });
        let model = extract_model(&schema, &ExtractOptions::default());
        assert_eq!(model.fields[0].kind(), FieldKind::Any);
        assert_eq!(
            model.fields[1].field_type,
            FieldType::Array { item: TypeRef::Kind(FieldKind::Any) }
        );
    }
}

#[cfg(test)]
mod non_object_roots {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_array_root() {
        let schema = json!({"type": "array", "items": {"type": "string"}, "minItems": 1, "maxItems": 5});
        let model = extract_model(&schema, &ExtractOptions::default());

        assert_eq!(model.fields.len(), 1);
        let root = &model.fields[0];
        assert_eq!(root.name, "root");
        assert_eq!(root.kind(), FieldKind::Array);
        let displays: Vec<&str> = root.constraints.iter().map(|c| c.display.as_str()).collect();
        assert_eq!(displays, vec!["min 1 items", "max 5 items"]);
    }

    #[test]
    fn test_discriminated_union_root() {
        let schema = json!({
            "oneOf": [
                {"type": "object", "properties": {"type": {"const": "text"}, "content": {"type": "string"}}},
                {"type": "object", "properties": {"type": {"const": "image"}, "url": {"type": "string"}}}
            ]
        });
        let model = extract_model(&schema, &ExtractOptions::default());
        let root = model.root_field().expect("root field");

        assert_eq!(root.discriminator.as_deref(), Some("type"));
        match &root.field_type {
            FieldType::DiscriminatedUnion { variants } => {
                let tags: Vec<&str> = variants.iter().map(|v| v.discriminator_value.as_str()).collect();
                assert_eq!(tags, vec!["text", "image"]);
                assert_eq!(names(&variants[0].fields), vec!["type", "content"]);
                assert_eq!(names(&variants[1].fields), vec!["type", "url"]);
            }
            other => panic!("expected discriminated union, got {:?}", other),
        }
    }

    #[test]
    fn test_array_root_depth_matches_object_root() {
        let item = json!({"type": "object", "properties": {"a": {"type": "string"}}});
        let options = ExtractOptions::default().with_max_depth(1);

        let array = extract_model(&json!({"type": "array", "items": item}), &options);
        let object = extract_model(&item, &options);
        match &array.fields[0].field_type {
            FieldType::Array { item: TypeRef::Field(item) } => {
                assert_eq!(names(item.object_fields().unwrap_or_default()), names(&object.fields));
            }
            other => panic!("expected array of objects, got {:?}", other),
        }

        let collapsed = extract_model(
            &json!({"type": "array", "items": item}),
            &ExtractOptions::default().with_max_depth(0),
        );
        assert_eq!(
            collapsed.fields[0].field_type,
            FieldType::Array { item: TypeRef::Kind(FieldKind::Object) }
        );
    }

    #[test]
    fn test_nullable_discriminated_union_root() {
        let mut schema = json!({
            "anyOf": [
                {"type": "object", "properties": {"type": {"const": "text"}}},
                {"type": "object", "properties": {"type": {"const": "image"}}}
            ]
        });
        schema["anyOf"].as_array_mut().expect("branches").push(json!({"type": "null"}));

        let model = extract_model(&schema, &ExtractOptions::default());
        let root = model.root_field().expect("root field");
        assert_eq!(root.kind(), FieldKind::DiscriminatedUnion);
        assert!(root.is_nullable);
    }

    #[test]
    fn test_malformed_documents_degrade() {
        for document in [json!(null), json!(3), json!("text"), json!([1, 2]), json!({})] {
            let model = extract_model(&document, &ExtractOptions::default());
            assert_eq!(model.fields.len(), 1);
            assert_eq!(model.fields[0].kind(), FieldKind::Any);
        }
    }
}

#[cfg(test)]
mod building_blocks {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nullability_unwrapping() {
        let wrapped = json!({"anyOf": [{"type": "null"}, {"type": "string"}]});
        let unwrapped = unwrap_nullable(&wrapped);
        assert!(unwrapped.is_nullable);
        assert_eq!(unwrapped.schema.as_ref(), &json!({"type": "string"}));

        let plain = json!({"type": "string"});
        let unwrapped = unwrap_nullable(&plain);
        assert!(!unwrapped.is_nullable);
        assert_eq!(unwrapped.schema.as_ref(), &plain);
    }

    #[test]
    fn test_discriminator_requires_every_branch() {
        let options = ExtractOptions::default();
        let tagged: Vec<Value> = vec![
            json!({"properties": {"type": {"const": "a"}}}),
            json!({"properties": {"type": {"const": "b"}}}),
        ];
        let resolution = resolve_union(&tagged, extract_object_fields, &options, 0);
        assert!(resolution.is_discriminated());

        let mixed: Vec<Value> = vec![
            json!({"properties": {"type": {"const": "a"}}}),
            json!({"properties": {"type": {"type": "string"}}}),
        ];
        match resolve_union(&mixed, extract_object_fields, &options, 0) {
            UnionResolution::Plain { types, .. } => assert_eq!(types.len(), 2),
            other => panic!("expected plain union, got {:?}", other),
        }
    }
}
