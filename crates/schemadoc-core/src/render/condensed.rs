//! Condensed theme: one terse line per field for token-constrained prompts
//!
//! Only critical constraints survive (bounds, email and URI formats); all
//! other constraints, descriptions and examples are dropped.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::base::{Lines, Outline};
use super::Theme;
use crate::extract::constraints::scalar_text;
use crate::model::{ConstraintKind, Field, FieldKind, FieldType, SchemaModel, TypeRef};
use crate::options::RenderOptions;

/// Number of enum values shown before truncating
pub const MAX_ENUM_VALUES: usize = 3;

const ENUM_ELLIPSIS: &str = "...";

#[derive(Debug, Default, Clone, Copy)]
pub struct CondensedTheme;

impl Outline for CondensedTheme {
    fn field_line(&self, field: &Field) -> String {
        let marker = if field.is_required { '!' } else { '?' };
        let critical = critical_constraints(field);
        let mut line = format!("{}:{}{}", field.name, compact_type(field), marker);
        if !critical.is_empty() {
            line.push_str(&format!("[{}]", critical.join(",")));
        }
        line
    }

    fn discriminator_line(&self, discriminator: &str, values: &[&str]) -> String {
        format!("{}:{}", discriminator, values.join("|"))
    }

    fn variant_label(&self, discriminator: &str, value: &str) -> String {
        format!("{discriminator}={value}:")
    }

    fn option_label(&self, position: usize) -> String {
        format!("option{position}:")
    }
}

impl Theme for CondensedTheme {
    fn name(&self) -> &'static str {
        super::CONDENSED
    }

    fn render(&self, model: &SchemaModel, options: &RenderOptions) -> String {
        let mut lines = Lines::new(options);
        self.write_fields(&model.fields, 0, &mut lines);
        lines.finish()
    }
}

fn compact_kind(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "str",
        FieldKind::Number => "num",
        FieldKind::Integer => "int",
        FieldKind::Boolean => "bool",
        FieldKind::Object | FieldKind::DiscriminatedUnion => "obj",
        FieldKind::Date => "date",
        FieldKind::Array => "arr",
        FieldKind::Enum => "enum",
        FieldKind::Union => "union",
        FieldKind::Record => "rec",
        FieldKind::Tuple => "tuple",
        FieldKind::Any => "any",
    }
}

fn compact_type(field: &Field) -> String {
    let base = compact_payload(&field.field_type);
    if field.is_nullable {
        format!("{base}|null")
    } else {
        base
    }
}

fn compact_payload(field_type: &FieldType) -> String {
    match field_type {
        FieldType::Enum { values } => compact_enum(values),
        FieldType::Array { item } => {
            let item = compact_ref(item);
            if item.contains('|') {
                format!("({item})[]")
            } else {
                format!("{item}[]")
            }
        }
        FieldType::Tuple { items } => format!(
            "[{}]",
            items.iter().map(compact_ref).collect::<Vec<_>>().join(",")
        ),
        FieldType::Record { key, value } => {
            format!("{{{}:{}}}", compact_kind(*key), compact_ref(value))
        }
        FieldType::Union { types, type_names } if types.is_empty() && !type_names.is_empty() => {
            type_names.join("|")
        }
        FieldType::Union { types, .. } if !types.is_empty() => {
            types.iter().map(compact_ref).collect::<Vec<_>>().join("|")
        }
        other => compact_kind(other.kind()).to_string(),
    }
}

fn compact_ref(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Kind(kind) => compact_kind(*kind).to_string(),
        TypeRef::Field(field) => compact_type(field),
    }
}

fn compact_enum(values: &[String]) -> String {
    let mut shown: Vec<&str> = values
        .iter()
        .take(MAX_ENUM_VALUES)
        .map(String::as_str)
        .collect();
    if values.len() > MAX_ENUM_VALUES {
        shown.push(ENUM_ELLIPSIS);
    }
    shown.join("|")
}

fn critical_constraints(field: &Field) -> Vec<String> {
    field
        .constraints
        .iter()
        .filter_map(|constraint| match constraint.kind {
            ConstraintKind::Minimum => Some(format!("≥{}", scalar_text(&constraint.value))),
            ConstraintKind::Maximum => Some(format!("≤{}", scalar_text(&constraint.value))),
            ConstraintKind::Format => match constraint.value.as_str() {
                Some("email") => Some("@".to_string()),
                Some("uri" | "url") => Some("url".to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_model;
    use crate::options::ExtractOptions;
    use serde_json::json;

    fn render(schema: serde_json::Value) -> String {
        let model = extract_model(&schema, &ExtractOptions::default());
        CondensedTheme.render(&model, &RenderOptions::default())
    }

    #[test]
    fn test_empty_model_is_empty_string() {
        assert_eq!(
            CondensedTheme.render(&SchemaModel::default(), &RenderOptions::default()),
            ""
        );
    }

    #[test]
    fn test_field_lines() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "email": {"type": "string", "format": "email", "minLength": 3},
                "age": {"type": "integer", "minimum": 0, "maximum": 150},
                "site": {"type": ["string", "null"], "format": "uri"},
                "tags": {"type": "array", "items": {"type": "string"}},
                "level": {"enum": ["a", "b", "c", "d"]}
            },
            "required": ["email"]
        }));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "email:str![@]",
                "age:int?[≥0,≤150]",
                "site:str|null?[url]",
                "tags:str[]?",
                "level:a|b|c|...?",
            ]
        );
    }

    #[test]
    fn test_records_tuples_and_nesting() {
        let output = render(json!({
            "type": "object",
            "properties": {
                "scores": {"type": "object", "additionalProperties": {"type": "number"}},
                "point": {"type": "array", "items": [{"type": "number"}, {"type": "number"}]},
                "owner": {"type": "object", "properties": {"id": {"type": "integer"}}, "required": ["id"]}
            }
        }));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec!["scores:{str:num}?", "point:[num,num]?", "owner:obj?", "  id:int!"]
        );
    }

    #[test]
    fn test_discriminated_union_lines() {
        let output = render(json!({
            "oneOf": [
                {"type": "object", "properties": {"type": {"const": "text"}, "content": {"type": "string"}}},
                {"type": "object", "properties": {"type": {"const": "image"}, "url": {"type": "string"}}}
            ]
        }));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "root:obj!",
                "  type:text|image",
                "  type=text:",
                "    content:str?",
                "  type=image:",
                "    url:str?",
            ]
        );
    }
}
