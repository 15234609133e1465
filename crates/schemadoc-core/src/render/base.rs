//! Helpers shared by the text themes
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::model::{Field, FieldKind, FieldType, TypeRef, UnionVariant};
use crate::options::RenderOptions;

/// Accumulates indented output lines
#[derive(Debug)]
pub struct Lines {
    lines: Vec<String>,
    indent_size: usize,
}

impl Lines {
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            lines: Vec::new(),
            indent_size: options.indent_size,
        }
    }

    pub fn push(&mut self, level: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", indent(level, self.indent_size), text.as_ref()));
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

pub fn indent(level: usize, indent_size: usize) -> String {
    " ".repeat(level * indent_size)
}

/// `required`, `nullable` and (optionally) constraint displays, in that order
pub fn modifier_parts(field: &Field, include_constraints: bool) -> Vec<String> {
    let mut parts = Vec::new();
    if field.is_required {
        parts.push("required".to_string());
    }
    if field.is_nullable {
        parts.push("nullable".to_string());
    }
    if include_constraints {
        parts.extend(field.constraints.iter().map(|c| c.display.clone()));
    }
    parts
}

/// Modifier suffix such as ` (required, min 3 chars)`, empty when there is nothing to say
pub fn modifiers(field: &Field, include_constraints: bool) -> String {
    let parts = modifier_parts(field, include_constraints);
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

/// Plural noun used for collections of a kind ("array of strings")
pub fn plural_kind(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::String => "strings",
        FieldKind::Number => "numbers",
        FieldKind::Integer => "integers",
        FieldKind::Boolean => "booleans",
        FieldKind::Date => "dates",
        FieldKind::Object | FieldKind::DiscriminatedUnion => "objects",
        FieldKind::Array => "arrays",
        FieldKind::Enum => "enum values",
        FieldKind::Union => "mixed values",
        FieldKind::Record => "records",
        FieldKind::Tuple => "tuples",
        FieldKind::Any => "any values",
    }
}

/// Long-form type representation used by the standard and expanded themes
pub fn type_repr(field: &Field) -> String {
    match &field.field_type {
        FieldType::Enum { values } => format!("enum ({})", values.join(" | ")),
        FieldType::Array { item } => array_repr(item),
        FieldType::Tuple { items } => format!(
            "tuple [{}]",
            items.iter().map(type_ref_repr).collect::<Vec<_>>().join(", ")
        ),
        FieldType::Record { key, value } => format!("record<{}, {}>", key, type_ref_repr(value)),
        FieldType::Union { types, type_names } => union_repr(types, type_names),
        FieldType::DiscriminatedUnion { .. } => {
            format!("array of {}", plural_kind(FieldKind::DiscriminatedUnion))
        }
        other => other.kind().as_str().to_string(),
    }
}

pub fn type_ref_repr(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Kind(kind) => kind.as_str().to_string(),
        TypeRef::Field(field) => type_repr(field),
    }
}

fn union_repr(types: &[TypeRef], type_names: &[String]) -> String {
    if !types.is_empty() {
        types.iter().map(type_ref_repr).collect::<Vec<_>>().join(" | ")
    } else if !type_names.is_empty() {
        type_names.join(" | ")
    } else {
        FieldKind::Union.as_str().to_string()
    }
}

fn array_repr(item: &TypeRef) -> String {
    let item = match item {
        TypeRef::Kind(kind) => return format!("array of {}", plural_kind(*kind)),
        TypeRef::Field(item) => item,
    };
    match &item.field_type {
        FieldType::Enum { values } => format!("array of enum values ({})", values.join(" | ")),
        FieldType::Union { types, type_names } => format!(
            "array of {} ({})",
            plural_kind(FieldKind::Union),
            union_repr(types, type_names)
        ),
        FieldType::Array { item: inner } => format!("array of ({})", array_repr(inner)),
        other if item.is_nullable => format!("array of nullable {}", plural_kind(other.kind())),
        other => format!("array of {}", plural_kind(other.kind())),
    }
}

/// The enum field describing an array's items, if any
pub fn enum_item(field: &Field) -> Option<&Field> {
    match &field.field_type {
        FieldType::Array {
            item: TypeRef::Field(item),
        } if item.kind() == FieldKind::Enum => Some(item),
        _ => None,
    }
}

/// Shared tree walk of the text themes
///
/// Implementors decide how single lines look; the walk decides where nested
/// lines go. Rendering only follows structure already present in the tree.
pub trait Outline {
    fn field_line(&self, field: &Field) -> String;

    fn discriminator_line(&self, discriminator: &str, values: &[&str]) -> String;

    fn variant_label(&self, discriminator: &str, value: &str) -> String;

    fn option_label(&self, position: usize) -> String;

    /// Extra lines rendered one level below the field line
    fn annotations(&self, _field: &Field) -> Vec<String> {
        Vec::new()
    }

    fn write_fields(&self, fields: &[Field], level: usize, lines: &mut Lines) {
        for field in fields {
            self.write_field(field, level, lines);
        }
    }

    fn write_field(&self, field: &Field, level: usize, lines: &mut Lines) {
        lines.push(level, self.field_line(field));
        for annotation in self.annotations(field) {
            lines.push(level + 1, annotation);
        }
        self.write_children(field, level + 1, lines);
    }

    fn write_children(&self, field: &Field, level: usize, lines: &mut Lines) {
        match &field.field_type {
            FieldType::Object { fields } => self.write_fields(fields, level, lines),
            FieldType::Record {
                value: TypeRef::Field(value),
                ..
            } => self.write_children(value, level, lines),
            FieldType::Array {
                item: TypeRef::Field(item),
            } => self.write_children(item, level, lines),
            FieldType::Union { types, .. } => self.write_options(types, level, lines),
            FieldType::DiscriminatedUnion { variants } => {
                let discriminator = field.discriminator.as_deref().unwrap_or_default();
                self.write_variants(discriminator, variants, level, lines);
            }
            _ => {}
        }
    }

    /// Object alternatives of a plain union, each under a numbered label
    fn write_options(&self, types: &[TypeRef], level: usize, lines: &mut Lines) {
        for (index, alternative) in types.iter().enumerate() {
            let Some(fields) = alternative.as_field().and_then(Field::object_fields) else {
                continue;
            };
            if fields.is_empty() {
                continue;
            }
            lines.push(level, self.option_label(index + 1));
            self.write_fields(fields, level + 1, lines);
        }
    }

    /// Discriminator line, then one labeled block per variant without the tag field
    fn write_variants(
        &self,
        discriminator: &str,
        variants: &[UnionVariant],
        level: usize,
        lines: &mut Lines,
    ) {
        let values: Vec<&str> = variants
            .iter()
            .map(|variant| variant.discriminator_value.as_str())
            .collect();
        lines.push(level, self.discriminator_line(discriminator, &values));

        for variant in variants {
            lines.push(
                level,
                self.variant_label(discriminator, &variant.discriminator_value),
            );
            for field in variant.fields.iter().filter(|f| f.name != discriminator) {
                self.write_field(field, level + 1, lines);
            }
        }
    }
}
