//! Expanded theme: standard outline plus descriptions, defaults and examples
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::base::{enum_item, Lines, Outline};
use super::standard::{
    standard_discriminator_line, standard_field_line, standard_option_label,
    standard_variant_label, SCHEMA_HEADING,
};
use super::Theme;
use crate::model::{Example, Field, SchemaModel};
use crate::options::RenderOptions;
use serde_json::Value;

pub const EXAMPLES_HEADING: &str = "## Examples";

/// Verbose markdown outline for readers that benefit from prose and samples
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpandedTheme;

impl Outline for ExpandedTheme {
    fn field_line(&self, field: &Field) -> String {
        standard_field_line(field)
    }

    fn discriminator_line(&self, discriminator: &str, values: &[&str]) -> String {
        standard_discriminator_line(discriminator, values)
    }

    fn variant_label(&self, discriminator: &str, value: &str) -> String {
        standard_variant_label(discriminator, value)
    }

    fn option_label(&self, position: usize) -> String {
        standard_option_label(position)
    }

    fn annotations(&self, field: &Field) -> Vec<String> {
        let mut notes = Vec::new();

        if let Some(description) = &field.description {
            notes.push(format!("- Description: {description}"));
        }
        if let Some(default) = &field.default_value {
            notes.push(format!("- Default: {}", inline_json(default)));
        }
        for example in field.correct_examples() {
            notes.push(format!(
                "- Example: {}{}",
                inline_json(&example.value),
                note_suffix(example)
            ));
        }
        for example in field.invalid_examples() {
            notes.push(format!(
                "- Invalid example: {} (invalid){}",
                inline_json(&example.value),
                note_suffix(example)
            ));
        }
        if let Some(values) = enum_item(field).and_then(Field::enum_values) {
            notes.push(format!("- ⚠ Each item must be one of: {}", values.join(", ")));
        }

        notes
    }
}

impl Theme for ExpandedTheme {
    fn name(&self) -> &'static str {
        super::EXPANDED
    }

    fn render(&self, model: &SchemaModel, options: &RenderOptions) -> String {
        if model.is_empty() {
            return SCHEMA_HEADING.to_string();
        }

        let mut lines = Lines::new(options);
        lines.push(0, SCHEMA_HEADING);

        if let Some(description) = &model.metadata.description {
            lines.blank();
            lines.push(0, description);
        }
        lines.blank();
        self.write_fields(&model.fields, 0, &mut lines);

        if let Some(example) = model.metadata.examples.first() {
            lines.blank();
            lines.push(0, EXAMPLES_HEADING);
            lines.blank();
            lines.push(0, "```json");
            lines.push(0, pretty_json(example));
            lines.push(0, "```");
        }

        lines.finish()
    }
}

fn note_suffix(example: &Example) -> String {
    example
        .note
        .as_ref()
        .map(|note| format!(" — {note}"))
        .unwrap_or_default()
}

fn inline_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
