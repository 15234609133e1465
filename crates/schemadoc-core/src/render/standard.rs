//! Standard theme: one bullet per field with type and modifiers
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::base::{modifiers, type_repr, Lines, Outline};
use super::Theme;
use crate::model::{Field, SchemaModel};
use crate::options::RenderOptions;

pub const SCHEMA_HEADING: &str = "## Schema";

/// Compact markdown outline without descriptions or examples
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardTheme;

impl Outline for StandardTheme {
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
}

impl Theme for StandardTheme {
    fn name(&self) -> &'static str {
        super::STANDARD
    }

    fn render(&self, model: &SchemaModel, options: &RenderOptions) -> String {
        let mut lines = Lines::new(options);
        lines.push(0, SCHEMA_HEADING);
        if !model.is_empty() {
            lines.blank();
            self.write_fields(&model.fields, 0, &mut lines);
        }
        lines.finish()
    }
}

// Line shapes shared with the expanded theme

pub(crate) fn standard_field_line(field: &Field) -> String {
    format!("- {}: {}{}", field.name, type_repr(field), modifiers(field, true))
}

pub(crate) fn standard_discriminator_line(discriminator: &str, values: &[&str]) -> String {
    format!("- {}: {} (discriminator)", discriminator, values.join(" | "))
}

pub(crate) fn standard_variant_label(discriminator: &str, value: &str) -> String {
    format!("- {discriminator} = {value}:")
}

pub(crate) fn standard_option_label(position: usize) -> String {
    format!("- option {position}:")
}
