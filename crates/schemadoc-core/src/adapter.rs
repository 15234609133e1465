//! Source adapters and the describe facade
//!
//! An adapter turns opaque schema source text into a JSON-Schema document.
//! [`Describer`] chains adapter, extraction and theme rendering.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::extract::extract_model;
use crate::model::SchemaModel;
use crate::options::{ExtractOptions, RenderOptions};
use crate::render::ThemeRegistry;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Prefix of the text returned by [`Describer::describe_safe`] on failure
pub const UNAVAILABLE_PREFIX: &str = "Schema description unavailable";

/// Converts schema source text into a JSON-Schema document
pub trait SchemaAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    fn to_json_schema(&self, source: &str) -> Result<Value>;
}

/// JSON text holding a JSON-Schema document
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAdapter;

impl SchemaAdapter for JsonAdapter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn to_json_schema(&self, source: &str) -> Result<Value> {
        let document: Value = serde_json::from_str(source)
            .map_err(|e| Error::adapter_with_source(self.name(), "invalid JSON", e))?;
        ensure_schema_document(self.name(), document)
    }
}

/// YAML text holding a JSON-Schema document
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlAdapter;

impl SchemaAdapter for YamlAdapter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn to_json_schema(&self, source: &str) -> Result<Value> {
        let document: Value = serde_yaml::from_str(source)
            .map_err(|e| Error::adapter_with_source(self.name(), "invalid YAML", e))?;
        ensure_schema_document(self.name(), document)
    }
}

/// Schema documents are objects or boolean schemas
fn ensure_schema_document(adapter: &str, document: Value) -> Result<Value> {
    match document {
        Value::Object(_) | Value::Bool(_) => Ok(document),
        other => Err(Error::adapter(
            adapter,
            format!("expected a schema object, found {}", value_type_name(&other)),
        )),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Ordered adapter name -> adapter registry
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn SchemaAdapter>>,
}

impl AdapterRegistry {
    pub fn empty() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Add an adapter, replacing any adapter registered under the same name
    pub fn register(&mut self, adapter: impl SchemaAdapter + 'static) {
        let adapter: Box<dyn SchemaAdapter> = Box::new(adapter);
        match self.adapters.iter_mut().find(|a| a.name() == adapter.name()) {
            Some(existing) => *existing = adapter,
            None => self.adapters.push(adapter),
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn SchemaAdapter> {
        self.adapters
            .iter()
            .find(|adapter| adapter.name() == name)
            .map(|adapter| adapter.as_ref())
            .ok_or_else(|| Error::unknown_adapter(name, &self.names()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|adapter| adapter.name()).collect()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(JsonAdapter);
        registry.register(YamlAdapter);
        registry
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.names())
            .finish()
    }
}

/// Source text -> adapter -> field tree -> themed text
#[derive(Debug, Default)]
pub struct Describer {
    adapters: AdapterRegistry,
    themes: ThemeRegistry,
    extract_options: ExtractOptions,
    render_options: RenderOptions,
}

impl Describer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adapters(mut self, adapters: AdapterRegistry) -> Self {
        self.adapters = adapters;
        self
    }

    pub fn with_themes(mut self, themes: ThemeRegistry) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub fn adapters(&self) -> &AdapterRegistry {
        &self.adapters
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    /// Convert `source` with `adapter` and extract its field tree
    pub fn model(&self, source: &str, adapter: &str) -> Result<SchemaModel> {
        let adapter = self.adapters.get(adapter)?;
        debug!(adapter = adapter.name(), bytes = source.len(), "Converting schema source");
        let document = adapter.to_json_schema(source)?;
        Ok(extract_model(&document, &self.extract_options))
    }

    /// Describe `source` with the given adapter and theme
    pub fn describe(&self, source: &str, adapter: &str, theme: &str) -> Result<String> {
        // Resolve the theme first so a bad name fails before any parsing work.
        let theme = self.themes.get(theme)?;
        let model = self.model(source, adapter)?;
        Ok(theme.render(&model, &self.render_options))
    }

    /// Like [`describe`](Self::describe), but failures become a placeholder text
    pub fn describe_safe(&self, source: &str, adapter: &str, theme: &str) -> String {
        self.describe(source, adapter, theme).unwrap_or_else(|e| {
            warn!(error = %e, adapter, theme, "Schema description failed");
            format!("{UNAVAILABLE_PREFIX}: {e}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_JSON: &str =
        r#"{"type": "object", "properties": {"name": {"type": "string"}}, "required": ["name"]}"#;

    #[test]
    fn test_json_adapter() {
        let document = JsonAdapter.to_json_schema(USER_JSON).unwrap();
        assert_eq!(document["type"], "object");
        assert!(JsonAdapter.to_json_schema("true").is_ok());

        let err = JsonAdapter.to_json_schema("[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "Adapter 'json' failed: expected a schema object, found array");

        let err = JsonAdapter.to_json_schema("{").unwrap_err();
        assert!(matches!(err, Error::Adapter { source: Some(_), .. }));
    }

    #[test]
    fn test_yaml_adapter() {
        let source = "type: object\nproperties:\n  name:\n    type: string\n";
        let document = YamlAdapter.to_json_schema(source).unwrap();
        assert_eq!(document["properties"]["name"]["type"], "string");
        assert!(YamlAdapter.to_json_schema("- a\n- b\n").is_err());
    }

    #[test]
    fn test_registry_lookup() {
        let registry = AdapterRegistry::default();
        assert_eq!(registry.names(), vec!["json", "yaml"]);
        assert!(registry.get("yaml").is_ok());

        let err = registry.get("protobuf").err().unwrap();
        assert!(err.to_string().contains("valid adapters: json, yaml"));
    }

    #[test]
    fn test_describe() {
        let describer = Describer::new();
        let output = describer.describe(USER_JSON, "json", "standard").unwrap();
        assert_eq!(output, "## Schema\n\n- name: string (required)");
    }

    #[test]
    fn test_describe_unknown_theme_fails() {
        let err = Describer::new().describe(USER_JSON, "json", "fancy").unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_describe_safe_fallback() {
        let describer = Describer::new();
        let output = describer.describe_safe("not json", "json", "standard");
        assert!(output.starts_with("Schema description unavailable: Adapter 'json' failed"));

        let output = describer.describe_safe(USER_JSON, "json", "condensed");
        assert_eq!(output, "name:str!");
    }
}
