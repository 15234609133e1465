//! Model extraction from a whole JSON-Schema document
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::classify::alternatives;
use super::examples::extract_description;
use super::field::extract_field;
use super::object::extract_object_fields;
use crate::model::{ModelMetadata, SchemaModel};
use crate::options::ExtractOptions;
use serde_json::Value;
use tracing::debug;

/// Name of the synthetic field holding a non-object document root
pub const ROOT_FIELD_NAME: &str = "root";

/// Shape of a document root, deciding how the model's field list is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootShape {
    /// Properties become the top-level fields
    Object,
    Array,
    Union,
    /// Scalars, enums and anything unrecognised
    Other,
}

pub fn root_shape(document: &Value) -> RootShape {
    let type_name = document.get("type").and_then(Value::as_str);
    let has_properties = document.get("properties").is_some_and(Value::is_object);

    if has_properties && matches!(type_name, None | Some("object")) {
        RootShape::Object
    } else if type_name == Some("array") {
        RootShape::Array
    } else if alternatives(document).is_some() {
        RootShape::Union
    } else {
        RootShape::Other
    }
}

/// Extract the documentation model of a JSON-Schema document
///
/// Total for any JSON input; malformed documents degrade to `any` fields.
pub fn extract_model(document: &Value, options: &ExtractOptions) -> SchemaModel {
    let shape = root_shape(document);
    debug!(?shape, max_depth = options.max_depth, "Extracting schema model");

    let fields = match shape {
        RootShape::Object => extract_object_fields(document, options, 0),
        RootShape::Array | RootShape::Union | RootShape::Other => {
            vec![extract_field(ROOT_FIELD_NAME, document, true, options, 0)]
        }
    };

    SchemaModel {
        fields,
        metadata: extract_metadata(document),
    }
}

fn extract_metadata(document: &Value) -> ModelMetadata {
    let examples = match document.get("examples") {
        Some(Value::Array(values)) => values.clone(),
        Some(value) => vec![value.clone()],
        None => Vec::new(),
    };

    ModelMetadata {
        title: document.get("title").and_then(Value::as_str).map(String::from),
        description: extract_description(document),
        examples,
    }
}
