//! Schemadoc Core Library
//!
//! Turns JSON-Schema documents into documentation aimed at language models:
//! an extraction engine builds a canonical field tree, and themes render
//! that tree as text.
//!
//! ```
//! use schemadoc_core::{extract_model, render, ExtractOptions, RenderOptions};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string"}, "age": {"type": "number"}},
//!     "required": ["name"]
//! });
//! let model = extract_model(&schema, &ExtractOptions::default());
//! let text = render(&model, "standard", &RenderOptions::default()).unwrap();
//! assert!(text.contains("- name: string (required)"));
//! ```
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod adapter;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod render;

pub use adapter::{AdapterRegistry, Describer, JsonAdapter, SchemaAdapter, YamlAdapter};
pub use error::{Error, Result};
pub use extract::extract_model;
pub use model::{
    Constraint, ConstraintKind, Example, Field, FieldKind, FieldType, ModelMetadata, SchemaModel,
    TypeRef, UnionVariant,
};
pub use options::{ExtractOptions, RenderOptions};
pub use render::{render, Theme, ThemeRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
