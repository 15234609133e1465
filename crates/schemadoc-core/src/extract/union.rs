//! Union resolution: discriminated vs plain unions
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::classify::{classify, is_null_schema, variant_type_name};
use super::constraints::scalar_text;
use crate::model::{Field, FieldKind, FieldType, TypeRef, UnionVariant};
use crate::options::ExtractOptions;
use serde_json::Value;
use tracing::trace;

/// Property names probed for a discriminator, in priority order
pub const DISCRIMINATOR_CANDIDATES: [&str; 3] = ["type", "kind", "discriminator"];

/// Name given to synthetic fields built from union branches
pub const VARIANT_FIELD_NAME: &str = "variant";

/// Extracts the ordered object fields of a branch at a given depth
pub type ObjectFieldsFn = fn(&Value, &ExtractOptions, usize) -> Vec<Field>;

/// Outcome of resolving a set of alternative schemas
#[derive(Debug, Clone, PartialEq)]
pub enum UnionResolution {
    Discriminated {
        discriminator: String,
        variants: Vec<UnionVariant>,
        /// A `{type: "null"}` branch was present and dropped
        has_null: bool,
    },
    Plain {
        types: Vec<TypeRef>,
        type_names: Vec<String>,
        /// A `{type: "null"}` branch was present and dropped
        has_null: bool,
    },
}

impl UnionResolution {
    pub fn is_discriminated(&self) -> bool {
        matches!(self, UnionResolution::Discriminated { .. })
    }
}

/// Find the first candidate property that carries a `const` in every branch
pub fn find_discriminator(branches: &[&Value]) -> Option<&'static str> {
    if branches.is_empty() {
        return None;
    }
    DISCRIMINATOR_CANDIDATES
        .into_iter()
        .find(|candidate| branches.iter().all(|branch| literal_tag(branch, candidate).is_some()))
}

fn literal_tag<'a>(branch: &'a Value, property: &str) -> Option<&'a Value> {
    branch
        .get("properties")
        .and_then(|props| props.get(property))
        .and_then(|prop| prop.get("const"))
}

/// Resolve `branches` into a discriminated or plain union
///
/// `extract_fields` builds variant payloads; branch fields are extracted one
/// level below `depth`.
pub fn resolve_union(
    branches: &[Value],
    extract_fields: ObjectFieldsFn,
    options: &ExtractOptions,
    depth: usize,
) -> UnionResolution {
    let (nulls, candidates): (Vec<&Value>, Vec<&Value>) =
        branches.iter().partition(|branch| is_null_schema(branch));

    if let Some(discriminator) = find_discriminator(&candidates) {
        trace!(discriminator, branches = candidates.len(), "Detected discriminated union");
        let variants = candidates
            .iter()
            .filter_map(|branch| {
                literal_tag(branch, discriminator).map(|tag| UnionVariant {
                    discriminator_value: scalar_text(tag),
                    fields: extract_fields(branch, options, depth + 1),
                })
            })
            .collect();
        return UnionResolution::Discriminated {
            discriminator: discriminator.to_string(),
            variants,
            has_null: !nulls.is_empty(),
        };
    }

    let type_names = candidates.iter().map(|branch| variant_type_name(branch)).collect();
    let types = candidates
        .iter()
        .map(|branch| plain_variant(branch, extract_fields, options, depth))
        .collect();

    UnionResolution::Plain {
        types,
        type_names,
        has_null: !nulls.is_empty(),
    }
}

fn plain_variant(
    branch: &Value,
    extract_fields: ObjectFieldsFn,
    options: &ExtractOptions,
    depth: usize,
) -> TypeRef {
    if let Some(values) = branch.get("enum").and_then(Value::as_array) {
        let values = values.iter().map(scalar_text).collect();
        return Field::new(VARIANT_FIELD_NAME, FieldType::Enum { values }).into();
    }
    if let Some(value) = branch.get("const") {
        let values = vec![scalar_text(value)];
        return Field::new(VARIANT_FIELD_NAME, FieldType::Enum { values }).into();
    }
    if branch.get("properties").is_some() {
        let fields = extract_fields(branch, options, depth + 1);
        return Field::new(VARIANT_FIELD_NAME, FieldType::Object { fields }).into();
    }
    if branch.get("type").is_some_and(Value::is_string) {
        return TypeRef::Kind(classify(branch));
    }
    TypeRef::Kind(FieldKind::Any)
}
