//! Nullability unwrapping
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use super::classify::is_null_schema;
use serde_json::Value;
use std::borrow::Cow;

/// Result of stripping a nullable wrapper from a node
#[derive(Debug, Clone, PartialEq)]
pub struct Unwrapped<'a> {
    /// The non-null schema; borrowed unless the `type` array had to be rewritten
    pub schema: Cow<'a, Value>,
    pub is_nullable: bool,
}

impl<'a> Unwrapped<'a> {
    fn unchanged(schema: &'a Value) -> Self {
        Self {
            schema: Cow::Borrowed(schema),
            is_nullable: false,
        }
    }
}

/// Detect the "nullable via union with null" encodings and return the inner schema
///
/// Recognised shapes, in order:
/// 1. `anyOf` with exactly one null branch and exactly one non-null branch. A
///    non-null branch that is itself an `anyOf` (optional wrapped in nullable)
///    is descended into, taking its first branch without a `not` marker.
/// 2. a `type` array containing `"null"` next to other types.
///
/// Anything else comes back untouched with `is_nullable = false`.
pub fn unwrap_nullable(schema: &Value) -> Unwrapped<'_> {
    if let Some(branches) = schema.get("anyOf").and_then(Value::as_array) {
        let (nulls, others): (Vec<&Value>, Vec<&Value>) =
            branches.iter().partition(|branch| is_null_schema(branch));
        if nulls.len() == 1 && others.len() == 1 {
            return Unwrapped {
                schema: Cow::Borrowed(descend_optional(others[0])),
                is_nullable: true,
            };
        }
    }

    if let Some(types) = schema.get("type").and_then(Value::as_array) {
        let has_null = types.iter().any(|t| t.as_str() == Some("null"));
        if has_null && types.len() > 1 {
            let remaining: Vec<Value> = types
                .iter()
                .filter(|t| t.as_str() != Some("null"))
                .cloned()
                .collect();
            let mut rewritten = schema.clone();
            if let Some(object) = rewritten.as_object_mut() {
                let collapsed = match remaining.as_slice() {
                    [single] => single.clone(),
                    _ => Value::Array(remaining),
                };
                object.insert("type".to_string(), collapsed);
            }
            return Unwrapped {
                schema: Cow::Owned(rewritten),
                is_nullable: true,
            };
        }
    }

    Unwrapped::unchanged(schema)
}

fn descend_optional(schema: &Value) -> &Value {
    schema
        .get("anyOf")
        .and_then(Value::as_array)
        .and_then(|inner| inner.iter().find(|branch| branch.get("not").is_none()))
        .unwrap_or(schema)
}
