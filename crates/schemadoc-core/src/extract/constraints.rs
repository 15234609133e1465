//! Constraint extraction
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::model::{Constraint, ConstraintKind};
use serde_json::Value;

/// Collect the recognised validation keywords of a node, in fixed keyword order
pub fn extract_constraints(schema: &Value) -> Vec<Constraint> {
    ConstraintKind::ALL
        .iter()
        .filter_map(|kind| {
            schema.get(kind.keyword()).map(|value| Constraint {
                kind: *kind,
                value: value.clone(),
                display: display_constraint(*kind, value),
            })
        })
        .collect()
}

/// Human-readable fragment for one constraint
pub fn display_constraint(kind: ConstraintKind, value: &Value) -> String {
    let text = scalar_text(value);
    match kind {
        ConstraintKind::MinLength => format!("min {} chars", text),
        ConstraintKind::MaxLength => format!("max {} chars", text),
        ConstraintKind::Pattern => format!("pattern: {}", text),
        ConstraintKind::Format => format!("format: {}", text),
        ConstraintKind::Minimum => format!("min {}", text),
        ConstraintKind::Maximum => format!("max {}", text),
        ConstraintKind::MinItems => format!("min {} items", text),
        ConstraintKind::MaxItems => format!("max {} items", text),
    }
}

/// Strings verbatim, everything else as compact JSON
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
