//! Example and description metadata
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use crate::model::Example;
use serde_json::Value;

/// Keyword holding deliberately invalid examples
pub const INVALID_EXAMPLES_KEY: &str = "x-invalid-examples";

/// Collect valid examples (`examples`/`example`) followed by invalid ones
pub fn extract_examples(schema: &Value) -> Vec<Example> {
    let correct = match (schema.get("examples"), schema.get("example")) {
        (Some(Value::Array(values)), _) => values.clone(),
        (Some(value), _) => vec![value.clone()],
        (None, Some(value)) => vec![value.clone()],
        (None, None) => Vec::new(),
    };
    let invalid = match schema.get(INVALID_EXAMPLES_KEY) {
        Some(Value::Array(values)) => values.clone(),
        Some(value) => vec![value.clone()],
        None => Vec::new(),
    };

    correct
        .into_iter()
        .map(|value| to_example(value, true))
        .chain(invalid.into_iter().map(|value| to_example(value, false)))
        .collect()
}

/// An object with exactly `value` and `note` keys is an annotated example
fn to_example(value: Value, is_correct: bool) -> Example {
    if let Value::Object(map) = &value {
        if map.len() == 2 {
            if let (Some(inner), Some(Value::String(note))) = (map.get("value"), map.get("note")) {
                return Example {
                    value: inner.clone(),
                    is_correct,
                    note: Some(note.clone()),
                };
            }
        }
    }
    Example {
        value,
        is_correct,
        note: None,
    }
}

pub fn extract_description(schema: &Value) -> Option<String> {
    schema
        .get("description")
        .and_then(Value::as_str)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_correct_and_invalid_examples() {
        let schema = json!({
            "type": "string",
            "examples": ["alice", "bob"],
            "x-invalid-examples": [
                "",
                {"value": "a b", "note": "spaces are not allowed"}
            ]
        });
        let examples = extract_examples(&schema);
        assert_eq!(examples.len(), 4);
        assert!(examples[0].is_correct);
        assert_eq!(examples[1].value, json!("bob"));
        assert!(!examples[2].is_correct);
        assert_eq!(examples[2].note, None);
        assert_eq!(examples[3].value, json!("a b"));
        assert_eq!(examples[3].note.as_deref(), Some("spaces are not allowed"));
    }

    #[test]
    fn test_singular_example() {
        let examples = extract_examples(&json!({"example": 42}));
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0].value, json!(42));
        assert!(examples[0].is_correct);
    }

    #[test]
    fn test_object_example_is_not_mistaken_for_annotation() {
        let examples = extract_examples(&json!({"examples": [{"value": 1, "unit": "kg"}]}));
        assert_eq!(examples[0].value, json!({"value": 1, "unit": "kg"}));
        assert_eq!(examples[0].note, None);
    }

    #[test]
    fn test_description() {
        assert_eq!(
            extract_description(&json!({"description": "User name"})),
            Some("User name".to_string())
        );
        assert_eq!(extract_description(&json!({"description": 3})), None);
    }
}
