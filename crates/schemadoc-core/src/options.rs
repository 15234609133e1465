//! Extraction and rendering options
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Default maximum recursion depth for extraction
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default indent width for rendering
pub const DEFAULT_INDENT_SIZE: usize = 2;

/// Options controlling how a JSON-Schema document is turned into a field tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Depth beyond which nested objects, arrays and unions are not expanded
    pub max_depth: usize,
    /// Attach `default` values to extracted fields
    pub include_defaults: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            include_defaults: false,
        }
    }
}

impl ExtractOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_include_defaults(mut self, include_defaults: bool) -> Self {
        self.include_defaults = include_defaults;
        self
    }

    /// Whether structure at `depth` may still be expanded
    pub(crate) fn can_expand(&self, depth: usize) -> bool {
        depth < self.max_depth
    }
}

/// Options shared by all themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces per nesting level (also the JSON theme's indent width)
    pub indent_size: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

impl RenderOptions {
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let extract = ExtractOptions::default();
        assert_eq!(extract.max_depth, 3);
        assert!(!extract.include_defaults);
        assert_eq!(RenderOptions::default().indent_size, 2);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let extract: ExtractOptions = serde_json::from_str(r#"{"include_defaults": true}"#).unwrap();
        assert_eq!(extract.max_depth, DEFAULT_MAX_DEPTH);
        assert!(extract.include_defaults);

        let render: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(render, RenderOptions::default());
    }

    #[test]
    fn test_can_expand() {
        let options = ExtractOptions::default().with_max_depth(1);
        assert!(options.can_expand(0));
        assert!(!options.can_expand(1));
    }
}
