//! Error types for the schemadoc core library
//!
//! Extraction is total and never fails; errors only arise at the registry
//! boundaries (unknown theme or adapter names) and inside source adapters.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for schemadoc operations
#[derive(Error, Debug)]
pub enum Error {
    /// A theme name was requested that is not registered
    #[error("Unknown theme '{requested}' (valid themes: {})", valid.join(", "))]
    UnknownTheme {
        requested: String,
        valid: Vec<String>,
    },

    /// An adapter name was requested that is not registered
    #[error("Unknown adapter '{requested}' (valid adapters: {})", valid.join(", "))]
    UnknownAdapter {
        requested: String,
        valid: Vec<String>,
    },

    /// A source adapter could not produce a JSON-Schema document
    #[error("Adapter '{adapter}' failed: {message}")]
    Adapter {
        adapter: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown theme error
    pub fn unknown_theme(requested: impl Into<String>, valid: &[&str]) -> Self {
        Self::UnknownTheme {
            requested: requested.into(),
            valid: valid.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Create an unknown adapter error
    pub fn unknown_adapter(requested: impl Into<String>, valid: &[&str]) -> Self {
        Self::UnknownAdapter {
            requested: requested.into(),
            valid: valid.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// Create an adapter error without an underlying cause
    pub fn adapter(adapter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Adapter {
            adapter: adapter.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an adapter error wrapping the underlying cause
    pub fn adapter_with_source(
        adapter: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Adapter {
            adapter: adapter.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Whether this error comes from caller configuration rather than input data
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::UnknownTheme { .. } | Self::UnknownAdapter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_message_lists_valid_names() {
        let err = Error::unknown_theme("fancy", &["standard", "expanded", "condensed", "json"]);
        let message = err.to_string();
        assert!(message.contains("'fancy'"));
        assert!(message.contains("standard, expanded, condensed, json"));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_adapter_error_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::adapter_with_source("json", "invalid JSON", parse_err);
        assert_eq!(err.to_string(), "Adapter 'json' failed: invalid JSON");
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_configuration_error());
    }
}
