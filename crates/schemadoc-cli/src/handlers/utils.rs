//! Shared utilities for command handlers

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{Error, ErrorContext, Result};
use schemadoc_core::{Describer, ExtractOptions, RenderOptions};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a schema file as text
pub fn read_schema(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;
    debug!(path = %path.display(), bytes = content.len(), "Schema file read");
    Ok(content)
}

/// Extraction options: flags over config file over defaults
pub fn extract_options(args: &ExtractArgs, config: &Config) -> ExtractOptions {
    let mut options = config.extract;
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }
    if args.include_defaults {
        options = options.with_include_defaults(true);
    }
    options
}

/// Render options: flags over config file over defaults
pub fn render_options(indent: Option<usize>, config: &Config) -> RenderOptions {
    match indent {
        Some(indent) => config.render.options.with_indent_size(indent),
        None => config.render.options,
    }
}

/// Describer with the built-in adapters and themes
pub fn describer(args: &ExtractArgs, indent: Option<usize>, config: &Config) -> Describer {
    Describer::new()
        .with_extract_options(extract_options(args, config))
        .with_render_options(render_options(indent, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.extract.max_depth = 5;
        config.render.options.indent_size = 4;

        let args = ExtractArgs {
            max_depth: Some(1),
            include_defaults: true,
            adapter: None,
        };
        let options = extract_options(&args, &config);
        assert_eq!(options.max_depth, 1);
        assert!(options.include_defaults);

        let options = extract_options(&ExtractArgs::default(), &config);
        assert_eq!(options.max_depth, 5);
        assert!(!options.include_defaults);

        assert_eq!(render_options(None, &config).indent_size, 4);
        assert_eq!(render_options(Some(0), &config).indent_size, 0);
    }

    #[test]
    fn test_missing_schema_file() {
        let err = read_schema(Path::new("/nonexistent/schema.json")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }
}
