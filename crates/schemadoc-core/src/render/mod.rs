//! Theme renderers and the theme registry
//!
//! A theme is a total function from a [`SchemaModel`] to text. Themes only
//! walk structure already present in the field tree; depth limiting happens
//! once, at extraction time.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod condensed;
pub mod expanded;
pub mod json;
pub mod standard;

pub use condensed::CondensedTheme;
pub use expanded::ExpandedTheme;
pub use json::JsonTheme;
pub use standard::StandardTheme;

use crate::error::{Error, Result};
use crate::model::SchemaModel;
use crate::options::RenderOptions;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

pub const STANDARD: &str = "standard";
pub const EXPANDED: &str = "expanded";
pub const CONDENSED: &str = "condensed";
pub const JSON: &str = "json";

/// A named rendering strategy
pub trait Theme: Send + Sync {
    /// Registry name of the theme
    fn name(&self) -> &'static str;

    /// Render a model; never fails
    fn render(&self, model: &SchemaModel, options: &RenderOptions) -> String;
}

/// Ordered theme name -> theme registry
pub struct ThemeRegistry {
    themes: Vec<Box<dyn Theme>>,
}

impl ThemeRegistry {
    /// Registry without any themes
    pub fn empty() -> Self {
        Self { themes: Vec::new() }
    }

    /// Registry holding the built-in themes in their canonical order
    pub fn with_builtin_themes() -> Self {
        let mut registry = Self::empty();
        registry.register(StandardTheme);
        registry.register(ExpandedTheme);
        registry.register(CondensedTheme);
        registry.register(JsonTheme);
        registry
    }

    /// Add a theme, replacing any theme registered under the same name
    pub fn register(&mut self, theme: impl Theme + 'static) {
        let theme: Box<dyn Theme> = Box::new(theme);
        match self.themes.iter_mut().find(|t| t.name() == theme.name()) {
            Some(existing) => *existing = theme,
            None => self.themes.push(theme),
        }
    }

    pub fn get(&self, name: &str) -> Result<&dyn Theme> {
        self.themes
            .iter()
            .find(|theme| theme.name() == name)
            .map(|theme| theme.as_ref())
            .ok_or_else(|| Error::unknown_theme(name, &self.names()))
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<&'static str> {
        self.themes.iter().map(|theme| theme.name()).collect()
    }

    pub fn render(&self, model: &SchemaModel, theme: &str, options: &RenderOptions) -> Result<String> {
        let theme = self.get(theme)?;
        debug!(theme = theme.name(), fields = model.fields.len(), "Rendering schema model");
        Ok(theme.render(model, options))
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_builtin_themes()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.names())
            .finish()
    }
}

/// Process-wide registry of the built-in themes
pub fn default_registry() -> &'static ThemeRegistry {
    static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ThemeRegistry::with_builtin_themes)
}

/// Render `model` with the built-in theme called `theme`
///
/// Fails only when `theme` is not a registered theme name.
pub fn render(model: &SchemaModel, theme: &str, options: &RenderOptions) -> Result<String> {
    default_registry().render(model, theme, options)
}
