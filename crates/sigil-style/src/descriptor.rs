//! Per-widget style bundles.
//!
//! A widget declares its styling as a [`StyleConfig`]; building it yields an
//! immutable [`StyleDescriptor`] with the base text already scanned for
//! custom properties.

use std::path::PathBuf;

use serde::Deserialize;

use crate::extract::StyleBlock;
use crate::properties::PropertyMap;
use crate::{Error, Result};

/// Where a widget's base style text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseSource {
    /// Style text embedded in the widget.
    Inline(String),
    /// Style text stored in a file, read when the descriptor is built.
    File(PathBuf),
}

impl BaseSource {
    fn load(self) -> Result<String> {
        match self {
            Self::Inline(text) => Ok(text),
            Self::File(path) => std::fs::read_to_string(&path).map_err(|e| Error::io(path, e)),
        }
    }
}

impl From<&str> for BaseSource {
    fn from(text: &str) -> Self {
        Self::Inline(text.to_string())
    }
}

impl From<String> for BaseSource {
    fn from(text: String) -> Self {
        Self::Inline(text)
    }
}

/// Theme-specific override maps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeOverrides {
    /// Declarations applied in light mode.
    #[serde(default)]
    pub light: PropertyMap,
    /// Declarations applied in dark mode.
    #[serde(default)]
    pub dark: PropertyMap,
}

/// A widget's style configuration, as declared by the widget.
///
/// # Example
///
/// ```
/// use sigil_style::descriptor::StyleConfig;
///
/// let descriptor = StyleConfig::inline(".badge { color: var(--badge-fg); }")
///     .var("--badge-fg", "#111")
///     .theme([("--badge-fg", "#111")], [("--badge-fg", "#eee")])
///     .build()
///     .unwrap();
///
/// assert_eq!(descriptor.vars().get("badge-fg"), Some("#111"));
/// assert_eq!(descriptor.dark().and_then(|d| d.get("badge-fg")), Some("#eee"));
/// ```
#[derive(Debug, Clone)]
pub struct StyleConfig {
    base: BaseSource,
    vars: PropertyMap,
    theme: Option<ThemeOverrides>,
}

impl StyleConfig {
    /// Create a configuration from a base source.
    pub fn new(base: impl Into<BaseSource>) -> Self {
        Self {
            base: base.into(),
            vars: PropertyMap::new(),
            theme: None,
        }
    }

    /// Create a configuration with inline base text.
    pub fn inline(text: impl Into<String>) -> Self {
        Self::new(BaseSource::Inline(text.into()))
    }

    /// Create a configuration whose base text lives in a file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(BaseSource::File(path.into()))
    }

    /// Declare a default custom-property value.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.set(name, value);
        self
    }

    /// Declare several default custom-property values.
    pub fn vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.extend(vars);
        self
    }

    /// Set the light and dark override maps.
    pub fn theme<K1, V1, K2, V2>(
        mut self,
        light: impl IntoIterator<Item = (K1, V1)>,
        dark: impl IntoIterator<Item = (K2, V2)>,
    ) -> Self
    where
        K1: Into<String>,
        V1: Into<String>,
        K2: Into<String>,
        V2: Into<String>,
    {
        self.theme = Some(ThemeOverrides {
            light: light.into_iter().collect(),
            dark: dark.into_iter().collect(),
        });
        self
    }

    /// Set prebuilt theme overrides.
    pub fn theme_overrides(mut self, theme: ThemeOverrides) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> Result<StyleDescriptor> {
        StyleDescriptor::build(self)
    }
}

/// A widget's normalized style bundle.
///
/// `base` keeps the raw text for re-emission; its extracted properties are
/// informational only. Generated `:root` declarations always come from
/// `vars`, `light` and `dark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDescriptor {
    base: StyleBlock,
    vars: PropertyMap,
    light: Option<PropertyMap>,
    dark: Option<PropertyMap>,
}

impl StyleDescriptor {
    /// Normalize a style configuration.
    ///
    /// Fails only when a file base source cannot be read.
    pub fn build(config: StyleConfig) -> Result<Self> {
        let StyleConfig { base, vars, theme } = config;
        let base = StyleBlock::parse(base.load()?);
        let (light, dark) = match theme {
            Some(ThemeOverrides { light, dark }) => (Some(light), Some(dark)),
            None => (None, None),
        };

        Ok(Self {
            base,
            vars,
            light,
            dark,
        })
    }

    /// The base style block.
    pub fn base(&self) -> &StyleBlock {
        &self.base
    }

    /// Declared default values.
    pub fn vars(&self) -> &PropertyMap {
        &self.vars
    }

    /// Light-mode overrides, if the widget declares a theme.
    pub fn light(&self) -> Option<&PropertyMap> {
        self.light.as_ref()
    }

    /// Dark-mode overrides, if the widget declares a theme.
    pub fn dark(&self) -> Option<&PropertyMap> {
        self.dark.as_ref()
    }
}
