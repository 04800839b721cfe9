//! Widget manifests.
//!
//! A manifest declares widgets in TOML so hosts can add widgets without
//! writing loaders by hand:
//!
//! ```toml
//! [[widget]]
//! name = "fancy-button"
//! kind = "extends-element"
//! extends = "button"
//! element = "FancyButton"
//!
//! [widget.style]
//! base_file = "fancy-button.css"
//! vars = { "--fancy-bg" = "#0d6efd" }
//!
//! [widget.style.theme]
//! light = { "--fancy-fg" = "#000" }
//! dark = { "--fancy-fg" = "#fff" }
//! ```
//!
//! Entries are registered as lazy loaders. The element kind is checked and the
//! base file is read when the widget is defined, so those failures surface from
//! [`Registry::define`](crate::registry::Registry::define).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sigil_style::descriptor::{StyleConfig, ThemeOverrides};
use sigil_style::properties::PropertyMap;

use crate::catalog::WidgetCatalog;
use crate::error::{RegistryError, Result};
use crate::logging::targets;
use crate::widget::{ElementKind, ElementRef, WidgetDescriptor};

/// A set of widget declarations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetManifest {
    /// Declared widgets.
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetEntry>,
    /// Directory relative `base_file` paths are resolved against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// One declared widget.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WidgetEntry {
    /// Widget name.
    pub name: String,
    /// Element kind: `custom-element` (default) or `extends-element`.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Native tag for `extends-element` widgets.
    #[serde(default)]
    pub extends: Option<String>,
    /// Name of the element implementation; defaults to the widget name.
    #[serde(default)]
    pub element: Option<String>,
    /// Style bundle.
    #[serde(default)]
    pub style: StyleEntry,
}

/// Style bundle of a declared widget.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleEntry {
    /// Inline base style text.
    #[serde(default)]
    pub base: Option<String>,
    /// File holding the base style text; takes precedence over `base`.
    #[serde(default)]
    pub base_file: Option<PathBuf>,
    /// Default custom-property values.
    #[serde(default)]
    pub vars: PropertyMap,
    /// Light/dark overrides.
    #[serde(default)]
    pub theme: Option<ThemeOverrides>,
}

fn default_kind() -> String {
    ElementKind::Standalone.as_str().to_string()
}

impl WidgetManifest {
    /// Parse a manifest from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RegistryError::toml("<inline>", e))
    }

    /// Read a manifest file; `base_file` paths resolve against its directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        let mut manifest: Self =
            toml::from_str(&text).map_err(|e| RegistryError::toml(path.display().to_string(), e))?;
        manifest.base_dir = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    /// Register one lazy loader per declared widget.
    pub fn register(&self, catalog: &mut WidgetCatalog) {
        for entry in &self.widgets {
            let entry = entry.clone();
            let base_dir = self.base_dir.clone();
            tracing::debug!(target: targets::CATALOG, widget = %entry.name, "manifest widget registered");
            catalog.register(entry.name.clone(), move || {
                let entry = entry.clone();
                let base_dir = base_dir.clone();
                async move { entry.load(base_dir.as_deref()).await.map(Some) }
            });
        }
    }
}

impl WidgetEntry {
    /// Build the descriptor, reading the base file if one is declared.
    pub async fn load(self, base_dir: Option<&Path>) -> Result<WidgetDescriptor> {
        let kind: ElementKind = self
            .kind
            .parse()
            .map_err(|kind: String| RegistryError::unsupported_kind(&self.name, kind))?;

        let base = match &self.style.base_file {
            Some(file) => {
                let path = match base_dir {
                    Some(dir) if file.is_relative() => dir.join(file),
                    _ => file.clone(),
                };
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| RegistryError::io(&path, e))?
            }
            None => self.style.base.clone().unwrap_or_default(),
        };

        let mut config = StyleConfig::inline(base).vars(self.style.vars.iter());
        if let Some(theme) = self.style.theme {
            config = config.theme_overrides(theme);
        }

        let element = ElementRef::named(self.element.as_deref().unwrap_or(&self.name));
        Ok(WidgetDescriptor::new(
            self.name,
            kind,
            element,
            self.extends,
            config.build()?,
        ))
    }
}
