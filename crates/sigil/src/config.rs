//! Registry configuration.
//!
//! ```toml
//! # "media-query" (default), "class-toggle", "disabled", false,
//! # or { dark = "night", light = "day" }
//! chroma = "class-toggle"
//!
//! # Write the composed stylesheet to a file instead of keeping it in memory.
//! stylesheet = "public/sigil.css"
//!
//! # Widget manifests to add to the catalog.
//! manifests = ["widgets/forms.toml"]
//! ```
//!
//! Relative paths are resolved against the directory of the configuration
//! file when it is loaded with [`RegistryConfig::from_file`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sigil_style::chroma::ChromaMode;

use crate::catalog::WidgetCatalog;
use crate::error::{RegistryError, Result};
use crate::manifest::WidgetManifest;

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Theming mode.
    pub chroma: ChromaMode,
    /// File receiving the composed stylesheet; in-memory when absent.
    pub stylesheet: Option<PathBuf>,
    /// Widget manifest files.
    pub manifests: Vec<PathBuf>,
}

impl RegistryConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| RegistryError::toml("<inline>", e))
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        let mut config: Self =
            toml::from_str(&text).map_err(|e| RegistryError::toml(path.display().to_string(), e))?;

        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }
        Ok(config)
    }

    /// Set the chroma mode.
    pub fn with_chroma(mut self, chroma: ChromaMode) -> Self {
        self.chroma = chroma;
        self
    }

    /// Load every configured manifest into `catalog`.
    pub fn load_manifests(&self, catalog: &mut WidgetCatalog) -> Result<()> {
        for path in &self.manifests {
            WidgetManifest::from_file(path)?.register(catalog);
        }
        Ok(())
    }

    fn resolve_paths(&mut self, dir: &Path) {
        if let Some(stylesheet) = &mut self.stylesheet {
            if stylesheet.is_relative() {
                *stylesheet = dir.join(&*stylesheet);
            }
        }
        for manifest in &mut self.manifests {
            if manifest.is_relative() {
                *manifest = dir.join(&*manifest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config.chroma, ChromaMode::MediaQuery);
        assert!(config.stylesheet.is_none());
        assert!(config.manifests.is_empty());
    }

    #[test]
    fn parses_chroma_variants() {
        let config = RegistryConfig::from_toml_str("chroma = false").unwrap();
        assert_eq!(config.chroma, ChromaMode::Disabled);

        let config =
            RegistryConfig::from_toml_str(r#"chroma = { dark = "dark-theme", light = "light-theme" }"#)
                .unwrap();
        assert_eq!(config.chroma, ChromaMode::custom("dark-theme", "light-theme"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = RegistryConfig::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, RegistryError::Toml { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sigil.toml");
        std::fs::write(
            &path,
            r#"
            chroma = "class-toggle"
            stylesheet = "out/sigil.css"
            manifests = ["widgets.toml", "/abs/widgets.toml"]
            "#,
        )
        .unwrap();

        let config = RegistryConfig::from_file(&path).unwrap();
        assert_eq!(config.chroma, ChromaMode::ClassToggle);
        assert_eq!(config.stylesheet, Some(dir.path().join("out/sigil.css")));
        assert_eq!(
            config.manifests,
            vec![dir.path().join("widgets.toml"), PathBuf::from("/abs/widgets.toml")]
        );
    }

    #[test]
    fn missing_file() {
        let err = RegistryConfig::from_file("/nonexistent/sigil.toml").unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }
}
