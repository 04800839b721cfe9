//! Dark/light theme activation.
//!
//! The chroma mode decides how dark and light overrides are scoped in the
//! composed stylesheet: behind a `prefers-color-scheme` media query, behind a
//! class on `body`, or not at all.

use cssparser::serialize_identifier;
use serde::Deserialize;

/// Global theming strategy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "ChromaSetting")]
pub enum ChromaMode {
    /// Follow the user agent via `prefers-color-scheme`.
    #[default]
    MediaQuery,
    /// Toggle with `body.dark` / `body.light`.
    ClassToggle,
    /// Toggle with host-supplied class names on `body`.
    Custom {
        /// Class that activates dark overrides.
        dark_class: String,
        /// Class that activates light overrides.
        light_class: String,
    },
    /// No theme wrapping; dark overrides are dropped.
    Disabled,
}

impl ChromaMode {
    /// Create a custom class-name mode.
    ///
    /// Class names should be non-empty; an empty name renders as the selector
    /// `body. {`, which matches nothing. Configuration files reject empty
    /// names.
    pub fn custom(dark_class: impl Into<String>, light_class: impl Into<String>) -> Self {
        Self::Custom {
            dark_class: dark_class.into(),
            light_class: light_class.into(),
        }
    }

    /// Whether theme wrapping is active.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Opening wrapper for dark-mode declarations.
    ///
    /// Returns an empty string when the mode is [`ChromaMode::Disabled`];
    /// callers must then skip the block entirely. The closing brace is the
    /// caller's responsibility.
    pub fn night_selector(&self) -> String {
        match self {
            Self::MediaQuery => "@media (prefers-color-scheme: dark) {".to_string(),
            Self::ClassToggle => "body.dark {".to_string(),
            Self::Custom { dark_class, .. } => body_class(dark_class),
            Self::Disabled => String::new(),
        }
    }

    /// Opening wrapper for light-mode declarations.
    ///
    /// Same contract as [`night_selector`](Self::night_selector).
    pub fn day_selector(&self) -> String {
        match self {
            Self::MediaQuery => "@media (prefers-color-scheme: light) {".to_string(),
            Self::ClassToggle => "body.light {".to_string(),
            Self::Custom { light_class, .. } => body_class(light_class),
            Self::Disabled => String::new(),
        }
    }
}

fn body_class(class: &str) -> String {
    let mut selector = String::from("body.");
    // Writing into a String cannot fail.
    let _ = serialize_identifier(class, &mut selector);
    selector.push_str(" {");
    selector
}

/// Configuration-file representation of [`ChromaMode`].
///
/// Accepts `"media-query"`, `"class-toggle"`, `"disabled"`, a boolean, or a
/// `{ dark = "..", light = ".." }` table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ChromaSetting {
    Flag(bool),
    Named(String),
    Classes { dark: String, light: String },
}

impl TryFrom<ChromaSetting> for ChromaMode {
    type Error = String;

    fn try_from(setting: ChromaSetting) -> Result<Self, Self::Error> {
        match setting {
            ChromaSetting::Flag(true) => Ok(Self::MediaQuery),
            ChromaSetting::Flag(false) => Ok(Self::Disabled),
            ChromaSetting::Named(name) => match name.as_str() {
                "media-query" => Ok(Self::MediaQuery),
                "class-toggle" => Ok(Self::ClassToggle),
                "disabled" => Ok(Self::Disabled),
                other => Err(format!(
                    "unknown chroma mode '{other}' (expected media-query, class-toggle or disabled)"
                )),
            },
            ChromaSetting::Classes { dark, light } => {
                if dark.is_empty() || light.is_empty() {
                    return Err("chroma class names must not be empty".to_string());
                }
                Ok(Self::custom(dark, light))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_media_query() {
        assert_eq!(ChromaMode::default(), ChromaMode::MediaQuery);
    }

    #[test]
    fn media_query_selectors() {
        let mode = ChromaMode::MediaQuery;
        assert_eq!(mode.night_selector(), "@media (prefers-color-scheme: dark) {");
        assert_eq!(mode.day_selector(), "@media (prefers-color-scheme: light) {");
    }

    #[test]
    fn class_toggle_selectors() {
        let mode = ChromaMode::ClassToggle;
        assert_eq!(mode.night_selector(), "body.dark {");
        assert_eq!(mode.day_selector(), "body.light {");
    }

    #[test]
    fn custom_selectors() {
        let mode = ChromaMode::custom("night", "day");
        assert_eq!(mode.night_selector(), "body.night {");
        assert_eq!(mode.day_selector(), "body.day {");

        let mode = ChromaMode::custom("custom-dark", "custom-light");
        assert_eq!(mode.night_selector(), "body.custom-dark {");
        assert_eq!(mode.day_selector(), "body.custom-light {");
    }

    #[test]
    fn custom_classes_are_escaped() {
        let mode = ChromaMode::custom("dark theme", "light");
        assert_eq!(mode.night_selector(), "body.dark\\ theme {");
    }

    #[test]
    fn disabled_selectors_are_empty() {
        let mode = ChromaMode::Disabled;
        assert_eq!(mode.night_selector(), "");
        assert_eq!(mode.day_selector(), "");
        assert!(!mode.is_enabled());
    }

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        chroma: ChromaMode,
    }

    fn parse(text: &str) -> Result<ChromaMode, toml::de::Error> {
        toml::from_str::<Wrapper>(text).map(|w| w.chroma)
    }

    #[test]
    fn deserialize_settings() {
        assert_eq!(parse(r#"chroma = "media-query""#).unwrap(), ChromaMode::MediaQuery);
        assert_eq!(parse(r#"chroma = "class-toggle""#).unwrap(), ChromaMode::ClassToggle);
        assert_eq!(parse(r#"chroma = "disabled""#).unwrap(), ChromaMode::Disabled);
        assert_eq!(parse("chroma = false").unwrap(), ChromaMode::Disabled);
        assert_eq!(
            parse(r#"chroma = { dark = "night", light = "day" }"#).unwrap(),
            ChromaMode::custom("night", "day")
        );
        assert!(parse(r#"chroma = "sepia""#).is_err());
    }

    #[test]
    fn empty_class_names_rejected() {
        assert!(parse(r#"chroma = { dark = "", light = "day" }"#).is_err());
        assert!(parse(r#"chroma = { dark = "night", light = "" }"#).is_err());
    }
}
