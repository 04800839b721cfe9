//! Error types for the widget registry.

use std::path::PathBuf;

use crate::platform::PlatformError;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised while resolving, validating or registering widgets.
///
/// Failures are local to the `define` call that caused them; widgets committed
/// by earlier calls stay active and styled.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The catalog has no entry for the requested name.
    #[error("Component {name} not found")]
    UnknownWidget { name: String },

    /// The catalog entry loaded but produced no usable descriptor.
    #[error("Component {name} not found: module has no widget descriptor")]
    MissingDescriptor { name: String },

    /// The descriptor names an element kind the platform cannot register.
    #[error("Type {kind} not found for component {name}")]
    UnsupportedElementKind { name: String, kind: String },

    /// A native-extending widget without a tag to extend.
    #[error("Component {name} extends a native element but names no tag")]
    MissingExtendsTag { name: String },

    /// The loaded descriptor does not carry the requested name.
    #[error("Component {requested} resolved to a descriptor named {found}")]
    NameMismatch { requested: String, found: String },

    /// The platform refused the element definition.
    #[error("Failed to register component {name}: {source}")]
    Registration {
        name: String,
        #[source]
        source: PlatformError,
    },

    /// The stylesheet could not be written to the style sink.
    #[error("Failed to inject stylesheet: {0}")]
    Sink(#[source] std::io::Error),

    /// A widget's style bundle could not be built.
    #[error("Invalid widget style: {0}")]
    Style(#[from] sigil_style::Error),

    /// A configuration or manifest file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration or manifest file is not valid TOML for its schema.
    #[error("Invalid TOML in {origin}: {source}")]
    Toml {
        /// File path, or `<inline>` for text parsed from memory.
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl RegistryError {
    /// Create an unknown-widget error.
    pub fn unknown_widget(name: impl Into<String>) -> Self {
        Self::UnknownWidget { name: name.into() }
    }

    /// Create a missing-descriptor error.
    pub fn missing_descriptor(name: impl Into<String>) -> Self {
        Self::MissingDescriptor { name: name.into() }
    }

    /// Create an unsupported-element-kind error.
    pub fn unsupported_kind(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedElementKind {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a TOML error.
    pub fn toml(origin: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Toml {
            origin: origin.into(),
            source,
        }
    }

    /// The widget this error concerns, if any.
    pub fn widget(&self) -> Option<&str> {
        match self {
            Self::UnknownWidget { name }
            | Self::MissingDescriptor { name }
            | Self::UnsupportedElementKind { name, .. }
            | Self::MissingExtendsTag { name }
            | Self::Registration { name, .. } => Some(name),
            Self::NameMismatch { requested, .. } => Some(requested),
            Self::Sink(_) | Self::Style(_) | Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_widget() {
        let err = RegistryError::unknown_widget("non-existent");
        assert_eq!(err.to_string(), "Component non-existent not found");
        assert_eq!(err.widget(), Some("non-existent"));

        let err = RegistryError::unsupported_kind("fancy", "shadow-element");
        assert!(err.to_string().contains("shadow-element"));
        assert_eq!(err.widget(), Some("fancy"));
    }

    #[test]
    fn sink_errors_have_no_widget() {
        let err = RegistryError::Sink(std::io::Error::other("closed"));
        assert_eq!(err.widget(), None);
    }
}
