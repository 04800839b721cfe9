//! Widget descriptors.
//!
//! A widget module hands the registry a [`WidgetDescriptor`]: its stable name,
//! how its element is registered with the platform, an opaque handle to the
//! element implementation, and its style bundle.

use std::any::Any;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sigil_style::descriptor::StyleDescriptor;

use crate::error::{RegistryError, Result};
use crate::platform::DefineOptions;

/// How a widget's element is registered with the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// An autonomous custom element.
    Standalone,
    /// A customized built-in element extending a native tag.
    ExtendsNative,
}

impl ElementKind {
    /// Canonical textual name, as used in manifests.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standalone => "custom-element",
            Self::ExtendsNative => "extends-element",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    /// The unrecognized kind text.
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "custom-element" | "standalone" => Ok(Self::Standalone),
            "extends-element" | "extends-native" => Ok(Self::ExtendsNative),
            other => Err(other.to_string()),
        }
    }
}

/// Opaque handle to a widget's element implementation.
///
/// The registry never looks inside; it only passes the handle to the
/// platform's element registry, which can downcast it to whatever type the
/// host uses for element constructors.
#[derive(Clone)]
pub struct ElementRef {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ElementRef {
    /// Wrap an element implementation.
    pub fn new<T: Any + Send + Sync>(element: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(element),
        }
    }

    /// Reference an element implementation by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(NamedElement(name.into()))
    }

    /// Type name of the wrapped implementation, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Downcast to the concrete implementation type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Whether both handles point at the same implementation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ElementRef").field(&self.type_name).finish()
    }
}

/// Element implementation known only by name, e.g. from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedElement(pub String);

/// Everything the registry needs to activate a widget.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    name: String,
    kind: ElementKind,
    element: ElementRef,
    extends_tag: Option<String>,
    style: StyleDescriptor,
}

impl WidgetDescriptor {
    /// Describe a standalone custom element.
    pub fn standalone(name: impl Into<String>, element: ElementRef, style: StyleDescriptor) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Standalone,
            element,
            extends_tag: None,
            style,
        }
    }

    /// Describe an element that extends the native `tag`.
    pub fn extending(
        name: impl Into<String>,
        tag: impl Into<String>,
        element: ElementRef,
        style: StyleDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::ExtendsNative,
            element,
            extends_tag: Some(tag.into()),
            style,
        }
    }

    /// Describe a widget with an explicit kind.
    pub fn new(
        name: impl Into<String>,
        kind: ElementKind,
        element: ElementRef,
        extends_tag: Option<String>,
        style: StyleDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            element,
            extends_tag,
            style,
        }
    }

    /// Stable widget name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registration variant.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Element implementation handle.
    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    /// Native tag this widget extends.
    pub fn extends_tag(&self) -> Option<&str> {
        self.extends_tag.as_deref()
    }

    /// Style bundle.
    pub fn style(&self) -> &StyleDescriptor {
        &self.style
    }

    /// Check that the descriptor can be registered.
    pub fn validate(&self) -> Result<()> {
        if self.kind == ElementKind::ExtendsNative
            && self.extends_tag.as_deref().is_none_or(str::is_empty)
        {
            return Err(RegistryError::MissingExtendsTag {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    /// Platform registration options for this descriptor.
    pub fn define_options(&self) -> DefineOptions {
        match self.kind {
            ElementKind::Standalone => DefineOptions::default(),
            ElementKind::ExtendsNative => DefineOptions {
                extends: self.extends_tag.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_style::descriptor::StyleConfig;

    struct TestComponent;
    struct FancyButton;

    fn style() -> StyleDescriptor {
        StyleConfig::inline(".test { color: red; }")
            .var("--test", "value")
            .build()
            .unwrap()
    }

    #[test]
    fn standalone_descriptor() {
        let descriptor =
            WidgetDescriptor::standalone("test-component", ElementRef::new(TestComponent), style());

        assert_eq!(descriptor.name(), "test-component");
        assert_eq!(descriptor.kind(), ElementKind::Standalone);
        assert!(descriptor.extends_tag().is_none());
        assert!(descriptor.element().downcast_ref::<TestComponent>().is_some());
        assert_eq!(descriptor.define_options(), DefineOptions::default());
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn extending_descriptor() {
        let descriptor = WidgetDescriptor::extending(
            "fancy-button",
            "button",
            ElementRef::new(FancyButton),
            style(),
        );

        assert_eq!(descriptor.kind(), ElementKind::ExtendsNative);
        assert_eq!(descriptor.extends_tag(), Some("button"));
        assert_eq!(descriptor.define_options().extends.as_deref(), Some("button"));
    }

    #[test]
    fn extending_without_tag_is_invalid() {
        let descriptor = WidgetDescriptor::new(
            "fancy-button",
            ElementKind::ExtendsNative,
            ElementRef::named("FancyButton"),
            None,
            style(),
        );

        assert!(matches!(
            descriptor.validate(),
            Err(RegistryError::MissingExtendsTag { .. })
        ));
    }

    #[test]
    fn parse_kinds() {
        assert_eq!("custom-element".parse(), Ok(ElementKind::Standalone));
        assert_eq!("extends-native".parse(), Ok(ElementKind::ExtendsNative));
        assert_eq!("shadow-element".parse::<ElementKind>(), Err("shadow-element".to_string()));
    }

    #[test]
    fn element_ref_identity() {
        let a = ElementRef::named("SlideToggle");
        let b = a.clone();
        let c = ElementRef::named("SlideToggle");

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(
            a.downcast_ref::<NamedElement>(),
            Some(&NamedElement("SlideToggle".to_string()))
        );
    }
}
