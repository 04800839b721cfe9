//! Widget catalog: the name-to-module lookup table.
//!
//! Each entry maps a stable widget name to a lazy, asynchronous loader. The
//! registry resolves names through the catalog when they are defined, so a
//! widget's module (and its style bundle) is only produced once it is needed.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use indexmap::IndexMap;

use crate::error::{RegistryError, Result};
use crate::logging::targets;
use crate::widget::WidgetDescriptor;

type LoadFuture = BoxFuture<'static, Result<Option<Arc<WidgetDescriptor>>>>;
type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Lookup table from widget names to lazy loaders.
///
/// A loader yields `Ok(None)` when its module exists but exports no usable
/// descriptor; the registry reports that as a missing component.
///
/// # Example
///
/// ```
/// use sigil::catalog::WidgetCatalog;
/// use sigil::widget::{ElementRef, WidgetDescriptor};
/// use sigil_style::descriptor::StyleConfig;
///
/// async fn color_chip() -> sigil::Result<Option<WidgetDescriptor>> {
///     let style = StyleConfig::inline(".chip {}").var("--chip-bg", "#eee").build()?;
///     Ok(Some(WidgetDescriptor::standalone(
///         "color-chip",
///         ElementRef::named("ColorChip"),
///         style,
///     )))
/// }
///
/// let mut catalog = WidgetCatalog::new();
/// catalog.register("color-chip", color_chip);
///
/// assert!(catalog.contains("color-chip"));
/// ```
#[derive(Clone, Default)]
pub struct WidgetCatalog {
    loaders: IndexMap<String, Loader>,
}

impl WidgetCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a lazy loader under `name`, replacing any previous entry.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, loader: F) -> &mut Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Option<WidgetDescriptor>>> + Send + 'static,
    {
        self.insert(
            name.into(),
            Arc::new(move || loader().map(|loaded| loaded.map(|d| d.map(Arc::new))).boxed()),
        )
    }

    /// Register an already-built descriptor under its own name.
    pub fn register_descriptor(&mut self, descriptor: WidgetDescriptor) -> &mut Self {
        let name = descriptor.name().to_string();
        let descriptor = Arc::new(descriptor);
        self.insert(
            name,
            Arc::new(move || {
                let descriptor = Arc::clone(&descriptor);
                async move { Ok(Some(descriptor)) }.boxed()
            }),
        )
    }

    fn insert(&mut self, name: String, loader: Loader) -> &mut Self {
        if self.loaders.insert(name.clone(), loader).is_some() {
            tracing::debug!(target: targets::CATALOG, widget = %name, "catalog entry replaced");
        }
        self
    }

    /// Whether `name` has an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.loaders.keys().map(|k| k.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Load the descriptor registered under `name`.
    pub async fn resolve(&self, name: &str) -> Result<Arc<WidgetDescriptor>> {
        let loader = self
            .loaders
            .get(name)
            .ok_or_else(|| RegistryError::unknown_widget(name))?;

        tracing::debug!(target: targets::CATALOG, widget = name, "loading widget");
        loader()
            .await?
            .ok_or_else(|| RegistryError::missing_descriptor(name))
    }
}

impl fmt::Debug for WidgetCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetCatalog")
            .field("widgets", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}
