//! The widget registry.
//!
//! A [`Registry`] holds the ordered list of active widgets and the global
//! chroma mode. [`Registry::define`] activates widgets and re-renders the one
//! managed stylesheet from every active widget; [`Registry::configure`]
//! swaps the chroma mode for the next render.
//!
//! The registry is an ordinary value rather than a process-wide singleton, so
//! independent registries can coexist (one per document, one per test).
//!
//! # Lifecycle
//!
//! A new registry starts with [`ChromaMode::MediaQuery`] and no active
//! widgets. State only grows: `define` appends, `configure` replaces the mode.
//! [`Registry::reset`] returns to the initial state and is meant for test
//! harnesses.

use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use sigil_style::chroma::ChromaMode;
use sigil_style::compose::{ExtractedStyles, compose};

use crate::catalog::WidgetCatalog;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::logging::targets;
use crate::platform::{
    ElementRegistry, FileStyleSink, MemoryElementRegistry, MemoryStyleSink, PlatformError,
    StyleSink,
};
use crate::widget::WidgetDescriptor;

/// Builder for [`Registry`].
pub struct RegistryBuilder {
    catalog: WidgetCatalog,
    chroma: ChromaMode,
    elements: Option<Box<dyn ElementRegistry>>,
    sink: Option<Box<dyn StyleSink>>,
}

impl RegistryBuilder {
    fn new() -> Self {
        Self {
            catalog: WidgetCatalog::new(),
            chroma: ChromaMode::default(),
            elements: None,
            sink: None,
        }
    }

    /// Set the widget catalog names are resolved against.
    pub fn catalog(mut self, catalog: WidgetCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the initial chroma mode.
    pub fn chroma(mut self, chroma: ChromaMode) -> Self {
        self.chroma = chroma;
        self
    }

    /// Set the platform element registry.
    ///
    /// Defaults to a fresh [`MemoryElementRegistry`].
    pub fn element_registry(mut self, elements: impl ElementRegistry + 'static) -> Self {
        self.elements = Some(Box::new(elements));
        self
    }

    /// Set the style sink.
    ///
    /// Defaults to a fresh [`MemoryStyleSink`].
    pub fn style_sink(mut self, sink: impl StyleSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry {
        Registry {
            catalog: self.catalog,
            active: Vec::new(),
            chroma: self.chroma,
            elements: self
                .elements
                .unwrap_or_else(|| Box::new(MemoryElementRegistry::new())),
            sink: self.sink.unwrap_or_else(|| Box::new(MemoryStyleSink::new())),
            stylesheet: None,
        }
    }
}

/// Registry of active widgets and owner of the composed stylesheet.
///
/// # Example
///
/// ```
/// use sigil::prelude::*;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let sink = MemoryStyleSink::new();
/// let mut registry = Registry::builder()
///     .catalog(sigil::builtin::catalog())
///     .style_sink(sink.clone())
///     .build();
///
/// let styles = registry
///     .configure(ChromaMode::ClassToggle)
///     .define(["slide-toggle"])
///     .await
///     .unwrap();
///
/// assert_eq!(styles[0].component, "slide-toggle");
/// assert!(sink.css().unwrap().contains("body.dark {"));
/// # });
/// ```
pub struct Registry {
    catalog: WidgetCatalog,
    active: Vec<Arc<WidgetDescriptor>>,
    chroma: ChromaMode,
    elements: Box<dyn ElementRegistry>,
    sink: Box<dyn StyleSink>,
    stylesheet: Option<String>,
}

impl Registry {
    /// Create a registry with in-memory platform collaborators.
    pub fn new(catalog: WidgetCatalog) -> Self {
        Self::builder().catalog(catalog).build()
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Create a registry from configuration.
    ///
    /// Configured manifests are added to `catalog`, and a configured
    /// stylesheet path selects a [`FileStyleSink`].
    pub fn from_config(mut catalog: WidgetCatalog, config: &RegistryConfig) -> Result<Self> {
        config.load_manifests(&mut catalog)?;

        let builder = Self::builder().catalog(catalog).chroma(config.chroma.clone());
        Ok(match &config.stylesheet {
            Some(path) => builder.style_sink(FileStyleSink::new(path)).build(),
            None => builder.build(),
        })
    }

    /// Replace the chroma mode.
    ///
    /// Nothing is re-rendered until the next [`define`](Self::define).
    pub fn configure(&mut self, chroma: ChromaMode) -> &mut Self {
        tracing::debug!(target: targets::REGISTRY, ?chroma, "chroma mode configured");
        self.chroma = chroma;
        self
    }

    /// Current chroma mode.
    pub fn chroma(&self) -> &ChromaMode {
        &self.chroma
    }

    /// Opening wrapper for dark-mode declarations under the current mode.
    pub fn night_selector(&self) -> String {
        self.chroma.night_selector()
    }

    /// Opening wrapper for light-mode declarations under the current mode.
    pub fn day_selector(&self) -> String {
        self.chroma.day_selector()
    }

    /// The widget catalog.
    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    /// Active widgets, in activation order.
    pub fn active_widgets(&self) -> &[Arc<WidgetDescriptor>] {
        &self.active
    }

    /// Names of the active widgets, in activation order.
    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(|w| w.name())
    }

    /// Whether a widget named `name` is active.
    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|w| w.name() == name)
    }

    /// The stylesheet most recently injected into the sink.
    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    /// Render one widget's style bundle.
    pub fn extract_styles(widget: &WidgetDescriptor) -> ExtractedStyles {
        ExtractedStyles::from_descriptor(widget.name(), widget.style())
    }

    /// Rendered style bundles of every active widget, in activation order.
    pub fn extracted_styles(&self) -> Vec<ExtractedStyles> {
        self.active.iter().map(|w| Self::extract_styles(w)).collect()
    }

    /// Compose the stylesheet for the current state without injecting it.
    pub fn compose(&self) -> String {
        compose(&self.extracted_styles(), &self.chroma)
    }

    /// Activate widgets by name.
    ///
    /// Names that are not active yet are loaded concurrently, then committed
    /// in the order requested: each is validated, registered with the
    /// platform, and appended to the active list. Names that are already
    /// active are left alone. Once everything is committed the stylesheet is
    /// re-composed from all active widgets and injected.
    ///
    /// Returns the rendered styles of every active widget, not only the ones
    /// requested.
    ///
    /// # Errors
    ///
    /// The first name (in request order) that cannot be resolved, validated
    /// or registered aborts the call. Names before it stay committed and the
    /// stylesheet is re-composed to cover them; names after it are dropped.
    ///
    /// A [`RegistryError::Sink`] means every widget was committed (active and
    /// registered with the platform) but the stylesheet was not injected;
    /// [`stylesheet`](Self::stylesheet) still holds the last text that was.
    /// The next successful `define` injects the full composition again.
    pub async fn define<I, S>(&mut self, names: I) -> Result<Vec<ExtractedStyles>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();

        let mut pending: Vec<&str> = Vec::new();
        for name in &requested {
            if !self.is_active(name) && !pending.contains(&name.as_str()) {
                pending.push(name);
            }
        }

        let catalog = &self.catalog;
        let loaded = join_all(pending.iter().map(|name| catalog.resolve(name))).await;

        let mut committed = 0;
        let mut failure = None;
        for (name, descriptor) in pending.iter().zip(loaded) {
            match descriptor.and_then(|descriptor| self.commit(name, descriptor)) {
                Ok(()) => committed += 1,
                Err(err) => {
                    tracing::warn!(target: targets::REGISTRY, widget = name, error = %err, "define failed");
                    failure = Some(err);
                    break;
                }
            }
        }

        if let Some(err) = failure {
            if committed > 0 {
                if let Err(sink_err) = self.inject() {
                    tracing::warn!(target: targets::SINK, error = %sink_err, "stylesheet injection failed");
                }
            }
            return Err(err);
        }

        self.inject()?;
        tracing::info!(
            target: targets::REGISTRY,
            requested = requested.len(),
            committed,
            active = self.active.len(),
            "widgets defined"
        );
        Ok(self.extracted_styles())
    }

    /// Validate, register and append one loaded widget.
    fn commit(&mut self, name: &str, descriptor: Arc<WidgetDescriptor>) -> Result<()> {
        if descriptor.name() != name {
            return Err(RegistryError::NameMismatch {
                requested: name.to_string(),
                found: descriptor.name().to_string(),
            });
        }
        descriptor.validate()?;

        match self
            .elements
            .define(name, descriptor.element(), &descriptor.define_options())
        {
            Ok(()) => {}
            // Registrations outlive `reset`; the element is already available.
            Err(PlatformError::AlreadyDefined(_)) => {
                tracing::debug!(target: targets::REGISTRY, widget = name, "element already registered");
            }
            Err(source) => {
                return Err(RegistryError::Registration {
                    name: name.to_string(),
                    source,
                });
            }
        }

        tracing::debug!(
            target: targets::REGISTRY,
            widget = name,
            kind = %descriptor.kind(),
            element = descriptor.element().type_name(),
            "widget committed"
        );
        self.active.push(descriptor);
        Ok(())
    }

    /// Compose the stylesheet and replace the sink's contents with it.
    fn inject(&mut self) -> Result<()> {
        let css = self.compose();
        self.sink.replace(&css).map_err(RegistryError::Sink)?;
        tracing::trace!(target: targets::SINK, bytes = css.len(), "stylesheet injected");
        self.stylesheet = Some(css);
        Ok(())
    }

    /// Return to the initial state: media-query chroma, no active widgets,
    /// no injected stylesheet.
    ///
    /// Platform element registrations are not undone.
    pub fn reset(&mut self) -> Result<()> {
        self.active.clear();
        self.chroma = ChromaMode::default();
        self.stylesheet = None;
        self.sink.clear().map_err(RegistryError::Sink)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("catalog", &self.catalog)
            .field("active", &self.active_names().collect::<Vec<_>>())
            .field("chroma", &self.chroma)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("catalog", &self.catalog)
            .field("chroma", &self.chroma)
            .finish_non_exhaustive()
    }
}
