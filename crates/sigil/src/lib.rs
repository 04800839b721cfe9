//! Runtime widget registry for Sigil.
//!
//! Widgets are named, reusable UI elements, each with a style bundle. The
//! registry activates them on demand and keeps exactly one composed stylesheet
//! in sync with the set of active widgets:
//!
//! - **Catalog**: Lazy, asynchronous name-to-descriptor loaders
//! - **Registry**: Ordered activation, chroma configuration and stylesheet injection
//! - **Platform**: Element registration and style sink seams, with in-memory and file backends
//! - **Manifests**: Widgets declared in TOML
//! - **Builtin**: The bundled `slide-toggle` and `e-sig` widgets
//!
//! # Example
//!
//! ```
//! use sigil::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let sink = MemoryStyleSink::new();
//! let mut registry = Registry::builder()
//!     .catalog(sigil::builtin::catalog())
//!     .style_sink(sink.clone())
//!     .build();
//!
//! registry.define(["e-sig"]).await.unwrap();
//!
//! let css = sink.css().unwrap();
//! assert!(css.contains("@media (prefers-color-scheme: dark) {"));
//! assert!(css.contains(".ESignature"));
//! # });
//! ```

pub mod builtin;
pub mod catalog;
pub mod config;
mod error;
pub mod logging;
pub mod manifest;
pub mod platform;
pub mod registry;
pub mod widget;

pub use error::{RegistryError, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::catalog::WidgetCatalog;
    pub use crate::config::RegistryConfig;
    pub use crate::error::{RegistryError, Result};
    pub use crate::manifest::WidgetManifest;
    pub use crate::platform::{
        DefineOptions, ElementRegistry, FileStyleSink, MemoryElementRegistry, MemoryStyleSink,
        StyleSink,
    };
    pub use crate::registry::{Registry, RegistryBuilder};
    pub use crate::widget::{ElementKind, ElementRef, WidgetDescriptor};

    pub use sigil_style::prelude::*;
}
