//! Style composition for Sigil widgets.
//!
//! Every widget ships a style bundle: base rules, custom-property defaults and
//! optional light/dark overrides. This crate turns those bundles into a single
//! stylesheet:
//!
//! - **Properties**: Ordered custom-property maps with `--name` normalization
//! - **Extraction**: A narrow scan for `--name: value;` declarations in raw style text
//! - **Descriptors**: Per-widget style bundles normalized into a fixed shape
//! - **Chroma**: Dark/light activation syntax for the global theming mode
//! - **Composition**: Deterministic merge of every active widget into one stylesheet
//!
//! # Example
//!
//! ```
//! use sigil_style::prelude::*;
//!
//! let descriptor = StyleConfig::inline(".toggle { color: var(--toggle-fg); }")
//!     .var("--toggle-fg", "#222")
//!     .build()
//!     .unwrap();
//!
//! let styles = ExtractedStyles::from_descriptor("toggle", &descriptor);
//! let css = compose(&[styles], &ChromaMode::MediaQuery);
//!
//! assert!(css.starts_with(":root {\n  --toggle-fg: #222;\n}"));
//! ```

pub mod chroma;
pub mod compose;
pub mod descriptor;
pub mod extract;
pub mod properties;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::chroma::ChromaMode;
    pub use crate::compose::{ExtractedStyles, compose};
    pub use crate::descriptor::{BaseSource, StyleConfig, StyleDescriptor, ThemeOverrides};
    pub use crate::extract::{StyleBlock, extract};
    pub use crate::properties::PropertyMap;
}
