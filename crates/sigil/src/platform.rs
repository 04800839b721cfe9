//! Platform collaborators.
//!
//! The registry drives two external primitives it does not implement itself:
//!
//! - an [`ElementRegistry`] that makes element implementations available under
//!   their widget names, in a standalone or a native-extending variant;
//! - a [`StyleSink`], the single document-level location holding the composed
//!   stylesheet.
//!
//! In-memory implementations are provided for headless hosts and tests, plus a
//! [`FileStyleSink`] that keeps the stylesheet in a file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;
use crate::widget::ElementRef;

/// Options for registering an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineOptions {
    /// Native tag the element extends, for customized built-ins.
    pub extends: Option<String>,
}

/// Errors reported by an element registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// The name has already been used with this registry.
    #[error("the name \"{0}\" has already been used with this registry")]
    AlreadyDefined(String),
    /// The name is not a valid custom element name.
    #[error("\"{0}\" is not a valid custom element name")]
    InvalidName(String),
    /// Any other platform failure.
    #[error("{0}")]
    Other(String),
}

/// The platform's element-registration primitive.
pub trait ElementRegistry: Send {
    /// Register `element` under `name`.
    fn define(
        &mut self,
        name: &str,
        element: &ElementRef,
        options: &DefineOptions,
    ) -> Result<(), PlatformError>;
}

/// The single document-level stylesheet location.
pub trait StyleSink: Send {
    /// Replace the managed stylesheet with `css`.
    fn replace(&mut self, css: &str) -> io::Result<()>;

    /// Remove the managed stylesheet.
    fn clear(&mut self) -> io::Result<()> {
        self.replace("")
    }
}

/// Check a name against the custom element naming rules: it must start with
/// a lowercase ASCII letter, contain a hyphen, and have no uppercase ASCII.
pub fn is_valid_element_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase())
}

/// An element registered with a [`MemoryElementRegistry`].
#[derive(Debug, Clone)]
pub struct DefinedElement {
    /// Registered name.
    pub name: String,
    /// Element implementation.
    pub element: ElementRef,
    /// Registration options.
    pub options: DefineOptions,
}

/// In-memory element registry.
///
/// Clones share the same definitions, so a host can keep a handle for
/// lookups while the registry owns another. A name may be defined only once.
/// Custom element naming rules are enforced only by a registry created with
/// [`validating`](Self::validating).
#[derive(Debug, Clone, Default)]
pub struct MemoryElementRegistry {
    defined: Arc<Mutex<Vec<DefinedElement>>>,
    validate_names: bool,
}

impl MemoryElementRegistry {
    /// Create an empty registry that accepts any name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that rejects names failing
    /// [`is_valid_element_name`].
    pub fn validating() -> Self {
        Self {
            validate_names: true,
            ..Self::default()
        }
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<DefinedElement> {
        self.defined.lock().iter().find(|d| d.name == name).cloned()
    }

    /// Whether `name` has been defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.lock().iter().any(|d| d.name == name)
    }

    /// Defined names, in definition order.
    pub fn names(&self) -> Vec<String> {
        self.defined.lock().iter().map(|d| d.name.clone()).collect()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.defined.lock().len()
    }

    /// Whether nothing has been defined.
    pub fn is_empty(&self) -> bool {
        self.defined.lock().is_empty()
    }
}

impl ElementRegistry for MemoryElementRegistry {
    fn define(
        &mut self,
        name: &str,
        element: &ElementRef,
        options: &DefineOptions,
    ) -> Result<(), PlatformError> {
        if self.validate_names && !is_valid_element_name(name) {
            return Err(PlatformError::InvalidName(name.to_string()));
        }

        let mut defined = self.defined.lock();
        if defined.iter().any(|d| d.name == name) {
            return Err(PlatformError::AlreadyDefined(name.to_string()));
        }

        defined.push(DefinedElement {
            name: name.to_string(),
            element: element.clone(),
            options: options.clone(),
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
struct SinkState {
    css: Option<String>,
    writes: usize,
}

/// In-memory style sink.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyleSink {
    state: Arc<Mutex<SinkState>>,
}

impl MemoryStyleSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stylesheet text, or `None` if nothing has been injected.
    pub fn css(&self) -> Option<String> {
        self.state.lock().css.clone()
    }

    /// Number of injections so far.
    pub fn writes(&self) -> usize {
        self.state.lock().writes
    }
}

impl StyleSink for MemoryStyleSink {
    fn replace(&mut self, css: &str) -> io::Result<()> {
        let mut state = self.state.lock();
        state.css = Some(css.to_string());
        state.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.state.lock().css = None;
        Ok(())
    }
}

/// Style sink backed by a file.
///
/// Each replacement goes to a temporary file in the same directory that is
/// then renamed over the target, so readers never see a partial stylesheet.
#[derive(Debug, Clone)]
pub struct FileStyleSink {
    path: PathBuf,
}

impl FileStyleSink {
    /// Create a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "stylesheet".to_string());
        parent.join(format!(".{}.tmp.{}", file_name, std::process::id()))
    }
}

impl StyleSink for FileStyleSink {
    fn replace(&mut self, css: &str) -> io::Result<()> {
        let temp_path = self.temp_path();
        let result = (|| -> io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(css.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        })();

        match &result {
            Ok(()) => tracing::debug!(
                target: targets::SINK,
                path = %self.path.display(),
                bytes = css.len(),
                "stylesheet written"
            ),
            Err(_) => {
                fs::remove_file(&temp_path).ok();
            }
        }
        result
    }

    fn clear(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
