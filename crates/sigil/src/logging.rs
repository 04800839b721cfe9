//! Logging targets for Sigil.
//!
//! Sigil uses the `tracing` crate for instrumentation. Install a subscriber in
//! the host application to see its output:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("sigil::registry=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Registry state changes and stylesheet composition.
    pub const REGISTRY: &str = "sigil::registry";
    /// Widget resolution and manifest loading.
    pub const CATALOG: &str = "sigil::catalog";
    /// Stylesheet injection.
    pub const SINK: &str = "sigil::sink";
}
