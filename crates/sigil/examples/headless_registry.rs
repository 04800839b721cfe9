//! Headless registry example.
//!
//! Activates the bundled widgets under each chroma mode and prints the
//! composed stylesheet. Set `RUST_LOG=sigil=debug` to follow the registry.
//!
//! Run with: cargo run -p sigil --example headless_registry

use sigil::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> sigil::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "sigil=info".into()))
        .init();

    let modes = [
        ChromaMode::MediaQuery,
        ChromaMode::ClassToggle,
        ChromaMode::custom("night", "day"),
        ChromaMode::Disabled,
    ];

    for mode in modes {
        let sink = MemoryStyleSink::new();
        let mut registry = Registry::builder()
            .catalog(sigil::builtin::catalog())
            .style_sink(sink.clone())
            .build();

        let styles = registry
            .configure(mode.clone())
            .define(["slide-toggle", "e-sig"])
            .await?;

        println!("/* {mode:?}: {} widgets */", styles.len());
        println!("{}", sink.css().unwrap_or_default());
        println!();
    }

    Ok(())
}
