//! Logging setup.
//!
//! Console-only `tracing` output for a one-shot CLI. Default level is
//! `info`; override with `RUST_LOG` (e.g. `RUST_LOG=debug` to see
//! per-stage detail).

use anyhow::{Context as _, Result};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Initializes the tracing subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the env filter cannot be built.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    Ok(())
}
