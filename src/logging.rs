//! Tracing setup.
//!
//! The terminal belongs to the UI, so log lines can only go to a file.  When
//! no file is configured no subscriber is installed and every `tracing`
//! macro is a no-op.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_file`, appending.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .with_context(|| format!("invalid log filter {default_filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
