//! Tracing setup. Logs go to a file so they never tear the TUI.

use crate::config::RewindConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is
/// harmless; the second subscriber is dropped.
pub fn init(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
