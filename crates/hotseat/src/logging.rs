//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to a file so they stay out of the terminal UI.
pub fn init_file(path: &Path, fallback_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, keeping stdout for script output.
pub fn init_stderr(fallback_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::io::stderr)
        .try_init();
}
