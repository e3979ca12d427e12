//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! The terminal is in raw mode on the alternate screen while the app runs,
//! so log records can never go to stdout or stderr. They are appended to the
//! configured log file; without one no subscriber is installed and every
//! event is dropped.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the level filter: `RUST_LOG` wins over the configured level
pub fn build_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber if the config names a log file
///
/// Returns whether logging was enabled.
pub fn init_logging(config: &Config) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };
    init_file_logging(path, &config.log_level)?;
    tracing::info!(log_file = %path.display(), "logging initialised");
    Ok(true)
}

fn init_file_logging(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating log directory {}", parent.display()))?;
        }
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
        .try_init()
        .context("installing tracing subscriber")?;

    Ok(())
}
