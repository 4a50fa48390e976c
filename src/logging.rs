//! Tracing subscriber setup.
//!
//! The filter comes from `PROPERTY_EXPLORER_LOG` when set, otherwise from the configured
//! level. The TUI owns the terminal, so it logs to a file in the data directory; plain CLI
//! commands log to stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::utils::environment::LOG_ENV;

pub const LOG_FILE: &str = "property-explorer.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// The log file inside `data_dir`
    pub fn file_in(data_dir: &Path) -> Self {
        LogTarget::File(data_dir.join(LOG_FILE))
    }
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Calling it twice is an error.
pub fn init(target: &LogTarget, default_level: &str) -> Result<()> {
    let filter = build_filter(default_level);

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    }
    .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
