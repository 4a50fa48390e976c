//! Runtime configuration and the shared application context.
//!
//! Configuration lives in `<data_dir>/config.json`. Every field is optional; a missing file
//! means all defaults. Example:
//!
//! ```json
//! {
//!   "catalogPath": "/srv/listings/catalog.json",
//!   "analysisDelayMs": 1500,
//!   "explorePageSize": 12,
//!   "logLevel": "debug"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Pager};
use crate::storage::{FileBackend, Repository};
use crate::utils::get_data_dir;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Replacement for the bundled catalog. Relative paths resolve against the data directory.
    pub catalog_path: Option<PathBuf>,
    pub analysis_delay_ms: u64,
    pub submission_delay_ms: u64,
    pub home_page_size: usize,
    pub explore_page_size: usize,
    pub page_step: usize,
    /// Default log filter when `PROPERTY_EXPLORER_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            analysis_delay_ms: 3000,
            submission_delay_ms: 1000,
            home_page_size: 4,
            explore_page_size: 8,
            page_step: 4,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load `config.json` from `data_dir`. A missing file yields the defaults; a malformed
    /// one is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn home_pager(&self) -> Pager {
        Pager::new(self.home_page_size, self.page_step)
    }

    pub fn explore_pager(&self) -> Pager {
        Pager::new(self.explore_page_size, self.page_step)
    }

    /// The configured catalog, or the bundled one
    pub fn load_catalog(&self, data_dir: &Path) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(&data_dir.join(path)),
            None => Catalog::builtin(),
        }
    }
}

/// Everything a command or screen needs: where data lives, how to behave, what to show
#[derive(Debug)]
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub catalog: Catalog,
    pub repo: Repository<FileBackend>,
}

impl AppContext {
    /// Resolve the data directory, then load config, catalog and store from it
    pub fn open(explicit_dir: Option<&Path>) -> Result<Self> {
        let data_dir = get_data_dir(explicit_dir)?;
        let config = AppConfig::load(&data_dir)?;
        Self::with_config(data_dir, config)
    }

    /// Build the context from an already loaded config, creating `data_dir` if needed
    pub fn with_config(data_dir: PathBuf, config: AppConfig) -> Result<Self> {
        let repo = Repository::open(&data_dir)?;
        let catalog = config.load_catalog(&data_dir)?;

        debug!(data_dir = %data_dir.display(), properties = catalog.len(), "Opened context");
        Ok(Self { data_dir, config, catalog, repo })
    }
}
