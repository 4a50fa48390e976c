use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Overrides the data directory when `--data-dir` is not given
pub const DATA_DIR_ENV: &str = "PROPERTY_EXPLORER_HOME";
/// Log filter directives, e.g. `debug` or `property_explorer=trace`
pub const LOG_ENV: &str = "PROPERTY_EXPLORER_LOG";

const APP_DIR_NAME: &str = "property-explorer";

/// Resolve the data directory: explicit path, then `PROPERTY_EXPLORER_HOME`, then the
/// platform data directory (`~/.local/share/property-explorer` on Linux)
pub fn get_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::data_dir().context("Could not determine the platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
