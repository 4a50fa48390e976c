//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Builder for data directories with pre-seeded store documents
pub struct DataDirBuilder {
    temp_dir: TempDir,
    config: serde_json::Value,
}

impl DataDirBuilder {
    /// Empty data directory whose config disables the simulated delays
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = serde_json::json!({ "analysisDelayMs": 0, "submissionDelayMs": 0 });
        Self { temp_dir, config }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Set one config field, using its camelCase name
    pub fn with_config(mut self, key: &str, value: serde_json::Value) -> Self {
        self.config[key] = value;
        self
    }

    /// Write the raw document for a store key, e.g. `savedProperties`
    pub fn with_document(self, key: &str, contents: &str) -> Self {
        let path = self.temp_dir.path().join(format!("{}.json", key));
        fs::write(path, contents).expect("Failed to write store document");
        self
    }

    /// Write an alternative catalog and point the config at it
    pub fn with_catalog(self, contents: &str) -> Self {
        fs::write(self.temp_dir.path().join("catalog.json"), contents)
            .expect("Failed to write catalog");
        self.with_config("catalogPath", serde_json::json!("catalog.json"))
    }

    /// Write config.json and return the directory (consumes self)
    pub fn build(self) -> TempDir {
        let config = serde_json::to_string_pretty(&self.config).expect("Failed to encode config");
        fs::write(self.temp_dir.path().join("config.json"), config)
            .expect("Failed to write config.json");
        self.temp_dir
    }
}

/// Read a store document back as JSON, `Null` when it does not exist
pub fn read_document(dir: &Path, key: &str) -> serde_json::Value {
    match fs::read_to_string(dir.join(format!("{}.json", key))) {
        Ok(contents) => serde_json::from_str(&contents).expect("Store document is not JSON"),
        Err(_) => serde_json::Value::Null,
    }
}

/// The binary under test, pointed at `dir` and logging only errors
pub fn cli(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_property-explorer"));
    cmd.arg("--data-dir").arg(dir).env("PROPERTY_EXPLORER_LOG", "error");
    cmd
}

/// Snapshot document for a saved property with the given view count
pub fn saved_snapshot(id: &str, title: &str, saved_at: &str, view_count: u32) -> String {
    format!(
        r#"{{"id":"{id}","title":"{title}","price":"$1,000,000","location":"Somewhere, CA",
"bedrooms":3,"bathrooms":2.0,"sqft":1800,"image":"a.jpg","savedAt":"{saved_at}",
"viewCount":{view_count}}}"#
    )
}

/// Two-property catalog used where the bundled one would be too broad
pub const SMALL_CATALOG: &str = r#"[
  {
    "id": "home-a",
    "title": "Small House",
    "description": "A small house",
    "location": "Portland, OR",
    "price": 450000,
    "images": ["a1.jpg", "a2.jpg"],
    "beds": 2,
    "baths": 1,
    "sqft": 1100,
    "features": ["Garden"],
    "isFeatured": true,
    "createdAt": "2025-01-10T00:00:00Z"
  },
  {
    "id": "home-b",
    "title": "Big Apartment",
    "description": "A big apartment",
    "location": "Seattle, WA",
    "price": 900000,
    "images": ["b1.jpg"],
    "beds": 4,
    "baths": 2.5,
    "sqft": 2400,
    "features": ["Garden", "Gym"],
    "createdAt": "2025-01-12T00:00:00Z"
  }
]"#;
