//! The read-only property catalog.
//!
//! The default catalog is bundled into the binary from `properties.json`; a different
//! catalog file can be configured. Either way it is loaded once and never mutated.

mod pager;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::warn;

pub use pager::Pager;

use crate::filters::{FilterState, apply_filters};
use crate::models::Property;

const BUILTIN_CATALOG: &str = include_str!("properties.json");

/// Most featured properties shown on the home screen
pub const FEATURED_LIMIT: usize = 4;

#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(properties: Vec<Property>) -> Result<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                bail!("Duplicate property id in catalog: {}", property.id);
            }
            if property.images.is_empty() {
                warn!(id = %property.id, "Catalog property has no images");
            }
        }

        Ok(Self { properties })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Bundled catalog is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let properties: Vec<Property> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Self::new(properties)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid catalog {}", path.display()))
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Featured properties in catalog order
    pub fn featured(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_featured).collect()
    }

    /// Featured properties shown on the home screen, capped at [`FEATURED_LIMIT`]
    pub fn featured_preview(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_featured).take(FEATURED_LIMIT).collect()
    }

    pub fn search(&self, filter: &FilterState) -> Vec<&Property> {
        apply_filters(&self.properties, filter)
    }

    /// Other properties sharing at least one feature tag, in catalog order
    pub fn similar_to(&self, id: &str, limit: usize) -> Vec<&Property> {
        let Some(subject) = self.find(id) else {
            return Vec::new();
        };

        self.properties
            .iter()
            .filter(|p| p.id != subject.id)
            .filter(|p| subject.features.iter().any(|tag| p.has_feature(tag)))
            .take(limit)
            .collect()
    }
}
