use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog property. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Whole currency units, currency-agnostic
    pub price: u64,
    pub images: Vec<String>,
    pub beds: u32,
    pub baths: f32,
    /// Floor area in square feet
    pub sqft: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive feature tag lookup
    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(tag.trim()))
    }
}

/// Property categories offered by the search, onboarding and listing forms.
///
/// Catalog entries do not carry a type; filtering matches [`PropertyType::token`]
/// against the title instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Apartment,
    Condo,
    Townhouse,
    #[serde(rename = "Single Family")]
    SingleFamily,
    #[serde(rename = "Multi Family")]
    MultiFamily,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
        PropertyType::SingleFamily,
        PropertyType::MultiFamily,
    ];

    /// The subset offered during onboarding and in the search filters
    pub const SEARCHABLE: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Townhouse,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::SingleFamily => "Single Family",
            PropertyType::MultiFamily => "Multi Family",
        }
    }

    /// Lowercase token searched for in titles
    pub fn token(&self) -> String {
        self.label().to_lowercase()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match normalized.as_str() {
            "house" => Ok(PropertyType::House),
            "apartment" => Ok(PropertyType::Apartment),
            "condo" => Ok(PropertyType::Condo),
            "townhouse" | "townhome" => Ok(PropertyType::Townhouse),
            "singlefamily" => Ok(PropertyType::SingleFamily),
            "multifamily" => Ok(PropertyType::MultiFamily),
            _ => Err(anyhow!(
                "Unknown property type: '{}' (valid types: house, apartment, condo, townhouse, \
                 single family, multi family)",
                s
            )),
        }
    }
}
