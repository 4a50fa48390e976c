use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::Property;
use crate::utils::format::format_price;

/// Denormalized copy of a property taken when it is favorited.
///
/// Later catalog changes do not propagate to existing snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPropertySnapshot {
    pub id: String,
    pub title: String,
    /// Display-formatted price, e.g. `$3,250,000`
    pub price: String,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub sqft: u32,
    #[serde(default)]
    pub image: String,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub view_count: u32,
}

impl SavedPropertySnapshot {
    pub fn from_property(property: &Property, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            price: format_price(property.price),
            location: property.location.clone(),
            bedrooms: property.beds,
            bathrooms: property.baths,
            sqft: property.sqft,
            image: property.primary_image().unwrap_or_default().to_string(),
            saved_at,
            view_count: 1,
        }
    }

    /// Shareable link path for the saved property
    pub fn link(&self) -> String {
        format!("/property/{}", self.id)
    }
}
