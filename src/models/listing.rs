use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::property::{Property, PropertyType};

/// Owner marker stamped on every listing created locally
pub const CURRENT_USER: &str = "current-user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
}

/// A property authored through the listing wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListing {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    pub price: u64,
    pub beds: u32,
    pub baths: f32,
    #[serde(default)]
    pub sqft: u32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
    pub status: ListingStatus,
    #[serde(default)]
    pub views: u32,
    pub created_at: DateTime<Utc>,
}

impl UserListing {
    /// View the listing through the catalog shape so it renders with the same cards
    pub fn as_property(&self) -> Property {
        Property {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            price: self.price,
            images: self.images.clone(),
            beds: self.beds,
            baths: self.baths,
            sqft: self.sqft,
            features: self.features.clone(),
            is_new: self.is_new,
            is_featured: self.is_featured,
            created_at: self.created_at,
        }
    }
}
