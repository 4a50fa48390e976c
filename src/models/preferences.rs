use serde::{Deserialize, Serialize};

use super::property::PropertyType;

pub const BUDGET_MIN: u64 = 100_000;
pub const BUDGET_MAX: u64 = 2_000_000;
pub const BUDGET_STEP: u64 = 50_000;
pub const ROOMS_MIN: u8 = 1;
pub const ROOMS_MAX: u8 = 6;

/// Preferences gathered by the onboarding wizard, stored as a single record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub property_types: Vec<PropertyType>,
    pub budget: u64,
    pub location: String,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub features: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            property_types: Vec::new(),
            budget: 500_000,
            location: String::new(),
            bedrooms: 2,
            bathrooms: 1,
            features: Vec::new(),
        }
    }
}
