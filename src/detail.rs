//! Static content of the property detail page

use crate::models::Property;

/// Canned "AI analysis" insights shown for every property, as (heading, body)
pub const PROPERTY_INSIGHTS: [(&str, &str); 3] = [
    (
        "Market Comparison",
        "This property is priced approximately 5% below similar properties in the area, \
         making it a potentially good investment opportunity.",
    ),
    (
        "Property Analysis",
        "Our image recognition detected high-end finishes and recent renovations, indicating \
         good property maintenance and potential for value appreciation.",
    ),
    (
        "Neighborhood Trends",
        "This area has seen a 7% increase in property values over the past year, with \
         projections suggesting continued growth due to new development projects nearby.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Details,
    Features,
    AiAnalysis,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] =
        [DetailTab::Details, DetailTab::Features, DetailTab::AiAnalysis];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Details => "Details",
            DetailTab::Features => "Features",
            DetailTab::AiAnalysis => "AI Analysis",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            DetailTab::Details => DetailTab::Features,
            DetailTab::Features => DetailTab::AiAnalysis,
            DetailTab::AiAnalysis => DetailTab::Details,
        }
    }
}

/// One-sentence neighborhood blurb under the map
pub fn location_blurb(location: &str) -> String {
    format!(
        "Located in {}, this property offers easy access to local amenities and transportation.",
        location
    )
}

/// Similar properties shown under the detail view
pub const SIMILAR_LIMIT: usize = 3;

/// Price per square foot, when the area is known
pub fn price_per_sqft(property: &Property) -> Option<u64> {
    (property.sqft > 0).then(|| property.price / u64::from(property.sqft))
}
