use super::state::FilterState;
use crate::models::Property;

/// Apply filters to catalog properties, preserving catalog order.
///
/// Matching is a linear scan; there is no relevance ranking.
pub fn apply_filters<'a>(properties: &'a [Property], filter: &FilterState) -> Vec<&'a Property> {
    if filter.is_empty() {
        return properties.iter().collect();
    }

    properties.iter().filter(|property| matches(property, filter)).collect()
}

/// Whether a property satisfies every active criterion of the filter
pub fn matches(property: &Property, filter: &FilterState) -> bool {
    match_query(property, &filter.query)
        && match_type(property, filter)
        && filter.price.contains(property.price)
        && filter.beds.admits(property.beds as f32)
        && filter.baths.admits(property.baths)
        && match_features(property, &filter.features)
}

/// Case-insensitive substring match against title or location
fn match_query(property: &Property, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    property.title.to_lowercase().contains(&query)
        || property.location.to_lowercase().contains(&query)
}

/// Catalog entries carry no type field, so the type token is looked up in the title
fn match_type(property: &Property, filter: &FilterState) -> bool {
    match filter.property_type {
        Some(property_type) => property.title.to_lowercase().contains(&property_type.token()),
        None => true,
    }
}

/// Every selected feature tag must be present
fn match_features(property: &Property, features: &[String]) -> bool {
    features.iter().all(|tag| property.has_feature(tag))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::filters::state::{Minimum, PriceRange};
    use crate::models::PropertyType;

    fn create_test_property(id: &str, title: &str, location: &str, price: u64) -> Property {
        Property {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            location: location.to_string(),
            price,
            images: vec!["img.jpg".to_string()],
            beds: 3,
            baths: 2.5,
            sqft: 2000,
            features: vec!["Pool".to_string(), "Fireplace".to_string()],
            is_new: false,
            is_featured: false,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_apply_filters_empty_is_identity() {
        let properties = vec![
            create_test_property("a", "Historic Brownstone", "Brooklyn, NY", 2_450_000),
            create_test_property("b", "Modern Urban Condo", "Los Angeles, CA", 785_000),
        ];
        let result = apply_filters(&properties, &FilterState::new());
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_match_query_title_or_location() {
        let property = create_test_property("a", "Historic Brownstone", "Brooklyn, NY", 1);
        assert!(match_query(&property, "brown"));
        assert!(match_query(&property, "BROOKLYN"));
        assert!(match_query(&property, ""));
        assert!(!match_query(&property, "miami"));
    }

    #[test]
    fn test_match_type_uses_title() {
        let condo = create_test_property("a", "Modern Urban Condo", "LA", 1);
        let villa = create_test_property("b", "Waterfront Villa", "Miami", 1);

        let filter = FilterState::new().with_type(PropertyType::Condo);
        assert!(match_type(&condo, &filter));
        assert!(!match_type(&villa, &filter));
        assert!(match_type(&villa, &FilterState::new()));
    }

    #[test]
    fn test_price_boundaries_inclusive() {
        let filter =
            FilterState::new().with_price(PriceRange::new(500_000, Some(1_000_000)).unwrap());

        assert!(matches(&create_test_property("a", "t", "l", 500_000), &filter));
        assert!(matches(&create_test_property("b", "t", "l", 1_000_000), &filter));
        assert!(!matches(&create_test_property("c", "t", "l", 499_999), &filter));
        assert!(!matches(&create_test_property("d", "t", "l", 1_000_001), &filter));
    }

    #[test]
    fn test_unbounded_max() {
        let filter = FilterState::new().with_price(PriceRange::new(2_000_000, None).unwrap());
        assert!(matches(&create_test_property("a", "t", "l", 5_900_000), &filter));
        assert!(!matches(&create_test_property("b", "t", "l", 1_950_000), &filter));
    }

    #[test]
    fn test_room_minimums() {
        let property = create_test_property("a", "t", "l", 1);

        assert!(matches(&property, &FilterState::new().with_beds(Minimum::AtLeast(3))));
        assert!(!matches(&property, &FilterState::new().with_beds(Minimum::AtLeast(4))));
        assert!(matches(&property, &FilterState::new().with_baths(Minimum::AtLeast(2))));
        assert!(!matches(&property, &FilterState::new().with_baths(Minimum::AtLeast(3))));
    }

    #[test]
    fn test_features_all_required() {
        let property = create_test_property("a", "t", "l", 1);

        assert!(matches(&property, &FilterState::new().with_feature("pool")));
        assert!(matches(
            &property,
            &FilterState::new().with_feature("pool").with_feature("fireplace")
        ));
        assert!(!matches(&property, &FilterState::new().with_feature("pool").with_feature("gym")));
    }

    #[test]
    fn test_criteria_are_anded() {
        let property =
            create_test_property("a", "Beachfront Cottage", "Santa Barbara, CA", 1_950_000);

        let passing = FilterState::new()
            .with_query("santa")
            .with_price(PriceRange::new(1_000_000, Some(2_000_000)).unwrap())
            .with_beds(Minimum::AtLeast(3));
        assert!(matches(&property, &passing));

        let failing = passing.clone().with_type(PropertyType::Condo);
        assert!(!matches(&property, &failing));
    }

    #[test]
    fn test_apply_filters_preserves_order() {
        let properties = vec![
            create_test_property("a", "Lake House", "Tahoe", 3),
            create_test_property("b", "City Condo", "LA", 2),
            create_test_property("c", "Beach House", "Malibu", 1),
        ];

        let filter = FilterState::new().with_type(PropertyType::House);
        let ids: Vec<&str> =
            apply_filters(&properties, &filter).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
