//! Integration tests for filter functionality against the bundled catalog

use property_explorer::catalog::Catalog;
use property_explorer::filters::apply::apply_filters;
use property_explorer::filters::parser::parse_filter;

fn search_ids(expression: &str) -> Vec<String> {
    let catalog = Catalog::builtin().expect("Load catalog");
    let filter = parse_filter(expression).expect("Parse filter");
    catalog.search(&filter).into_iter().map(|p| p.id.clone()).collect()
}

#[test]
fn test_filter_integration_empty_matches_everything() {
    assert_eq!(search_ids("").len(), 8);
}

#[test]
fn test_filter_integration_query_location() {
    assert_eq!(search_ids("brooklyn"), vec!["prop-4"]);
}

#[test]
fn test_filter_integration_query_ignores_features() {
    // "Mountain Views" is a feature of prop-7; only the title of prop-5 should match
    assert_eq!(search_ids("mountain"), vec!["prop-5"]);
}

#[test]
fn test_filter_integration_type_and_beds() {
    assert_eq!(search_ids("type:house beds:3+"), vec!["prop-3"]);
}

#[test]
fn test_filter_integration_price_and_feature() {
    assert_eq!(search_ids("price:2000000+ feature:pool"), vec!["prop-1", "prop-7", "prop-8"]);
}

#[test]
fn test_filter_integration_price_window() {
    assert_eq!(search_ids("price:0-1000000"), vec!["prop-2", "prop-3"]);
}

#[test]
fn test_filter_integration_fractional_baths() {
    assert_eq!(search_ids("beds:6+ baths:6"), vec!["prop-8"]);
    assert_eq!(search_ids("beds:6+ baths:5"), vec!["prop-5", "prop-8"]);
}

#[test]
fn test_filter_integration_all_features_required() {
    assert_eq!(search_ids("feature:fireplace,renovated"), vec!["prop-3"]);
}

#[test]
fn test_filter_integration_no_results() {
    assert!(search_ids("type:apartment price:100-200").is_empty());
}

#[test]
fn test_filter_integration_invalid_expression() {
    assert!(parse_filter("beds:many").is_err());
    assert!(parse_filter("price:5-1").is_err());
    assert!(parse_filter("garage:yes").is_err());
}

#[test]
fn test_filter_integration_apply_on_slice() {
    let catalog = Catalog::builtin().expect("Load catalog");
    let featured: Vec<_> = catalog.featured().into_iter().cloned().collect();

    let filter = parse_filter("feature:\"wine cellar\"").expect("Parse filter");
    let ids: Vec<&str> = apply_filters(&featured, &filter).iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["prop-1", "prop-8"]);
}

#[test]
fn test_filter_integration_similar_properties() {
    let catalog = Catalog::builtin().expect("Load catalog");
    let ids: Vec<&str> = catalog.similar_to("prop-5", 3).iter().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, vec!["prop-3", "prop-4", "prop-7"]);
    assert!(catalog.similar_to("prop-404", 3).is_empty());
}
