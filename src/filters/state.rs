use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, anyhow, bail};

use crate::models::PropertyType;
use crate::utils::format::{format_price, parse_amount};

/// Inclusive price range; `max: None` means no upper limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub const ANY: PriceRange = PriceRange { min: 0, max: None };

    /// Preset ranges offered by the filter bar, as `(label, value)`
    pub const PRESETS: [(&'static str, &'static str); 5] = [
        ("Any", "any"),
        ("< $500k", "0-500000"),
        ("$500k - 1M", "500000-1000000"),
        ("$1M - 2M", "1000000-2000000"),
        ("$2M+", "2000000+"),
    ];

    pub fn new(min: u64, max: Option<u64>) -> Result<Self> {
        if let Some(max) = max
            && min > max
        {
            bail!("Minimum price {} is above maximum {}", format_price(min), format_price(max));
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    pub fn is_any(&self) -> bool {
        *self == Self::ANY
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ANY
    }
}

impl FromStr for PriceRange {
    type Err = anyhow::Error;

    /// Accepts `any`, `min-max` and `min+`
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            return Ok(Self::ANY);
        }

        if let Some(min) = value.strip_suffix('+') {
            let min = parse_amount(min).with_context(|| format!("Invalid price range: '{}'", s))?;
            return Self::new(min, None);
        }

        let (min, max) = value
            .split_once('-')
            .ok_or_else(|| anyhow!("Invalid price range: '{}' (expected min-max or min+)", s))?;
        let min = parse_amount(min).with_context(|| format!("Invalid price range: '{}'", s))?;
        let max = parse_amount(max).with_context(|| format!("Invalid price range: '{}'", s))?;

        Self::new(min, Some(max))
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (0, None) => f.write_str("any price"),
            (min, None) => write!(f, "{}+", format_price(min)),
            (min, Some(max)) => write!(f, "{} - {}", format_price(min), format_price(max)),
        }
    }
}

/// Room-count minimum with an "any" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Minimum {
    #[default]
    Any,
    AtLeast(u32),
}

impl Minimum {
    pub fn admits(&self, count: f32) -> bool {
        match self {
            Minimum::Any => true,
            Minimum::AtLeast(n) => count >= *n as f32,
        }
    }
}

impl FromStr for Minimum {
    type Err = anyhow::Error;

    /// Accepts `any`, `3` and `3+`
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim();

        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            return Ok(Minimum::Any);
        }

        let digits = value.strip_suffix('+').unwrap_or(value);
        digits
            .parse::<u32>()
            .map(Minimum::AtLeast)
            .map_err(|_| anyhow!("Invalid room count: '{}' (expected a number, N+ or any)", s))
    }
}

impl fmt::Display for Minimum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Minimum::Any => f.write_str("any"),
            Minimum::AtLeast(n) => write!(f, "{}+", n),
        }
    }
}

/// Transient search criteria owned by the active screen.
///
/// Every populated criterion must match (AND); an empty state matches everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub query: String,
    pub property_type: Option<PropertyType>,
    pub price: PriceRange,
    pub beds: Minimum,
    pub baths: Minimum,
    pub features: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_beds(mut self, beds: Minimum) -> Self {
        self.beds = beds;
        self
    }

    pub fn with_baths(mut self, baths: Minimum) -> Self {
        self.baths = baths;
        self
    }

    pub fn with_feature(mut self, tag: impl Into<String>) -> Self {
        self.toggle_feature(&tag.into());
        self
    }

    /// Add the tag if absent, remove it if present (case-insensitive)
    pub fn toggle_feature(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            return;
        }

        if let Some(pos) = self.features.iter().position(|f| f.eq_ignore_ascii_case(tag)) {
            self.features.remove(pos);
        } else {
            self.features.push(tag.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.property_type.is_none()
            && self.price.is_any()
            && self.beds == Minimum::Any
            && self.baths == Minimum::Any
            && self.features.is_empty()
    }

    /// One-line summary for status bars, e.g. `type: House | price: $0 - $500,000`
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if !self.query.trim().is_empty() {
            parts.push(format!("\"{}\"", self.query.trim()));
        }
        if let Some(property_type) = self.property_type {
            parts.push(format!("type: {}", property_type));
        }
        if !self.price.is_any() {
            parts.push(format!("price: {}", self.price));
        }
        if self.beds != Minimum::Any {
            parts.push(format!("beds: {}", self.beds));
        }
        if self.baths != Minimum::Any {
            parts.push(format!("baths: {}", self.baths));
        }
        if !self.features.is_empty() {
            parts.push(format!("features: {}", self.features.join(", ")));
        }

        if parts.is_empty() { "no filters".to_string() } else { parts.join(" | ") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_presets_parse() {
        for (_, value) in PriceRange::PRESETS {
            assert!(value.parse::<PriceRange>().is_ok(), "preset {} should parse", value);
        }
    }

    #[test]
    fn test_price_range_parse_forms() {
        assert_eq!("any".parse::<PriceRange>().unwrap(), PriceRange::ANY);
        assert_eq!("".parse::<PriceRange>().unwrap(), PriceRange::ANY);
        assert_eq!(
            "500000-1000000".parse::<PriceRange>().unwrap(),
            PriceRange { min: 500_000, max: Some(1_000_000) }
        );
        assert_eq!(
            "2000000+".parse::<PriceRange>().unwrap(),
            PriceRange { min: 2_000_000, max: None }
        );
        assert_eq!(
            "$500,000-$750,000".parse::<PriceRange>().unwrap(),
            PriceRange { min: 500_000, max: Some(750_000) }
        );
    }

    #[test]
    fn test_price_range_rejects_malformed() {
        assert!("cheap".parse::<PriceRange>().is_err());
        assert!("100-abc".parse::<PriceRange>().is_err());
        assert!("500".parse::<PriceRange>().is_err());
        assert!("1000-10".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_price_range_contains_inclusive() {
        let range = PriceRange::new(500_000, Some(1_000_000)).unwrap();
        assert!(range.contains(500_000));
        assert!(range.contains(1_000_000));
        assert!(!range.contains(499_999));
        assert!(!range.contains(1_000_001));

        let open = PriceRange::new(2_000_000, None).unwrap();
        assert!(open.contains(u64::MAX));
        assert!(!open.contains(1_999_999));
    }

    #[test]
    fn test_minimum_parse_and_admits() {
        assert_eq!("any".parse::<Minimum>().unwrap(), Minimum::Any);
        assert_eq!("3".parse::<Minimum>().unwrap(), Minimum::AtLeast(3));
        assert_eq!("3+".parse::<Minimum>().unwrap(), Minimum::AtLeast(3));
        assert!("three".parse::<Minimum>().is_err());

        assert!(Minimum::Any.admits(0.0));
        assert!(Minimum::AtLeast(2).admits(2.5));
        assert!(Minimum::AtLeast(2).admits(2.0));
        assert!(!Minimum::AtLeast(3).admits(2.5));
    }

    #[test]
    fn test_filter_state_empty() {
        assert!(FilterState::new().is_empty());
        assert!(FilterState::new().with_query("   ").is_empty());
        assert!(!FilterState::new().with_query("miami").is_empty());
        assert!(!FilterState::new().with_beds(Minimum::AtLeast(1)).is_empty());
    }

    #[test]
    fn test_toggle_feature() {
        let mut state = FilterState::new();
        state.toggle_feature("Pool");
        state.toggle_feature("Gym");
        assert_eq!(state.features, vec!["Pool", "Gym"]);

        state.toggle_feature("pool");
        assert_eq!(state.features, vec!["Gym"]);

        state.toggle_feature("  ");
        assert_eq!(state.features, vec!["Gym"]);
    }

    #[test]
    fn test_summary() {
        assert_eq!(FilterState::new().summary(), "no filters");

        let state = FilterState::new()
            .with_type(PropertyType::House)
            .with_price(PriceRange::new(0, Some(500_000)).unwrap());
        assert_eq!(state.summary(), "type: House | price: $0 - $500,000");
    }
}
