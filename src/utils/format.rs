//! Display formatting for prices, areas and timestamps

use anyhow::{Result, anyhow};
use chrono::{DateTime, Datelike, Utc};

/// Group digits in thousands: `3250000` → `3,250,000`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a price for display: `$3,250,000`
pub fn format_price(price: u64) -> String {
    format!("${}", format_thousands(price))
}

/// Bathrooms print without a trailing `.0`: `2`, `4.5`
pub fn format_baths(baths: f32) -> String {
    if baths.fract() == 0.0 { format!("{}", baths as u32) } else { format!("{:.1}", baths) }
}

/// Parse a user-typed amount, tolerating `$`, thousands separators and whitespace
pub fn parse_amount(input: &str) -> Result<u64> {
    let cleaned: String =
        input.chars().filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(anyhow!("Amount is empty"));
    }

    cleaned.parse::<u64>().map_err(|_| anyhow!("'{}' is not a whole number", input.trim()))
}

/// Tiered timestamp display relative to `now`:
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for ≥7 days: "Jan 15", "Dec 3, 2024"
pub fn format_timestamp(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        let minutes = duration.num_minutes();
        let hours = duration.num_hours();
        let days = duration.num_days();

        if days > 0 {
            format!("{}d ago", days)
        } else if hours > 0 {
            format!("{}h ago", hours)
        } else if minutes > 0 {
            format!("{}m ago", minutes)
        } else {
            "just now".to_string()
        }
    } else if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(785_000), "785,000");
        assert_eq!(format_thousands(3_250_000), "3,250,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(5_900_000), "$5,900,000");
    }

    #[test]
    fn test_format_baths() {
        assert_eq!(format_baths(2.0), "2");
        assert_eq!(format_baths(4.5), "4.5");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("2,450").unwrap(), 2450);
        assert_eq!(parse_amount(" $785,000 ").unwrap(), 785_000);
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12k").is_err());
        assert!(parse_amount("-5").is_err());
    }

    #[test]
    fn test_format_timestamp_relative() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(&(now - Duration::seconds(30)), &now), "just now");
        assert_eq!(format_timestamp(&(now - Duration::minutes(45)), &now), "45m ago");
        assert_eq!(format_timestamp(&(now - Duration::hours(3)), &now), "3h ago");
        assert_eq!(format_timestamp(&(now - Duration::days(5)), &now), "5d ago");
    }

    #[test]
    fn test_format_timestamp_absolute() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let same_year = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let last_year = Utc.with_ymd_and_hms(2024, 12, 3, 9, 0, 0).unwrap();

        assert_eq!(format_timestamp(&same_year, &now), "Jan 15");
        assert_eq!(format_timestamp(&last_year, &now), "Dec 3, 2024");
    }
}
