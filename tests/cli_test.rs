/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against a temporary data directory
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{DataDirBuilder, SMALL_CATALOG, cli, read_document, saved_snapshot};
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_property-explorer"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse, filter and save real-estate listings"))
        .stdout(predicate::str::contains("inquire"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_property-explorer"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path()).arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_list_bundled_catalog() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Luxury Waterfront Villa"))
        .stdout(predicate::str::contains("8 of 8 properties (no filters)"));
}

#[test]
fn test_cli_list_with_filter_and_limit() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path())
        .args(["list", "--filter", "price:0-1000000", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 properties"));
}

#[test]
fn test_cli_list_bad_filter_fails() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path())
        .args(["list", "--filter", "beds:lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid room count"));
}

#[test]
fn test_cli_custom_catalog() {
    let dir = DataDirBuilder::new().with_catalog(SMALL_CATALOG).build();
    cli(dir.path())
        .args(["list", "--featured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Small House"))
        .stdout(predicate::str::contains("Big Apartment").not());
}

#[test]
fn test_cli_show_unknown_property() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path())
        .args(["show", "prop-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Property not found: prop-404"));
}

#[test]
fn test_cli_save_then_saved_then_unsave() {
    let dir = DataDirBuilder::new().build();

    cli(dir.path())
        .args(["save", "prop-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Added to saved properties"));

    let saved = read_document(dir.path(), "savedProperties");
    assert_eq!(saved[0]["id"], "prop-3");
    assert_eq!(saved[0]["price"], "$925,000");
    assert_eq!(saved[0]["viewCount"], 1);

    cli(dir.path())
        .args(["save", "prop-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already in saved properties"));

    cli(dir.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("Charming Suburban Farmhouse"))
        .stdout(predicate::str::contains("1 saved (All)"));

    cli(dir.path())
        .args(["unsave", "prop-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from saved properties"));
    assert_eq!(read_document(dir.path(), "savedProperties"), serde_json::json!([]));
}

#[test]
fn test_cli_show_counts_views_of_saved() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path()).args(["save", "prop-2"]).assert().success();

    cli(dir.path())
        .args(["show", "prop-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modern Urban Condo"))
        .stdout(predicate::str::contains("Saved (2 views)"));
    assert_eq!(read_document(dir.path(), "savedProperties")[0]["viewCount"], 2);
}

#[test]
fn test_cli_saved_frequent_view() {
    let documents = format!(
        "[{},{}]",
        saved_snapshot("prop-1", "Often Seen", "2025-01-01T00:00:00Z", 9),
        saved_snapshot("prop-2", "Rarely Seen", "2025-01-01T00:00:00Z", 1)
    );
    let dir = DataDirBuilder::new().with_document("savedProperties", &documents).build();

    cli(dir.path())
        .args(["saved", "--view", "frequent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Often Seen"))
        .stdout(predicate::str::contains("Rarely Seen").not());
}

#[test]
fn test_cli_saved_unknown_view_fails() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path()).args(["saved", "--view", "sometimes"]).assert().failure();
}

#[test]
fn test_cli_corrupt_store_reads_as_empty() {
    let dir = DataDirBuilder::new().with_document("savedProperties", "{not json").build();
    cli(dir.path())
        .arg("saved")
        .assert()
        .success()
        .stdout(predicate::str::contains("Start exploring properties"));
}

#[test]
fn test_cli_inquire_records_request() {
    let dir = DataDirBuilder::new().build();

    cli(dir.path())
        .args([
            "inquire",
            "prop-5",
            "--name",
            "Sam Lee",
            "--email",
            "sam@example.com",
            "--phone",
            "555-123-4567",
            "--date",
            "today",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded inquiry"))
        .stdout(predicate::str::contains("Viewing request sent!"));

    let inquiries = read_document(dir.path(), "propertyInquiries");
    assert_eq!(inquiries[0]["propertyId"], "prop-5");
    assert_eq!(inquiries[0]["propertyTitle"], "Mountain View Retreat");
    assert_eq!(inquiries[0]["status"], "pending");

    cli(dir.path())
        .arg("inquiries")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mountain View Retreat"))
        .stdout(predicate::str::contains("Sam Lee <sam@example.com>"));
}

#[test]
fn test_cli_inquire_invalid_form() {
    let dir = DataDirBuilder::new().build();

    cli(dir.path())
        .args(["inquire", "prop-5", "--name", "S", "--email", "nope", "--phone", "12"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Name must be at least 2 characters"))
        .stdout(predicate::str::contains("Please enter a valid email address"))
        .stderr(predicate::str::contains("Inquiry was not recorded"));

    assert_eq!(read_document(dir.path(), "propertyInquiries"), serde_json::Value::Null);
}

#[test]
fn test_cli_listings_empty() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path())
        .arg("listings")
        .assert()
        .success()
        .stdout(predicate::str::contains("No listings yet"));
}

#[test]
fn test_cli_listings_seeded() {
    let listing = r#"[{"id":"l-1","userId":"current-user","title":"Garden Flat","price":350000,
"beds":1,"baths":1,"address":"1 Main St","city":"Boise","state":"ID","zipCode":"83702",
"location":"Boise, ID","status":"active","createdAt":"2025-02-01T00:00:00Z"}]"#;
    let dir = DataDirBuilder::new().with_document("userProperties", listing).build();

    cli(dir.path())
        .arg("listings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Garden Flat"))
        .stdout(predicate::str::contains("[active]"));
}

#[test]
fn test_cli_stats() {
    let dir = DataDirBuilder::new().build();
    cli(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Property Explorer Statistics"))
        .stdout(predicate::str::contains("Catalog properties: 8"))
        .stdout(predicate::str::contains("Inquiries: 0"));
}

#[test]
fn test_cli_malformed_config_fails() {
    let dir = DataDirBuilder::new().build();
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    cli(dir.path())
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_cli_data_dir_from_env() {
    let dir = DataDirBuilder::new().build();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_property-explorer"));
    cmd.env("PROPERTY_EXPLORER_HOME", dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().display().to_string()));
}
