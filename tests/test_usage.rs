//! Usage profiles: wire names, field access and input coercion.

use stackcost_sdk::models::{parse_input, Category, DatabaseUsage, UsageProfileSet};
use stackcost_sdk::StackcostError;

// ---------------------------------------------------------------------------
// parse_input
// ---------------------------------------------------------------------------

#[test]
fn parse_plain_numbers() {
    assert_eq!(parse_input("42"), 42.0);
    assert_eq!(parse_input("12.5"), 12.5);
    assert_eq!(parse_input(".5"), 0.5);
    assert_eq!(parse_input("  7"), 7.0);
    assert_eq!(parse_input("1e6"), 1_000_000.0);
}

#[test]
fn parse_reads_leading_number_only() {
    assert_eq!(parse_input("12.5GB"), 12.5);
    assert_eq!(parse_input("100 users"), 100.0);
    assert_eq!(parse_input("3e"), 3.0);
}

#[test]
fn parse_invalid_input_is_zero() {
    assert_eq!(parse_input(""), 0.0);
    assert_eq!(parse_input("abc"), 0.0);
    assert_eq!(parse_input("."), 0.0);
    assert_eq!(parse_input("-"), 0.0);
}

#[test]
fn parse_negative_or_overflowing_input_is_zero() {
    assert_eq!(parse_input("-5"), 0.0);
    assert_eq!(parse_input("1e999"), 0.0);
}

// ---------------------------------------------------------------------------
// UsageProfileSet
// ---------------------------------------------------------------------------

#[test]
fn seed_values() {
    let seed = UsageProfileSet::seed();
    assert_eq!(seed.database.storage_gb, 1.0);
    assert_eq!(seed.database.reads_per_month, 100_000.0);
    assert_eq!(seed.auth.monthly_active_users, 10_000.0);
    assert_eq!(seed.storage.downloads_gb, 50.0);
    assert_eq!(seed.functions.memory_gb, 0.5);
    assert_eq!(seed.realtime.messages_per_month, 1_000_000.0);
}

#[test]
fn default_is_all_zero() {
    let profiles = UsageProfileSet::default();
    for category in Category::ALL {
        for field in UsageProfileSet::fields(category) {
            assert_eq!(profiles.field(category, field), Some(0.0));
        }
    }
}

#[test]
fn set_field_by_wire_name() {
    let mut profiles = UsageProfileSet::seed();
    profiles
        .set_field(Category::Database, "storageGB", 108.0)
        .unwrap();
    assert_eq!(profiles.database.storage_gb, 108.0);
    assert_eq!(profiles.field(Category::Database, "storageGB"), Some(108.0));
}

#[test]
fn set_field_sanitizes_negative_and_non_finite() {
    let mut profiles = UsageProfileSet::seed();
    profiles
        .set_field(Category::Storage, "downloadsGB", -10.0)
        .unwrap();
    assert_eq!(profiles.storage.downloads_gb, 0.0);
    profiles
        .set_field(Category::Realtime, "messagesPerMonth", f64::NAN)
        .unwrap();
    assert_eq!(profiles.realtime.messages_per_month, 0.0);
}

#[test]
fn set_field_rejects_unknown_names() {
    let mut profiles = UsageProfileSet::seed();
    let err = profiles
        .set_field(Category::Auth, "storageGB", 1.0)
        .unwrap_err();
    assert!(matches!(err, StackcostError::InvalidArgument(_)));
    assert_eq!(profiles, UsageProfileSet::seed());
}

#[test]
fn fields_per_category() {
    assert_eq!(
        UsageProfileSet::fields(Category::Database),
        &["storageGB", "monthlyActiveRows", "readsPerMonth", "writesPerMonth"]
    );
    assert_eq!(UsageProfileSet::fields(Category::Realtime).len(), 2);
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[test]
fn database_usage_uses_wire_names() {
    let usage = DatabaseUsage {
        storage_gb: 2.0,
        monthly_active_rows: 3.0,
        reads_per_month: 4.0,
        writes_per_month: 5.0,
    };
    let json = serde_json::to_value(usage).unwrap();
    assert_eq!(json["storageGB"], 2.0);
    assert_eq!(json["monthlyActiveRows"], 3.0);
    assert_eq!(json["readsPerMonth"], 4.0);
    assert_eq!(json["writesPerMonth"], 5.0);
}

#[test]
fn missing_fields_default_to_zero() {
    let usage: DatabaseUsage = serde_json::from_str(r#"{"storageGB": 9}"#).unwrap();
    assert_eq!(usage.storage_gb, 9.0);
    assert_eq!(usage.reads_per_month, 0.0);
}

#[test]
fn profile_set_round_trips_through_json() {
    let seed = UsageProfileSet::seed();
    let json = serde_json::to_string(&seed).unwrap();
    assert!(json.contains("\"memoryGB\":0.5"));
    let back: UsageProfileSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seed);
}
