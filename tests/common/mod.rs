//! Shared test fixtures for the stackcost SDK integration tests.
//!
//! Provides in-memory stores seeded with a few saved estimates, plus a
//! tracing subscriber so store and export logs show up under `--nocapture`.

#![allow(dead_code)]

use stackcost_sdk::models::{Category, NewEstimate, UsageProfileSet};
use stackcost_sdk::{Calculator, Connection, DuckDbStore, EstimateStore};

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stackcost_sdk=debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A draft priced from the seed profile with one field overridden.
pub fn draft(name: &str, category: Category, field: &str, value: f64) -> NewEstimate {
    let mut calc = Calculator::new();
    calc.set_name(name);
    calc.set_field(category, field, value).unwrap();
    calc.draft()
}

/// A draft priced from the seed profile.
pub fn seed_draft(name: &str) -> NewEstimate {
    let mut calc = Calculator::with_profiles(UsageProfileSet::seed());
    calc.set_name(name);
    calc.draft()
}

/// An in-memory store holding three estimates for `user-1` and one for `user-2`.
///
/// Totals: "Starter" 29.61, "Growth" 62.11, "Scale" 67.11, "Other user" 29.61.
pub fn setup_sample_store() -> DuckDbStore {
    init_tracing();
    let store = DuckDbStore::in_memory().unwrap();
    populate(&store);
    store
}

/// Same data as [`setup_sample_store`], in a database file under a temp dir.
///
/// The caller must keep the `TempDir` alive for the duration of the test.
pub fn setup_file_store() -> (DuckDbStore, tempfile::TempDir) {
    init_tracing();
    let tmp_dir = tempfile::tempdir().unwrap();
    let conn = Connection::open(tmp_dir.path().join("estimates.duckdb")).unwrap();
    let store = DuckDbStore::new(conn);
    populate(&store);
    (store, tmp_dir)
}

fn populate(store: &DuckDbStore) {
    store.insert("user-1", seed_draft("Starter")).unwrap();

    let mut calc = Calculator::new();
    calc.set_name("Growth");
    calc.set_field(Category::Database, "storageGB", 108.0).unwrap();
    calc.set_field(Category::Database, "readsPerMonth", 5_100_000.0)
        .unwrap();
    calc.set_field(Category::Database, "writesPerMonth", 2_100_000.0)
        .unwrap();
    store.insert("user-1", calc.draft()).unwrap();

    store
        .insert(
            "user-1",
            draft("Scale", Category::Realtime, "messagesPerMonth", 20_000_000.0),
        )
        .unwrap();
    store.insert("user-2", seed_draft("Other user")).unwrap();
}
