//! Pricing engine tests: per-provider formulas, tier thresholds and totals.

use stackcost_sdk::models::{
    AuthUsage, Category, DatabaseUsage, FunctionsUsage, Provider, RealtimeUsage,
    StorageUsage, UsageProfileSet,
};
use stackcost_sdk::pricing::{auth, database, functions, realtime, storage};
use stackcost_sdk::{compute_costs, compute_total, Money};

fn cents(n: i64) -> Money {
    Money::from_cents(n)
}

// ---------------------------------------------------------------------------
// Database
// ---------------------------------------------------------------------------

#[test]
fn database_below_thresholds_is_base_fee() {
    let usage = DatabaseUsage {
        storage_gb: 1.0,
        monthly_active_rows: 10_000.0,
        reads_per_month: 100_000.0,
        writes_per_month: 50_000.0,
    };
    assert_eq!(database::supabase(&usage), cents(2500));
}

#[test]
fn database_overage_on_storage_reads_and_writes() {
    let usage = DatabaseUsage {
        storage_gb: 108.0,
        monthly_active_rows: 0.0,
        reads_per_month: 5_100_000.0,
        writes_per_month: 2_100_000.0,
    };
    // 25 + 100 * 0.125 + 1 * 10 + 1 * 10
    assert_eq!(database::supabase(&usage), cents(5750));
}

#[test]
fn database_storage_exactly_at_included_tier_has_no_overage() {
    let usage = DatabaseUsage {
        storage_gb: database::INCLUDED_STORAGE_GB,
        reads_per_month: database::INCLUDED_READS,
        writes_per_month: database::INCLUDED_WRITES,
        ..Default::default()
    };
    assert_eq!(database::supabase(&usage), cents(2500));
}

#[test]
fn database_competitors() {
    let usage = DatabaseUsage {
        storage_gb: 1.0,
        monthly_active_rows: 10_000.0,
        reads_per_month: 100_000.0,
        writes_per_month: 50_000.0,
    };
    let costs = database::costs(&usage);
    assert_eq!(costs.firebase, cents(15));
    assert_eq!(costs.aws, cents(1262));
    assert_eq!(costs.neon, cents(2000));
    assert_eq!(costs.planetscale, cents(2900));
}

#[test]
fn neon_and_planetscale_overage() {
    let usage = DatabaseUsage {
        storage_gb: 20.0,
        monthly_active_rows: 6_000_000.0,
        ..Default::default()
    };
    // 20 + 10 * 0.096
    assert_eq!(database::neon(&usage), cents(2096));
    // 29 + 1,000,000 * 0.0001
    assert_eq!(database::planetscale(&usage), cents(12900));
}

#[test]
fn zero_database_usage_still_pays_fixed_fees() {
    let costs = database::costs(&DatabaseUsage::default());
    assert_eq!(costs.supabase, cents(2500));
    assert_eq!(costs.firebase, Money::ZERO);
    assert_eq!(costs.aws, cents(1250));
    assert_eq!(costs.neon, cents(2000));
    assert_eq!(costs.planetscale, cents(2900));
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[test]
fn supabase_auth_is_always_free() {
    let usage = AuthUsage {
        monthly_active_users: 10_000_000.0,
        ..Default::default()
    };
    assert_eq!(auth::supabase(&usage), Money::ZERO);
}

#[test]
fn competitor_auth_charges_above_free_tier() {
    let usage = AuthUsage {
        monthly_active_users: 75_000.0,
        ..Default::default()
    };
    let costs = auth::costs(&usage);
    assert_eq!(costs.firebase, cents(13750));
    assert_eq!(costs.aws, costs.firebase);
}

#[test]
fn competitor_auth_free_at_threshold() {
    let usage = AuthUsage {
        monthly_active_users: auth::FREE_MAUS,
        ..Default::default()
    };
    assert_eq!(auth::firebase(&usage), Money::ZERO);
    assert_eq!(auth::aws(&usage), Money::ZERO);
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

#[test]
fn storage_costs() {
    let usage = StorageUsage {
        storage_gb: 10.0,
        downloads_gb: 50.0,
        uploads_gb: 20.0,
    };
    let costs = storage::costs(&usage);
    assert_eq!(costs.supabase, cents(461));
    assert_eq!(costs.firebase, cents(626));
    // Egress under 100 GB is free on S3.
    assert_eq!(costs.aws, cents(23));
}

#[test]
fn uploads_do_not_affect_storage_cost() {
    let base = StorageUsage {
        storage_gb: 10.0,
        downloads_gb: 50.0,
        uploads_gb: 0.0,
    };
    let heavy = StorageUsage {
        uploads_gb: 10_000.0,
        ..base
    };
    assert_eq!(storage::costs(&base), storage::costs(&heavy));
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

#[test]
fn functions_overage_rounds_half_up() {
    let usage = FunctionsUsage {
        invocations_per_month: 1_000_000.0,
        average_duration_ms: 200.0,
        memory_gb: 1.0,
    };
    assert_eq!(usage.gb_seconds(), 200_000.0);
    // 0.625 + 0.25 = 0.875
    assert_eq!(functions::supabase(&usage), cents(88));
}

#[test]
fn functions_competitors() {
    let usage = FunctionsUsage {
        invocations_per_month: 100_000.0,
        average_duration_ms: 100.0,
        memory_gb: 0.5,
    };
    let costs = functions::costs(&usage);
    assert_eq!(costs.supabase, Money::ZERO);
    assert_eq!(costs.firebase, cents(5));
    assert_eq!(costs.aws, cents(10));
}

// ---------------------------------------------------------------------------
// Realtime
// ---------------------------------------------------------------------------

#[test]
fn realtime_below_free_tiers_is_zero() {
    let usage = RealtimeUsage {
        concurrent_connections: 100.0,
        messages_per_month: 1_000_000.0,
    };
    assert_eq!(realtime::supabase(&usage), Money::ZERO);
}

#[test]
fn realtime_overage() {
    let usage = RealtimeUsage {
        concurrent_connections: 1_500.0,
        messages_per_month: 20_000_000.0,
    };
    // 1000 / 1000 * 10 + 15 * 2.5
    assert_eq!(realtime::supabase(&usage), cents(4750));
}

#[test]
fn realtime_competitors() {
    let usage = RealtimeUsage {
        concurrent_connections: 100.0,
        messages_per_month: 1_000_000.0,
    };
    let costs = realtime::costs(&usage);
    assert_eq!(costs.firebase, cents(120));
    assert_eq!(costs.aws, cents(420));
}

// ---------------------------------------------------------------------------
// Monotonicity
// ---------------------------------------------------------------------------

#[test]
fn costs_never_decrease_as_usage_grows() {
    let mut previous = compute_costs(&UsageProfileSet::default());
    for step in 1..=20 {
        let scale = step as f64;
        let mut profiles = UsageProfileSet::default();
        profiles.database.storage_gb = 10.0 * scale;
        profiles.database.reads_per_month = 1_000_000.0 * scale;
        profiles.database.writes_per_month = 500_000.0 * scale;
        profiles.database.monthly_active_rows = 1_000_000.0 * scale;
        profiles.auth.monthly_active_users = 10_000.0 * scale;
        profiles.storage.storage_gb = 5.0 * scale;
        profiles.storage.downloads_gb = 20.0 * scale;
        profiles.functions.invocations_per_month = 200_000.0 * scale;
        profiles.functions.average_duration_ms = 100.0;
        profiles.functions.memory_gb = 1.0;
        profiles.realtime.concurrent_connections = 200.0 * scale;
        profiles.realtime.messages_per_month = 1_000_000.0 * scale;

        let current = compute_costs(&profiles);
        for category in Category::ALL {
            for provider in category.providers() {
                let before = previous.cost(category, *provider).unwrap();
                let after = current.cost(category, *provider).unwrap();
                assert!(
                    after >= before,
                    "{} {} dropped from {} to {}",
                    category,
                    provider,
                    before,
                    after
                );
            }
        }
        previous = current;
    }
}

// ---------------------------------------------------------------------------
// Breakdown set and totals
// ---------------------------------------------------------------------------

#[test]
fn database_prices_five_providers_others_three() {
    let costs = compute_costs(&UsageProfileSet::seed());
    assert_eq!(costs.breakdown(Category::Database).entries().len(), 5);
    for category in [
        Category::Auth,
        Category::Storage,
        Category::Functions,
        Category::Realtime,
    ] {
        assert_eq!(costs.breakdown(category).entries().len(), 3);
        assert_eq!(costs.cost(category, Provider::Neon), None);
        assert_eq!(costs.cost(category, Provider::Planetscale), None);
    }
}

#[test]
fn seed_total_is_sum_of_primary_costs() {
    let profiles = UsageProfileSet::seed();
    let costs = compute_costs(&profiles);

    let by_hand = database::supabase(&profiles.database)
        + auth::supabase(&profiles.auth)
        + storage::supabase(&profiles.storage)
        + functions::supabase(&profiles.functions)
        + realtime::supabase(&profiles.realtime);

    assert_eq!(compute_total(&costs), by_hand);
    assert_eq!(compute_total(&costs), cents(2961));
}

#[test]
fn total_ignores_competitor_costs() {
    let mut profiles = UsageProfileSet::seed();
    profiles.auth.monthly_active_users = 1_000_000.0;
    let costs = compute_costs(&profiles);
    assert!(costs.cost(Category::Auth, Provider::Firebase).unwrap() > Money::ZERO);
    assert_eq!(compute_total(&costs), cents(2961));
}

#[test]
fn cheapest_provider() {
    let costs = compute_costs(&UsageProfileSet::seed());
    assert_eq!(
        costs.cheapest(Category::Database),
        (Provider::Firebase, cents(15))
    );
}

// ---------------------------------------------------------------------------
// Extreme usage
// ---------------------------------------------------------------------------

#[test]
fn huge_usage_saturates_instead_of_overflowing() {
    let mut profiles = UsageProfileSet::seed();
    profiles.database.storage_gb = 1e20;
    profiles.storage.downloads_gb = 1e20;
    let costs = compute_costs(&profiles);

    assert_eq!(costs.primary(Category::Database), Money::MAX);
    assert_eq!(costs.primary(Category::Storage), Money::MAX);
    assert_eq!(compute_total(&costs), Money::MAX);

    for category in Category::ALL {
        for provider in category.providers() {
            assert!(costs.cost(category, *provider).unwrap() >= Money::ZERO);
        }
    }
}
