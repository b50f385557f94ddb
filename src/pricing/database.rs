//! Database pricing: Supabase Pro, Firestore, RDS, Neon and PlanetScale.

use crate::models::{DatabaseCosts, DatabaseUsage};
use crate::money::Money;

/// Supabase Pro plan base fee.
pub const BASE_FEE: f64 = 25.0;
pub const INCLUDED_STORAGE_GB: f64 = 8.0;
pub const STORAGE_PER_GB: f64 = 0.125;
pub const INCLUDED_READS: f64 = 5_000_000.0;
pub const INCLUDED_WRITES: f64 = 2_000_000.0;
/// Reads and writes above the included tier are billed per block.
pub const OPERATION_BLOCK: f64 = 100_000.0;
pub const OPERATION_BLOCK_PRICE: f64 = 10.0;

pub fn supabase(usage: &DatabaseUsage) -> Money {
    let mut cost = BASE_FEE;
    if usage.storage_gb > INCLUDED_STORAGE_GB {
        cost += (usage.storage_gb - INCLUDED_STORAGE_GB) * STORAGE_PER_GB;
    }
    let extra_reads =
        (usage.reads_per_month - INCLUDED_READS).max(0.0) / OPERATION_BLOCK * OPERATION_BLOCK_PRICE;
    let extra_writes =
        (usage.writes_per_month - INCLUDED_WRITES).max(0.0) / OPERATION_BLOCK * OPERATION_BLOCK_PRICE;
    Money::from_amount(cost + extra_reads + extra_writes)
}

/// Firestore document reads and writes.
pub fn firebase(usage: &DatabaseUsage) -> Money {
    let reads = (usage.reads_per_month / 100_000.0) * 0.06;
    let writes = (usage.writes_per_month / 100_000.0) * 0.18;
    Money::from_amount(reads + writes)
}

/// RDS t4g.micro instance plus gp storage.
pub fn aws(usage: &DatabaseUsage) -> Money {
    let instance = 12.5;
    let storage = usage.storage_gb * 0.115;
    Money::from_amount(instance + storage)
}

/// Neon Pro, 10 GB included.
pub fn neon(usage: &DatabaseUsage) -> Money {
    let mut cost = 20.0;
    if usage.storage_gb > 10.0 {
        cost += (usage.storage_gb - 10.0) * 0.096;
    }
    Money::from_amount(cost)
}

/// PlanetScale Scaler, 5M rows included.
pub fn planetscale(usage: &DatabaseUsage) -> Money {
    let extra_rows = (usage.monthly_active_rows - 5_000_000.0).max(0.0) * 0.0001;
    Money::from_amount(29.0 + extra_rows)
}

pub fn costs(usage: &DatabaseUsage) -> DatabaseCosts {
    DatabaseCosts {
        supabase: supabase(usage),
        firebase: firebase(usage),
        aws: aws(usage),
        neon: neon(usage),
        planetscale: planetscale(usage),
    }
}
