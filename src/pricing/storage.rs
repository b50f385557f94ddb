//! Object storage pricing.

use crate::models::{ServiceCosts, StorageUsage};
use crate::money::Money;

pub const INCLUDED_STORAGE_GB: f64 = 5.0;
pub const STORAGE_PER_GB: f64 = 0.021;
pub const EGRESS_PER_GB: f64 = 0.09;

pub fn supabase(usage: &StorageUsage) -> Money {
    let mut cost = 0.0;
    if usage.storage_gb > INCLUDED_STORAGE_GB {
        cost += (usage.storage_gb - INCLUDED_STORAGE_GB) * STORAGE_PER_GB;
    }
    cost += usage.downloads_gb * EGRESS_PER_GB;
    Money::from_amount(cost)
}

pub fn firebase(usage: &StorageUsage) -> Money {
    let storage = usage.storage_gb * 0.026;
    let downloads = usage.downloads_gb * 0.12;
    Money::from_amount(storage + downloads)
}

/// S3 standard; the first 100 GB of egress is free.
pub fn aws(usage: &StorageUsage) -> Money {
    let storage = usage.storage_gb * 0.023;
    let egress = (usage.downloads_gb - 100.0).max(0.0) * 0.09;
    Money::from_amount(storage + egress)
}

pub fn costs(usage: &StorageUsage) -> ServiceCosts {
    ServiceCosts {
        supabase: supabase(usage),
        firebase: firebase(usage),
        aws: aws(usage),
    }
}
