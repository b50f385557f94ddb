//! Serverless function pricing: Edge Functions, Cloud Functions, Lambda.

use crate::models::{FunctionsUsage, ServiceCosts};
use crate::money::Money;

pub const INCLUDED_INVOCATIONS: f64 = 500_000.0;
pub const INVOCATION_BLOCK: f64 = 100_000.0;
pub const INVOCATION_BLOCK_PRICE: f64 = 0.125;
pub const INCLUDED_GB_SECONDS: f64 = 100_000.0;
pub const PER_GB_SECOND: f64 = 0.0000025;

pub fn supabase(usage: &FunctionsUsage) -> Money {
    let extra_invocations = (usage.invocations_per_month - INCLUDED_INVOCATIONS).max(0.0)
        / INVOCATION_BLOCK
        * INVOCATION_BLOCK_PRICE;
    let extra_compute = (usage.gb_seconds() - INCLUDED_GB_SECONDS).max(0.0) * PER_GB_SECOND;
    Money::from_amount(extra_invocations + extra_compute)
}

pub fn firebase(usage: &FunctionsUsage) -> Money {
    let invocations = (usage.invocations_per_month / 1_000_000.0) * 0.40;
    let compute = usage.gb_seconds() * 0.0000025;
    Money::from_amount(invocations + compute)
}

pub fn aws(usage: &FunctionsUsage) -> Money {
    let requests = (usage.invocations_per_month / 1_000_000.0) * 0.20;
    let compute = usage.gb_seconds() * 0.00001667;
    Money::from_amount(requests + compute)
}

pub fn costs(usage: &FunctionsUsage) -> ServiceCosts {
    ServiceCosts {
        supabase: supabase(usage),
        firebase: firebase(usage),
        aws: aws(usage),
    }
}
