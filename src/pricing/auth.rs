//! Auth pricing. Supabase includes auth in the base plan; Firebase Auth and
//! Cognito share the same per-MAU rate above 50k.

use crate::models::{AuthUsage, ServiceCosts};
use crate::money::Money;

pub const FREE_MAUS: f64 = 50_000.0;
pub const PER_MAU: f64 = 0.0055;

pub fn supabase(_usage: &AuthUsage) -> Money {
    Money::ZERO
}

pub fn firebase(usage: &AuthUsage) -> Money {
    Money::from_amount((usage.monthly_active_users - FREE_MAUS).max(0.0) * PER_MAU)
}

pub fn aws(usage: &AuthUsage) -> Money {
    Money::from_amount((usage.monthly_active_users - FREE_MAUS).max(0.0) * PER_MAU)
}

pub fn costs(usage: &AuthUsage) -> ServiceCosts {
    ServiceCosts {
        supabase: supabase(usage),
        firebase: firebase(usage),
        aws: aws(usage),
    }
}
