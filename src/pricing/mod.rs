//! The pricing engine.
//!
//! Every function here is pure: usage in, rounded [`Money`] out. Each
//! category module prices one [`Category`](crate::models::Category) for
//! each of its providers; [`compute_costs`] runs all of them and
//! [`compute_total`] aggregates the primary provider.
//!
//! Tier boundaries and rates are the providers' published list prices and
//! are kept as literals.

pub mod auth;
pub mod database;
pub mod functions;
pub mod realtime;
pub mod storage;

use crate::models::{Category, CostBreakdownSet, UsageProfileSet};
use crate::money::Money;

/// Price every provider for every category.
pub fn compute_costs(profiles: &UsageProfileSet) -> CostBreakdownSet {
    CostBreakdownSet {
        database: database::costs(&profiles.database),
        auth: auth::costs(&profiles.auth),
        storage: storage::costs(&profiles.storage),
        functions: functions::costs(&profiles.functions),
        realtime: realtime::costs(&profiles.realtime),
    }
}

/// Sum of the primary provider's cost across all five categories.
pub fn compute_total(breakdowns: &CostBreakdownSet) -> Money {
    Category::ALL.iter().map(|c| breakdowns.primary(*c)).sum()
}
