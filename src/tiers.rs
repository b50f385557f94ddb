//! Published free-tier and overage descriptors for the primary provider.
//!
//! Service ids follow the hosted pricing endpoint's convention,
//! `<provider>-<category>` (e.g. `supabase-realtime`). The numbers come from
//! the same constants the pricing formulas use.

use serde::{Deserialize, Serialize};

use crate::models::Category;
use crate::pricing::{auth, database, functions, realtime, storage};

/// One metered dimension: `included` units are free, then `overage` is
/// charged per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub included: f64,
    pub overage: f64,
}

impl Tier {
    fn new(name: &str, included: f64, overage: f64) -> Self {
        Self {
            name: name.to_string(),
            included,
            overage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTiers {
    pub service: String,
    pub category: Category,
    /// Flat monthly fee, if the plan has one.
    pub base_fee: Option<f64>,
    pub tiers: Vec<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,
}

/// Ids accepted by [`pricing_info`].
pub fn services() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|c| format!("supabase-{}", c))
        .collect()
}

/// Tier descriptor for a service id, or `None` if it is not published.
///
/// `supabase-auth` has no tiers: auth is included in the base plan.
pub fn pricing_info(service: &str) -> Option<ServiceTiers> {
    let category = match service.strip_prefix("supabase-")? {
        "database" => Category::Database,
        "auth" => Category::Auth,
        "storage" => Category::Storage,
        "functions" => Category::Functions,
        "realtime" => Category::Realtime,
        _ => return None,
    };

    let (base_fee, tiers, max_size) = match category {
        Category::Database => (
            Some(database::BASE_FEE),
            vec![
                Tier::new("storageGB", database::INCLUDED_STORAGE_GB, database::STORAGE_PER_GB),
                Tier::new(
                    "reads",
                    database::INCLUDED_READS,
                    database::OPERATION_BLOCK_PRICE / database::OPERATION_BLOCK,
                ),
                Tier::new(
                    "writes",
                    database::INCLUDED_WRITES,
                    database::OPERATION_BLOCK_PRICE / database::OPERATION_BLOCK,
                ),
            ],
            None,
        ),
        // Included in the base plan; nothing is metered.
        Category::Auth => (None, Vec::new(), None),
        Category::Storage => (
            None,
            vec![
                Tier::new("storageGB", storage::INCLUDED_STORAGE_GB, storage::STORAGE_PER_GB),
                Tier::new("downloadsGB", 0.0, storage::EGRESS_PER_GB),
            ],
            None,
        ),
        Category::Functions => (
            None,
            vec![
                Tier::new(
                    "invocations",
                    functions::INCLUDED_INVOCATIONS,
                    functions::INVOCATION_BLOCK_PRICE / functions::INVOCATION_BLOCK,
                ),
                Tier::new("gbSeconds", functions::INCLUDED_GB_SECONDS, functions::PER_GB_SECOND),
            ],
            None,
        ),
        Category::Realtime => (
            None,
            vec![
                Tier::new(
                    "concurrent",
                    realtime::INCLUDED_CONNECTIONS,
                    realtime::CONNECTION_BLOCK_PRICE / realtime::CONNECTION_BLOCK,
                ),
                Tier::new(
                    "messages",
                    realtime::INCLUDED_MESSAGES,
                    realtime::MESSAGE_BLOCK_PRICE / realtime::MESSAGE_BLOCK,
                ),
            ],
            Some(realtime::MAX_MESSAGE_SIZE.to_string()),
        ),
    };

    Some(ServiceTiers {
        service: service.to_string(),
        category,
        base_fee,
        tiers,
        max_size,
    })
}

/// Competitor per-MAU auth rate above the free tier, for comparison tables.
pub fn competitor_auth_rate() -> Tier {
    Tier::new("monthlyActiveUsers", auth::FREE_MAUS, auth::PER_MAU)
}
