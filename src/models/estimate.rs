use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::costs::{Category, CostBreakdownSet, DatabaseCosts, ProviderCosts, ServiceCosts};
use super::usage::{AuthUsage, DatabaseUsage, FunctionsUsage, RealtimeUsage, StorageUsage, UsageProfileSet};
use crate::money::Money;

// ---------------------------------------------------------------------------
// ServiceEntry — one category's inputs and costs inside a saved estimate
// ---------------------------------------------------------------------------

/// Serialized as `{"type": "database", "data": {...}, "costs": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServiceEntry {
    Database {
        data: DatabaseUsage,
        costs: DatabaseCosts,
    },
    Auth {
        data: AuthUsage,
        costs: ServiceCosts,
    },
    Storage {
        data: StorageUsage,
        costs: ServiceCosts,
    },
    Functions {
        data: FunctionsUsage,
        costs: ServiceCosts,
    },
    Realtime {
        data: RealtimeUsage,
        costs: ServiceCosts,
    },
}

impl ServiceEntry {
    pub fn category(&self) -> Category {
        match self {
            ServiceEntry::Database { .. } => Category::Database,
            ServiceEntry::Auth { .. } => Category::Auth,
            ServiceEntry::Storage { .. } => Category::Storage,
            ServiceEntry::Functions { .. } => Category::Functions,
            ServiceEntry::Realtime { .. } => Category::Realtime,
        }
    }

    pub fn costs(&self) -> &dyn ProviderCosts {
        match self {
            ServiceEntry::Database { costs, .. } => costs,
            ServiceEntry::Auth { costs, .. } => costs,
            ServiceEntry::Storage { costs, .. } => costs,
            ServiceEntry::Functions { costs, .. } => costs,
            ServiceEntry::Realtime { costs, .. } => costs,
        }
    }
}

/// Pair each category's profile with its computed costs, in category order.
pub fn services_from(profiles: &UsageProfileSet, costs: &CostBreakdownSet) -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::Database {
            data: profiles.database,
            costs: costs.database,
        },
        ServiceEntry::Auth {
            data: profiles.auth,
            costs: costs.auth,
        },
        ServiceEntry::Storage {
            data: profiles.storage,
            costs: costs.storage,
        },
        ServiceEntry::Functions {
            data: profiles.functions,
            costs: costs.functions,
        },
        ServiceEntry::Realtime {
            data: profiles.realtime,
            costs: costs.realtime,
        },
    ]
}

fn primary_total(services: &[ServiceEntry]) -> Money {
    services.iter().map(|s| s.costs().primary()).sum()
}

// ---------------------------------------------------------------------------
// NewEstimate — unsaved draft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEstimate {
    pub name: String,
    pub services: Vec<ServiceEntry>,
}

impl NewEstimate {
    pub fn new(name: impl Into<String>, services: Vec<ServiceEntry>) -> Self {
        Self {
            name: name.into(),
            services,
        }
    }

    /// Sum of the primary-provider cost across all services.
    pub fn total_cost(&self) -> Money {
        primary_total(&self.services)
    }
}

// ---------------------------------------------------------------------------
// Estimate — saved, owned by one user
// ---------------------------------------------------------------------------

/// A saved estimate.
///
/// `total_cost` is always derived from `services`: it is computed when the
/// estimate is built and recomputed whenever one is decoded, so a stored
/// total that disagrees with its breakdowns never surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EstimateRecord")]
pub struct Estimate {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub services: Vec<ServiceEntry>,
    total_cost: Money,
    pub created_at: DateTime<Utc>,
}

impl Estimate {
    pub fn from_draft(
        id: Uuid,
        user_id: impl Into<String>,
        created_at: DateTime<Utc>,
        draft: NewEstimate,
    ) -> Self {
        let total_cost = draft.total_cost();
        Self {
            id,
            user_id: user_id.into(),
            name: draft.name,
            services: draft.services,
            total_cost,
            created_at,
        }
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }

    pub fn service(&self, category: Category) -> Option<&ServiceEntry> {
        self.services.iter().find(|s| s.category() == category)
    }

    /// Overlay the saved profiles onto `base`; categories missing from the
    /// estimate keep their `base` values.
    pub fn apply_profiles(&self, base: &mut UsageProfileSet) {
        for service in &self.services {
            match service {
                ServiceEntry::Database { data, .. } => base.database = *data,
                ServiceEntry::Auth { data, .. } => base.auth = *data,
                ServiceEntry::Storage { data, .. } => base.storage = *data,
                ServiceEntry::Functions { data, .. } => base.functions = *data,
                ServiceEntry::Realtime { data, .. } => base.realtime = *data,
            }
        }
    }

    /// Saved costs; categories missing from the estimate are zero.
    pub fn costs(&self) -> CostBreakdownSet {
        let mut set = CostBreakdownSet::default();
        for service in &self.services {
            match service {
                ServiceEntry::Database { costs, .. } => set.database = *costs,
                ServiceEntry::Auth { costs, .. } => set.auth = *costs,
                ServiceEntry::Storage { costs, .. } => set.storage = *costs,
                ServiceEntry::Functions { costs, .. } => set.functions = *costs,
                ServiceEntry::Realtime { costs, .. } => set.realtime = *costs,
            }
        }
        set
    }
}

/// Wire form of [`Estimate`]; the total is advisory.
#[derive(Debug, Clone, Deserialize)]
struct EstimateRecord {
    id: Uuid,
    user_id: String,
    name: String,
    #[serde(default)]
    services: Vec<ServiceEntry>,
    #[serde(default)]
    total_cost: Option<Money>,
    created_at: DateTime<Utc>,
}

impl From<EstimateRecord> for Estimate {
    fn from(record: EstimateRecord) -> Self {
        let total_cost = primary_total(&record.services);
        if let Some(stored) = record.total_cost {
            if stored != total_cost {
                tracing::warn!(
                    estimate_id = %record.id,
                    stored = %stored,
                    recomputed = %total_cost,
                    "stored estimate total disagrees with its breakdowns; using recomputed total"
                );
            }
        }
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            services: record.services,
            total_cost,
            created_at: record.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// EstimateSummary — aggregate over a user's saved estimates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub count: usize,
    pub total_spend: Money,
    pub min_total: Money,
    pub max_total: Money,
    pub avg_total: Money,
}
