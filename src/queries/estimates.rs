//! Saved-estimate queries over an [`EstimateStore`].

use uuid::Uuid;

use crate::calculator::Calculator;
use crate::error::{Result, StackcostError};
use crate::models::{Estimate, EstimateSummary, NewEstimate};
use crate::money::Money;
use crate::store::EstimateStore;

// ---------------------------------------------------------------------------
// SearchEstimatesParams
// ---------------------------------------------------------------------------

/// Parameters for the estimate search method.
#[derive(Debug, Clone, Default)]
pub struct SearchEstimatesParams {
    /// Case-insensitive substring of the estimate name.
    pub name: Option<String>,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl SearchEstimatesParams {
    /// Whether `estimate` passes the name and total filters.
    pub fn matches(&self, estimate: &Estimate) -> bool {
        if let Some(ref name) = self.name {
            if !estimate
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        let total = estimate.total_cost().amount();
        if self.min_total.is_some_and(|min| total < min) {
            return false;
        }
        if self.max_total.is_some_and(|max| total > max) {
            return false;
        }
        true
    }
}

// ---------------------------------------------------------------------------
// EstimateQuery
// ---------------------------------------------------------------------------

/// Query interface for a user's saved estimates.
pub struct EstimateQuery<'a> {
    store: &'a dyn EstimateStore,
}

impl<'a> EstimateQuery<'a> {
    /// Create a new `EstimateQuery` bound to the given store.
    pub fn new(store: &'a dyn EstimateStore) -> Self {
        Self { store }
    }

    /// Save the calculator's current state.
    ///
    /// A calculator editing a loaded estimate replaces it in place; otherwise
    /// a new estimate is created.
    pub fn save(&self, user_id: &str, calculator: &Calculator) -> Result<Estimate> {
        let draft = calculator.draft();
        match calculator.editing() {
            Some(id) => self.store.replace(id, draft),
            None => self.store.insert(user_id, draft),
        }
    }

    /// List a user's estimates, newest first.
    pub fn list(&self, user_id: &str) -> Result<Vec<Estimate>> {
        self.store.list(user_id)
    }

    pub fn get(&self, id: Uuid) -> Result<Option<Estimate>> {
        self.store.get(id)
    }

    /// Like [`get`](Self::get), but a missing estimate is an error.
    pub fn require(&self, id: Uuid) -> Result<Estimate> {
        self.store
            .get(id)?
            .ok_or_else(|| StackcostError::NotFound(format!("Estimate {}", id)))
    }

    pub fn search(&self, user_id: &str, params: &SearchEstimatesParams) -> Result<Vec<Estimate>> {
        self.store.search(user_id, params)
    }

    pub fn delete(&self, id: Uuid) -> Result<bool> {
        self.store.delete(id)
    }

    /// Save each estimate as a new one owned by `user_id`.
    ///
    /// Used to restore a backup: ids and creation times are reassigned.
    pub fn import(&self, user_id: &str, estimates: Vec<Estimate>) -> Result<Vec<Estimate>> {
        let mut saved = Vec::with_capacity(estimates.len());
        for estimate in estimates {
            let draft = NewEstimate::new(estimate.name, estimate.services);
            saved.push(self.store.insert(user_id, draft)?);
        }
        tracing::info!(user_id, count = saved.len(), "imported estimates");
        Ok(saved)
    }

    /// Count, total spend and min/max/average total across a user's estimates.
    pub fn summary(&self, user_id: &str) -> Result<EstimateSummary> {
        let estimates = self.store.list(user_id)?;
        if estimates.is_empty() {
            return Ok(EstimateSummary::default());
        }

        let totals: Vec<Money> = estimates.iter().map(|e| e.total_cost()).collect();
        let total_spend: Money = totals.iter().sum();
        let count = totals.len();

        Ok(EstimateSummary {
            count,
            total_spend,
            min_total: totals.iter().copied().min().unwrap_or_default(),
            max_total: totals.iter().copied().max().unwrap_or_default(),
            avg_total: Money::from_amount(total_spend.amount() / count as f64),
        })
    }
}
