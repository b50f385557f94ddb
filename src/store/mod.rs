//! Persistence of saved estimates.
//!
//! [`EstimateStore`] is the seam between the SDK and wherever estimates
//! live. [`DuckDbStore`] keeps them in a local DuckDB file; [`RestStore`]
//! talks to a hosted PostgREST `estimates` table.

pub mod local;
pub mod rest;

pub use local::DuckDbStore;
pub use rest::RestStore;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{Estimate, NewEstimate};
use crate::queries::estimates::SearchEstimatesParams;

pub trait EstimateStore {
    /// Save a new estimate owned by `user_id`.
    fn insert(&self, user_id: &str, draft: NewEstimate) -> Result<Estimate>;

    /// All estimates owned by `user_id`, newest first.
    fn list(&self, user_id: &str) -> Result<Vec<Estimate>>;

    fn get(&self, id: Uuid) -> Result<Option<Estimate>>;

    /// Replace an estimate's name and services, keeping its id, owner and
    /// creation time. Fails with `NotFound` if `id` does not exist.
    fn replace(&self, id: Uuid, draft: NewEstimate) -> Result<Estimate>;

    /// Returns `false` if nothing was deleted.
    fn delete(&self, id: Uuid) -> Result<bool>;

    /// Filtered listing. The default filters [`list`](Self::list) in memory.
    fn search(&self, user_id: &str, params: &SearchEstimatesParams) -> Result<Vec<Estimate>> {
        let matched = self
            .list(user_id)?
            .into_iter()
            .filter(|e| params.matches(e));
        let skipped = matched.skip(params.offset.unwrap_or(0));
        Ok(match params.limit {
            Some(n) => skipped.take(n).collect(),
            None => skipped.collect(),
        })
    }
}
