//! Stateful calculator session.
//!
//! Holds the usage profiles being edited and keeps the cost breakdowns in
//! step with them: every mutation recomputes all costs before returning, so
//! [`Calculator::costs`] and [`Calculator::total`] never lag the inputs.

use uuid::Uuid;

use crate::config;
use crate::error::Result;
use crate::models::{
    parse_input, services_from, Category, CostBreakdownSet, Estimate, NewEstimate,
    UsageProfileSet,
};
use crate::money::Money;
use crate::pricing;

#[derive(Debug, Clone)]
pub struct Calculator {
    profiles: UsageProfileSet,
    costs: CostBreakdownSet,
    name: String,
    editing: Option<Uuid>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Start from the seed profile with costs already computed.
    pub fn new() -> Self {
        Self::with_profiles(UsageProfileSet::seed())
    }

    pub fn with_profiles(profiles: UsageProfileSet) -> Self {
        let mut calc = Self {
            profiles,
            costs: CostBreakdownSet::default(),
            name: String::new(),
            editing: None,
        };
        calc.recompute();
        calc
    }

    pub fn profiles(&self) -> &UsageProfileSet {
        &self.profiles
    }

    pub fn costs(&self) -> &CostBreakdownSet {
        &self.costs
    }

    pub fn total(&self) -> Money {
        pricing::compute_total(&self.costs)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Id of the saved estimate loaded for editing, if any.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Set one usage field and recompute.
    pub fn set_field(&mut self, category: Category, field: &str, value: f64) -> Result<()> {
        self.profiles.set_field(category, field, value)?;
        self.recompute();
        Ok(())
    }

    /// Set one usage field from raw form input and recompute.
    ///
    /// See [`parse_input`] for how the text is coerced.
    pub fn set_input(&mut self, category: Category, field: &str, raw: &str) -> Result<()> {
        self.set_field(category, field, parse_input(raw))
    }

    pub fn set_profiles(&mut self, profiles: UsageProfileSet) {
        self.profiles = profiles;
        self.recompute();
    }

    /// Load a saved estimate for edit-and-resave.
    pub fn load_estimate(&mut self, estimate: &Estimate) {
        estimate.apply_profiles(&mut self.profiles);
        self.name = estimate.name.clone();
        self.editing = Some(estimate.id);
        self.recompute();
    }

    /// Forget the loaded estimate so the next save creates a new one.
    pub fn detach(&mut self) {
        self.editing = None;
    }

    /// Snapshot the session as an unsaved estimate.
    pub fn draft(&self) -> NewEstimate {
        let name = if self.name.trim().is_empty() {
            config::DEFAULT_ESTIMATE_NAME.to_string()
        } else {
            self.name.clone()
        };
        NewEstimate::new(name, services_from(&self.profiles, &self.costs))
    }

    fn recompute(&mut self) {
        self.costs = pricing::compute_costs(&self.profiles);
        tracing::debug!(total = %self.total(), "recomputed estimate costs");
    }
}
