//! Stackcost SDK for Rust.
//!
//! Estimates the monthly cost of a backend stack across database, auth,
//! storage, edge functions and realtime, comparing Supabase against
//! Firebase, AWS, Neon and PlanetScale. Estimates can be saved to a local
//! DuckDB file or a hosted PostgREST table, and exported as CSV or text.
//!
//! # Quick start
//!
//! ```no_run
//! use stackcost_sdk::{models::Category, StackcostSdk};
//!
//! let sdk = StackcostSdk::builder().in_memory(true).build().unwrap();
//!
//! let mut calc = sdk.calculator();
//! calc.set_input(Category::Database, "storageGB", "108").unwrap();
//! println!("monthly total: ${}", calc.total());
//!
//! // Save and list
//! sdk.estimates().save("user-1", &calc).unwrap();
//! let saved = sdk.estimates().list("user-1").unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod calculator;
pub mod config;
pub mod connection;
pub mod error;
pub mod export;
pub mod models;
pub mod money;
pub mod pricing;
pub mod queries;
pub mod sql_builder;
pub mod store;
pub mod tiers;

#[cfg(feature = "async")]
pub use async_client::AsyncStackcostSdk;
pub use calculator::Calculator;
pub use connection::Connection;
pub use error::{Result, StackcostError};
pub use money::Money;
pub use pricing::{compute_costs, compute_total};
pub use sql_builder::{SqlBuilder, SqlValue};
pub use store::{DuckDbStore, EstimateStore, RestStore};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::{CostBreakdownSet, UsageProfileSet};
use tiers::ServiceTiers;

// ---------------------------------------------------------------------------
// StackcostSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StackcostSdk`] instance.
///
/// Use [`StackcostSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StackcostSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct StackcostSdkBuilder {
    data_dir: Option<PathBuf>,
    in_memory: bool,
    remote: Option<(String, String)>,
    access_token: Option<String>,
    timeout: Duration,
}

impl Default for StackcostSdkBuilder {
    fn default() -> Self {
        Self {
            data_dir: None,
            in_memory: false,
            remote: None,
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl StackcostSdkBuilder {
    /// Directory holding the local estimates database.
    ///
    /// If not set, the platform data directory is used
    /// (e.g. `~/.local/share/stackcost-sdk` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep estimates in memory only. Ignored when a remote store is set.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Store estimates in a hosted PostgREST backend instead of locally.
    pub fn remote(mut self, base_url: &str, api_key: &str) -> Self {
        self.remote = Some((base_url.to_string(), api_key.to_string()));
        self
    }

    /// Signed-in user's access token for the remote store.
    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// HTTP request timeout for the remote store. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, opening (and if needed creating) the estimate store.
    pub fn build(self) -> Result<StackcostSdk> {
        let (store, location): (Box<dyn EstimateStore + Send>, String) = match self.remote {
            Some((base_url, api_key)) => {
                let mut rest = RestStore::new(&base_url, &api_key, self.timeout)?;
                if let Some(token) = self.access_token {
                    rest = rest.with_access_token(token);
                }
                let location = rest.table_url();
                (Box::new(rest), location)
            }
            None if self.in_memory => (Box::new(DuckDbStore::in_memory()?), ":memory:".to_string()),
            None => {
                let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
                let path = dir.join(config::DB_FILE);
                let location = path.display().to_string();
                (Box::new(DuckDbStore::new(Connection::open(path)?)), location)
            }
        };
        tracing::info!(store = %location, "estimate store ready");
        Ok(StackcostSdk { store, location })
    }
}

// ---------------------------------------------------------------------------
// StackcostSdk
// ---------------------------------------------------------------------------

/// The main entry point for the stackcost SDK.
///
/// Owns an [`EstimateStore`] and exposes the pricing engine plus a borrowing
/// query wrapper over saved estimates.
///
/// Created via [`StackcostSdk::builder()`].
pub struct StackcostSdk {
    store: Box<dyn EstimateStore + Send>,
    location: String,
}

impl StackcostSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StackcostSdkBuilder {
        StackcostSdkBuilder::default()
    }

    /// Access the saved-estimate query interface.
    pub fn estimates(&self) -> queries::EstimateQuery<'_> {
        queries::EstimateQuery::new(self.store.as_ref())
    }

    /// A fresh calculator seeded with the default usage profile.
    pub fn calculator(&self) -> Calculator {
        Calculator::new()
    }

    /// Price every category for every provider.
    pub fn compute_costs(&self, profiles: &UsageProfileSet) -> CostBreakdownSet {
        pricing::compute_costs(profiles)
    }

    /// Sum of the primary-provider costs.
    pub fn compute_total(&self, breakdowns: &CostBreakdownSet) -> Money {
        pricing::compute_total(breakdowns)
    }

    /// Published tier table for a service id such as `"supabase-database"`.
    pub fn pricing_info(&self, service: &str) -> Option<ServiceTiers> {
        tiers::pricing_info(service)
    }

    /// Return a reference to the underlying store for advanced usage.
    pub fn store(&self) -> &dyn EstimateStore {
        self.store.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StackcostSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StackcostSdk(store={})", self.location)
    }
}
