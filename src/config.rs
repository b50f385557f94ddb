use std::path::PathBuf;

use crate::models::Provider;

/// Table (or PostgREST resource) holding saved estimates.
pub const ESTIMATES_TABLE: &str = "estimates";

/// DuckDB database file created inside the data directory.
pub const DB_FILE: &str = "estimates.duckdb";

/// PostgREST path prefix on a hosted backend.
pub const REST_PATH: &str = "rest/v1";

/// Name given to estimates saved without one.
pub const DEFAULT_ESTIMATE_NAME: &str = "New Estimate";

/// Provider column order used by every export format.
pub const EXPORT_PROVIDERS: [Provider; 5] = [
    Provider::Supabase,
    Provider::Firebase,
    Provider::Aws,
    Provider::Neon,
    Provider::Planetscale,
];

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("stackcost-sdk")
    } else {
        PathBuf::from(".stackcost-sdk")
    }
}
