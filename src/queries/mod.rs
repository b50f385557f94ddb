//! Query modules for the stackcost SDK.
//!
//! Each module provides a query struct that borrows from an
//! [`EstimateStore`](crate::store::EstimateStore) and exposes methods
//! returning `Result<T>` with typed model payloads.

pub mod estimates;

pub use estimates::{EstimateQuery, SearchEstimatesParams};
