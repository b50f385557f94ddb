//! Async wrapper around [`StackcostSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! DuckDB queries or blocking HTTP calls are in flight.
//!
//! # Example
//!
//! ```no_run
//! use stackcost_sdk::{AsyncStackcostSdk, Calculator};
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncStackcostSdk::builder().in_memory(true).build().await.unwrap();
//!
//!     let saved = sdk.save_estimate("user-1", Calculator::new()).await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let summary = sdk.run(|s| s.estimates().summary("user-1")).await.unwrap();
//! }
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

use crate::calculator::Calculator;
use crate::error::{Result, StackcostError};
use crate::models::{Estimate, EstimateSummary};
use crate::{StackcostSdk, StackcostSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncStackcostSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncStackcostSdk`] instance.
///
/// Takes the same options as [`StackcostSdkBuilder`].
#[derive(Debug, Clone, Default)]
pub struct AsyncStackcostSdkBuilder {
    inner: StackcostSdkBuilder,
}

impl AsyncStackcostSdkBuilder {
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.data_dir(path);
        self
    }

    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.inner = self.inner.in_memory(in_memory);
        self
    }

    pub fn remote(mut self, base_url: &str, api_key: &str) -> Self {
        self.inner = self.inner.remote(base_url, api_key);
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.inner = self.inner.access_token(token);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Build the async SDK.
    ///
    /// Opening the store runs on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncStackcostSdk> {
        let builder = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = builder.build()?;
            Ok(AsyncStackcostSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(join_error)?
    }
}

// ---------------------------------------------------------------------------
// AsyncStackcostSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`StackcostSdk`].
///
/// The underlying store is not `Sync`, so the SDK sits behind a [`Mutex`]
/// and each operation takes the lock on a blocking thread.
pub struct AsyncStackcostSdk {
    inner: Arc<Mutex<StackcostSdk>>,
}

impl AsyncStackcostSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncStackcostSdkBuilder {
        AsyncStackcostSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use stackcost_sdk::AsyncStackcostSdk;
    /// # async fn example() -> stackcost_sdk::Result<()> {
    /// # let sdk = AsyncStackcostSdk::builder().in_memory(true).build().await?;
    /// let estimates = sdk.run(|s| s.estimates().list("user-1")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StackcostSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| StackcostError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(join_error)?
    }

    /// Save a calculator session; see [`EstimateQuery::save`](crate::queries::EstimateQuery::save).
    pub async fn save_estimate(&self, user_id: &str, calculator: Calculator) -> Result<Estimate> {
        let user_id = user_id.to_string();
        self.run(move |s| s.estimates().save(&user_id, &calculator))
            .await
    }

    /// List a user's estimates, newest first.
    pub async fn list_estimates(&self, user_id: &str) -> Result<Vec<Estimate>> {
        let user_id = user_id.to_string();
        self.run(move |s| s.estimates().list(&user_id)).await
    }

    pub async fn get_estimate(&self, id: Uuid) -> Result<Option<Estimate>> {
        self.run(move |s| s.estimates().get(id)).await
    }

    pub async fn delete_estimate(&self, id: Uuid) -> Result<bool> {
        self.run(move |s| s.estimates().delete(id)).await
    }

    pub async fn summary(&self, user_id: &str) -> Result<EstimateSummary> {
        let user_id = user_id.to_string();
        self.run(move |s| s.estimates().summary(&user_id)).await
    }

    /// Close the SDK, releasing the store on a blocking thread.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| StackcostError::InvalidArgument("SDK lock poisoned".into()))?;
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(join_error)?
    }
}

fn join_error(e: tokio::task::JoinError) -> StackcostError {
    StackcostError::InvalidArgument(format!("Task join error: {e}"))
}
