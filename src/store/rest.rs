//! Hosted estimate store speaking the PostgREST protocol.
//!
//! Rows live in the `estimates` resource under `<base>/rest/v1`. Requests
//! carry the project `apikey` and a bearer token (the user's access token
//! when one is set, otherwise the api key). Ownership rules are enforced by
//! the backend, not here.

use chrono::{SubsecRound, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

use super::EstimateStore;
use crate::config;
use crate::error::{Result, StackcostError};
use crate::models::{Estimate, NewEstimate};

pub struct RestStore {
    base_url: String,
    api_key: String,
    access_token: Option<String>,
    client: Client,
}

impl RestStore {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: None,
            client,
        })
    }

    /// Authenticate requests as a signed-in user.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Full URL of the estimates resource.
    pub fn table_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            config::REST_PATH,
            config::ESTIMATES_TABLE
        )
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        let token = self.access_token.as_deref().unwrap_or(&self.api_key);
        req.header("apikey", self.api_key.as_str()).bearer_auth(token)
    }

    fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let resp = self.authorize(req).send()?;
        Ok(check_status(resp)?.json()?)
    }
}

/// Map a non-2xx response to [`StackcostError::Api`], keeping the body.
fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body);
    Err(StackcostError::Api {
        status: status.as_u16(),
        message,
    })
}

impl EstimateStore for RestStore {
    fn insert(&self, user_id: &str, draft: NewEstimate) -> Result<Estimate> {
        let estimate =
            Estimate::from_draft(Uuid::new_v4(), user_id, Utc::now().trunc_subsecs(6), draft);
        let req = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&estimate);
        let rows: Vec<Estimate> = self.send(req)?;
        let saved = rows.into_iter().next().ok_or_else(|| StackcostError::Api {
            status: 201,
            message: "insert returned no rows".to_string(),
        })?;
        tracing::info!(estimate_id = %saved.id, user_id, total = %saved.total_cost(), "saved estimate");
        Ok(saved)
    }

    fn list(&self, user_id: &str) -> Result<Vec<Estimate>> {
        let req = self.client.get(self.table_url()).query(&[
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", user_id)),
            ("order", "created_at.desc".to_string()),
        ]);
        self.send(req)
    }

    fn get(&self, id: Uuid) -> Result<Option<Estimate>> {
        let req = self
            .client
            .get(self.table_url())
            .query(&[("select", "*".to_string()), ("id", format!("eq.{}", id))]);
        let rows: Vec<Estimate> = self.send(req)?;
        Ok(rows.into_iter().next())
    }

    fn replace(&self, id: Uuid, draft: NewEstimate) -> Result<Estimate> {
        let total_cost = draft.total_cost();
        let body = json!({
            "name": draft.name,
            "services": draft.services,
            "total_cost": total_cost,
        });
        let req = self
            .client
            .patch(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&body);
        let rows: Vec<Estimate> = self.send(req)?;
        let saved = rows
            .into_iter()
            .next()
            .ok_or_else(|| StackcostError::NotFound(format!("Estimate {}", id)))?;
        tracing::info!(estimate_id = %id, total = %saved.total_cost(), "replaced estimate");
        Ok(saved)
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let req = self
            .client
            .delete(self.table_url())
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation");
        let rows: Vec<serde_json::Value> = self.send(req)?;
        let deleted = !rows.is_empty();
        tracing::info!(estimate_id = %id, deleted, "deleted estimate");
        Ok(deleted)
    }
}
