//! DuckDB-backed estimate store.

use chrono::{SecondsFormat, SubsecRound, Utc};
use std::collections::HashMap;
use uuid::Uuid;

use super::EstimateStore;
use crate::config::ESTIMATES_TABLE;
use crate::connection::Connection;
use crate::error::{Result, StackcostError};
use crate::models::{Estimate, NewEstimate};
use crate::queries::estimates::SearchEstimatesParams;
use crate::sql_builder::SqlBuilder;

/// Stores estimates in the `estimates` table of a DuckDB database.
pub struct DuckDbStore {
    conn: Connection,
}

impl DuckDbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn query(&self, qb: &SqlBuilder) -> Result<Vec<Estimate>> {
        let (sql, params) = qb.build();
        self.conn
            .execute(&sql, &params)?
            .into_iter()
            .map(row_to_estimate)
            .collect()
    }

    fn write_services(estimate: &Estimate) -> Result<String> {
        Ok(serde_json::to_string(&estimate.services)?)
    }
}

impl EstimateStore for DuckDbStore {
    fn insert(&self, user_id: &str, draft: NewEstimate) -> Result<Estimate> {
        // Stored with microsecond precision; truncate so the returned value
        // matches what a later read yields.
        let created_at = Utc::now().trunc_subsecs(6);
        let estimate = Estimate::from_draft(Uuid::new_v4(), user_id, created_at, draft);

        let (sql, params) = SqlBuilder::insert(ESTIMATES_TABLE)
            .set("id", estimate.id.to_string())
            .set("user_id", estimate.user_id.as_str())
            .set("name", estimate.name.as_str())
            .set("services", Self::write_services(&estimate)?)
            .set("total_cost", estimate.total_cost().amount())
            .set(
                "created_at",
                estimate.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            )
            .build();
        self.conn.execute_update(&sql, &params)?;

        tracing::info!(estimate_id = %estimate.id, user_id, total = %estimate.total_cost(), "saved estimate");
        Ok(estimate)
    }

    fn list(&self, user_id: &str) -> Result<Vec<Estimate>> {
        let mut qb = SqlBuilder::new(ESTIMATES_TABLE);
        qb.where_eq("user_id", user_id)
            .order_by(&["created_at DESC", "id ASC"]);
        self.query(&qb)
    }

    fn get(&self, id: Uuid) -> Result<Option<Estimate>> {
        let mut qb = SqlBuilder::new(ESTIMATES_TABLE);
        qb.where_eq("id", id.to_string()).limit(1);
        Ok(self.query(&qb)?.into_iter().next())
    }

    fn replace(&self, id: Uuid, draft: NewEstimate) -> Result<Estimate> {
        let existing = self
            .get(id)?
            .ok_or_else(|| StackcostError::NotFound(format!("Estimate {}", id)))?;
        let estimate = Estimate::from_draft(existing.id, existing.user_id, existing.created_at, draft);

        let (sql, params) = SqlBuilder::update(ESTIMATES_TABLE)
            .set("name", estimate.name.as_str())
            .set("services", Self::write_services(&estimate)?)
            .set("total_cost", estimate.total_cost().amount())
            .where_eq("id", id.to_string())
            .build();
        self.conn.execute_update(&sql, &params)?;

        tracing::info!(estimate_id = %id, total = %estimate.total_cost(), "replaced estimate");
        Ok(estimate)
    }

    fn delete(&self, id: Uuid) -> Result<bool> {
        let (sql, params) = SqlBuilder::delete(ESTIMATES_TABLE)
            .where_eq("id", id.to_string())
            .build();
        let deleted = self.conn.execute_update(&sql, &params)? > 0;
        tracing::info!(estimate_id = %id, deleted, "deleted estimate");
        Ok(deleted)
    }

    fn search(&self, user_id: &str, params: &SearchEstimatesParams) -> Result<Vec<Estimate>> {
        let mut qb = SqlBuilder::new(ESTIMATES_TABLE);
        qb.where_eq("user_id", user_id)
            .order_by(&["created_at DESC", "id ASC"]);

        if let Some(ref name) = params.name {
            qb.where_contains("name", name);
        }
        if let Some(min) = params.min_total {
            qb.where_gte("total_cost", min);
        }
        if let Some(max) = params.max_total {
            qb.where_lte("total_cost", max);
        }
        if let Some(n) = params.limit {
            qb.limit(n);
        }
        if let Some(n) = params.offset {
            qb.offset(n);
        }
        self.query(&qb)
    }
}

/// Decode a table row; `services` is stored as JSON text.
fn row_to_estimate(mut row: HashMap<String, serde_json::Value>) -> Result<Estimate> {
    if let Some(serde_json::Value::String(raw)) = row.get("services") {
        let parsed: serde_json::Value = serde_json::from_str(raw)?;
        row.insert("services".to_string(), parsed);
    }
    let value = serde_json::Value::Object(row.into_iter().collect());
    Ok(serde_json::from_value(value)?)
}
