//! DuckDB connection wrapper with schema setup and query execution.
//!
//! Rows come back as `HashMap<String, serde_json::Value>` so callers can
//! deserialize them straight into model types.

use crate::config;
use crate::error::{Result, StackcostError};
use crate::sql_builder::SqlValue;
use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Wraps a DuckDB connection holding the estimates table.
pub struct Connection {
    conn: DuckDbConnection,
    path: Option<PathBuf>,
}

impl Connection {
    /// Open an in-memory database. Contents are lost on drop.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        let wrapped = Self { conn, path: None };
        wrapped.ensure_schema()?;
        Ok(wrapped)
    }

    /// Open (or create) a database file, creating parent directories.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = DuckDbConnection::open(&path)?;
        let wrapped = Self {
            conn,
            path: Some(path),
        };
        wrapped.ensure_schema()?;
        tracing::debug!(path = %wrapped.describe(), "opened estimate database");
        Ok(wrapped)
    }

    /// Database file path, or `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn describe(&self) -> String {
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ":memory:".to_string())
    }

    /// Create the estimates table if it does not exist.
    ///
    /// `services` holds the JSON-encoded service list; `created_at` is an
    /// RFC 3339 UTC string with fixed precision, so it sorts lexically.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (\
               id VARCHAR PRIMARY KEY, \
               user_id VARCHAR NOT NULL, \
               name VARCHAR NOT NULL, \
               services VARCHAR NOT NULL, \
               total_cost DOUBLE NOT NULL, \
               created_at VARCHAR NOT NULL\
             )",
            config::ESTIMATES_TABLE
        ))?;
        Ok(())
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    pub fn execute(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        tracing::debug!(sql, params = params.len(), "executing query");
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the query has run.
        let stmt_ref = rows_result.as_ref().ok_or_else(|| {
            StackcostError::InvalidArgument("query returned no statement".to_string())
        })?;
        let column_names: Vec<String> = stmt_ref
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();
        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                map.insert(col_name.clone(), convert_value_ref(row.get_ref(i)?));
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute a statement that modifies rows and return how many changed.
    pub fn execute_update(&self, sql: &str, params: &[SqlValue]) -> Result<usize> {
        tracing::debug!(sql, params = params.len(), "executing statement");
        let param_values: Vec<&dyn duckdb::ToSql> =
            params.iter().map(|p| p as &dyn duckdb::ToSql).collect();
        Ok(self.conn.execute(sql, param_values.as_slice())?)
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => match i64::try_from(n) {
            Ok(i) => serde_json::Value::Number(i.into()),
            Err(_) => serde_json::Value::String(n.to_string()),
        },
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => serde_json::Value::String(String::from_utf8_lossy(bytes).to_string()),
        // Dates, lists and blobs are never stored in the estimates table.
        _ => serde_json::Value::Null,
    }
}
