//! SQL builder with parameterized query construction.
//!
//! All user-supplied values go through DuckDB's parameter binding (`?` placeholders),
//! never through string interpolation. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use stackcost_sdk::SqlBuilder;
//! let (sql, params) = SqlBuilder::new("estimates")
//!     .where_eq("user_id", "user-1")
//!     .where_gte("total_cost", 25.0)
//!     .order_by(&["created_at DESC"])
//!     .limit(10)
//!     .build();
//! assert_eq!(params.len(), 2);
//! ```

use duckdb::types::{ToSqlOutput, Value};
use duckdb::ToSql;

// ---------------------------------------------------------------------------
// SqlValue
// ---------------------------------------------------------------------------

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Real(f64),
    Int(i64),
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&String> for SqlValue {
    fn from(s: &String) -> Self {
        SqlValue::Text(s.clone())
    }
}

impl From<f64> for SqlValue {
    fn from(f: f64) -> Self {
        SqlValue::Real(f)
    }
}

impl From<i64> for SqlValue {
    fn from(i: i64) -> Self {
        SqlValue::Int(i)
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Text(s) => ToSqlOutput::Owned(Value::Text(s.clone())),
            SqlValue::Real(f) => ToSqlOutput::Owned(Value::Double(*f)),
            SqlValue::Int(i) => ToSqlOutput::Owned(Value::BigInt(*i)),
        })
    }
}

// ---------------------------------------------------------------------------
// SqlBuilder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statement {
    Select,
    Insert,
    Update,
    Delete,
}

/// Builds parameterized SELECT, INSERT, UPDATE and DELETE statements.
pub struct SqlBuilder {
    statement: Statement,
    table: String,
    assignments: Vec<(String, SqlValue)>,
    where_clauses: Vec<String>,
    where_params: Vec<SqlValue>,
    order_by_cols: Vec<String>,
    limit_val: Option<usize>,
    offset_val: Option<usize>,
}

impl SqlBuilder {
    fn with_statement(statement: Statement, table: &str) -> Self {
        Self {
            statement,
            table: table.to_string(),
            assignments: Vec::new(),
            where_clauses: Vec::new(),
            where_params: Vec::new(),
            order_by_cols: Vec::new(),
            limit_val: None,
            offset_val: None,
        }
    }

    /// `SELECT * FROM {table}`.
    pub fn new(table: &str) -> Self {
        Self::with_statement(Statement::Select, table)
    }

    /// `INSERT INTO {table}`; add columns with [`set`](Self::set).
    pub fn insert(table: &str) -> Self {
        Self::with_statement(Statement::Insert, table)
    }

    /// `UPDATE {table} SET ...`; add assignments with [`set`](Self::set).
    pub fn update(table: &str) -> Self {
        Self::with_statement(Statement::Update, table)
    }

    /// `DELETE FROM {table}`.
    pub fn delete(table: &str) -> Self {
        Self::with_statement(Statement::Delete, table)
    }

    /// Add a column value for INSERT or UPDATE.
    pub fn set(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.assignments.push((column.to_string(), value.into()));
        self
    }

    /// Add an equality condition: `{column} = ?`.
    pub fn where_eq(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", column));
        self.where_params.push(value.into());
        self
    }

    /// Add a case-insensitive literal substring condition.
    ///
    /// Generates: `contains(LOWER({column}), LOWER(?))`. `%` and `_` in
    /// `needle` match themselves.
    pub fn where_contains(&mut self, column: &str, needle: &str) -> &mut Self {
        self.where_clauses
            .push(format!("contains(LOWER({}), LOWER(?))", column));
        self.where_params.push(needle.into());
        self
    }

    /// Add a greater-than-or-equal condition: `{column} >= ?`.
    pub fn where_gte(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.where_clauses.push(format!("{} >= ?", column));
        self.where_params.push(value.into());
        self
    }

    /// Add a less-than-or-equal condition: `{column} <= ?`.
    pub fn where_lte(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        self.where_clauses.push(format!("{} <= ?", column));
        self.where_params.push(value.into());
        self
    }

    /// Add ORDER BY clauses (e.g. `"created_at DESC"`).
    pub fn order_by(&mut self, clauses: &[&str]) -> &mut Self {
        self.order_by_cols
            .extend(clauses.iter().map(|c| c.to_string()));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Set the number of rows to skip before returning results.
    pub fn offset(&mut self, n: usize) -> &mut Self {
        self.offset_val = Some(n);
        self
    }

    /// Build the final SQL string and parameter list.
    ///
    /// Assignment values come first, then WHERE values, matching placeholder order.
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        let mut parts = Vec::new();
        let mut params: Vec<SqlValue> = Vec::new();

        match self.statement {
            Statement::Select => {
                parts.push("SELECT *".to_string());
                parts.push(format!("FROM {}", self.table));
            }
            Statement::Insert => {
                let cols: Vec<&str> = self.assignments.iter().map(|(c, _)| c.as_str()).collect();
                let placeholders: Vec<&str> = cols.iter().map(|_| "?").collect();
                parts.push(format!(
                    "INSERT INTO {} ({})",
                    self.table,
                    cols.join(", ")
                ));
                parts.push(format!("VALUES ({})", placeholders.join(", ")));
                params.extend(self.assignments.iter().map(|(_, v)| v.clone()));
            }
            Statement::Update => {
                let sets: Vec<String> = self
                    .assignments
                    .iter()
                    .map(|(c, _)| format!("{} = ?", c))
                    .collect();
                parts.push(format!("UPDATE {}", self.table));
                parts.push(format!("SET {}", sets.join(", ")));
                params.extend(self.assignments.iter().map(|(_, v)| v.clone()));
            }
            Statement::Delete => {
                parts.push(format!("DELETE FROM {}", self.table));
            }
        }

        if self.statement != Statement::Insert && !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
            params.extend(self.where_params.iter().cloned());
        }

        if self.statement == Statement::Select {
            if !self.order_by_cols.is_empty() {
                parts.push(format!("ORDER BY {}", self.order_by_cols.join(", ")));
            }
            if let Some(n) = self.limit_val {
                parts.push(format!("LIMIT {}", n));
            }
            if let Some(n) = self.offset_val {
                parts.push(format!("OFFSET {}", n));
            }
        }

        (parts.join("\n"), params)
    }
}
