//! Row sets returned by the remote executor

use crate::error::{DbError, DbResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// One result row: column name to JSON scalar (or null)
pub type Row = Map<String, Value>;

/// Ordered rows produced by a SQL batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RowSet(Vec<Row>);

impl RowSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self(rows)
    }

    /// Decode a response body.
    ///
    /// Accepts a JSON array of objects. An empty body or `null` is what a
    /// procedure returning `void` sends back and decodes to no rows.
    pub fn from_json_text(body: &str) -> DbResult<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_str(body)
            .map_err(|e| DbError::Decode(format!("response is not JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Decode an already parsed JSON value
    pub fn from_value(value: Value) -> DbResult<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::Object(row) => Ok(row),
                    other => Err(DbError::Decode(format!(
                        "row {} is {}, expected an object",
                        idx,
                        json_kind(&other)
                    ))),
                })
                .collect::<DbResult<Vec<_>>>()
                .map(Self),
            other => Err(DbError::Decode(format!(
                "expected an array of rows, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.0.iter()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Read a column as an integer.
///
/// PostgreSQL `bigint` aggregates may arrive as JSON numbers or as numeric
/// strings depending on how the procedure serializes them; both are accepted.
pub fn column_i64(row: &Row, column: &str) -> Option<i64> {
    match row.get(column)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a column as a string slice
pub fn column_str<'a>(row: &'a Row, column: &str) -> Option<&'a str> {
    row.get(column).and_then(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "rows_test.rs"]
mod tests;
