//! Database trait definition

use crate::error::DbResult;
use crate::rows::RowSet;
use async_trait::async_trait;

/// SQL executor abstraction for complyseed
///
/// Implementations must be Send + Sync for async operation. A call is
/// attempted exactly once; retries are the caller's decision.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a (possibly multi-statement) SQL batch and return its rows
    async fn execute_sql(&self, sql: &str) -> DbResult<RowSet>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
