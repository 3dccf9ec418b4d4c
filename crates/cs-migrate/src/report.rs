//! Per-step outcomes and the run report

use crate::error::{MigrateError, MigrateResult};
use crate::step::StepName;
use cs_core::FailurePolicy;
use cs_db::{column_i64, column_str, DbError, RowSet};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Success,
    Failed,
    /// Not attempted because the policy stopped the run
    Skipped,
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepStatus::Success => write!(f, "success"),
            StepStatus::Failed => write!(f, "failed"),
            StepStatus::Skipped => write!(f, "skipped"),
        }
    }
}

/// Structured result of one step
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: StepName,
    pub status: StepStatus,
    /// Rows returned by a successful step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<RowSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status of a rejected batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub timed_out: bool,
    pub duration_ms: u64,
}

impl StepOutcome {
    pub(crate) fn success(step: StepName, rows: RowSet, duration: Duration) -> Self {
        Self {
            step,
            status: StepStatus::Success,
            rows: Some(rows),
            error: None,
            http_status: None,
            timed_out: false,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub(crate) fn failure(step: StepName, err: &DbError, duration: Duration) -> Self {
        Self {
            step,
            status: StepStatus::Failed,
            rows: None,
            error: Some(err.to_string()),
            http_status: err.status(),
            timed_out: err.is_timeout(),
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub(crate) fn skipped(step: StepName) -> Self {
        Self {
            step,
            status: StepStatus::Skipped,
            rows: None,
            error: None,
            http_status: None,
            timed_out: false,
            duration_ms: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == StepStatus::Success
    }
}

/// Outcomes of a whole run, in plan order
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub policy: FailurePolicy,
    pub steps: Vec<StepOutcome>,
}

impl RunReport {
    /// Outcome of a named step, if it was part of the plan
    pub fn step(&self, name: StepName) -> Option<&StepOutcome> {
        self.steps.iter().find(|o| o.step == name)
    }

    pub fn failed_steps(&self) -> Vec<&StepOutcome> {
        self.steps
            .iter()
            .filter(|o| o.status == StepStatus::Failed)
            .collect()
    }

    /// Rows of the verification step, when it ran successfully
    pub fn verification(&self) -> Option<&RowSet> {
        self.step(StepName::Verification)
            .filter(|o| o.is_success())
            .and_then(|o| o.rows.as_ref())
    }

    /// Overall result: the verification step returned at least one row.
    ///
    /// Earlier step failures do not count against it; use
    /// [`ensure_all_succeeded`](Self::ensure_all_succeeded) for that.
    pub fn is_success(&self) -> bool {
        self.verification().is_some_and(|rows| !rows.is_empty())
    }

    /// Parse the verification rows
    pub fn summary(&self) -> MigrateResult<VerificationSummary> {
        let rows = self
            .verification()
            .filter(|rows| !rows.is_empty())
            .ok_or(MigrateError::Unverified)?;
        VerificationSummary::from_rows(rows)
    }

    /// Strict check: error on the first failed step
    pub fn ensure_all_succeeded(&self) -> MigrateResult<()> {
        match self.failed_steps().first() {
            Some(failed) => Err(MigrateError::StepFailed {
                step: failed.step.to_string(),
                message: failed.error.clone().unwrap_or_default(),
            }),
            None => Ok(()),
        }
    }
}

/// Row counts for one table from the verification query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table_name: String,
    pub total_records: i64,
    pub with_commercial_date: i64,
    pub with_insurance_date: i64,
}

/// Parsed verification result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    pub tables: Vec<TableCount>,
}

impl VerificationSummary {
    pub fn from_rows(rows: &RowSet) -> MigrateResult<Self> {
        let tables = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let int = |column: &str| {
                    column_i64(row, column).ok_or_else(|| MigrateError::MissingColumn {
                        row: idx,
                        column: column.to_string(),
                    })
                };
                let table_name = column_str(row, "table_name")
                    .ok_or_else(|| MigrateError::MissingColumn {
                        row: idx,
                        column: "table_name".to_string(),
                    })?
                    .to_string();
                Ok(TableCount {
                    table_name,
                    total_records: int("total_records")?,
                    with_commercial_date: int("with_commercial_date")?,
                    with_insurance_date: int("with_insurance_date")?,
                })
            })
            .collect::<MigrateResult<Vec<_>>>()?;
        Ok(Self { tables })
    }

    pub fn table(&self, name: &str) -> Option<&TableCount> {
        self.tables.iter().find(|t| t.table_name == name)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
