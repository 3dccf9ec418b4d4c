//! Sequential step runner
//!
//! Steps run strictly one after another: each batch is sent and awaited
//! before the next starts. Under [`FailurePolicy::BestEffort`] every step is
//! attempted exactly once regardless of earlier outcomes.

use crate::plan::MigrationPlan;
use crate::report::{RunReport, StepOutcome, StepStatus};
use crate::step::Step;
use cs_core::FailurePolicy;
use cs_db::Database;
use std::sync::Arc;
use std::time::Instant;

/// Progress notification emitted while a plan runs
#[derive(Debug)]
pub enum StepEvent<'a> {
    /// A batch is about to be sent
    Started {
        index: usize,
        total: usize,
        step: &'a Step,
    },
    /// A step finished, failed, or was skipped
    Finished {
        index: usize,
        total: usize,
        outcome: &'a StepOutcome,
    },
}

/// Runs a [`MigrationPlan`] against a [`Database`]
pub struct Sequencer {
    db: Arc<dyn Database>,
    policy: FailurePolicy,
}

impl Sequencer {
    pub fn new(db: Arc<dyn Database>, policy: FailurePolicy) -> Self {
        Self { db, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Run every step of `plan` in order
    pub async fn run(&self, plan: &MigrationPlan) -> RunReport {
        self.run_observed(plan, |_| {}).await
    }

    /// Run every step of `plan` in order, reporting progress to `on_event`
    pub async fn run_observed<F>(&self, plan: &MigrationPlan, mut on_event: F) -> RunReport
    where
        F: FnMut(StepEvent<'_>),
    {
        let total = plan.len();
        let mut outcomes = Vec::with_capacity(total);
        let mut halted = false;

        for (i, step) in plan.steps().iter().enumerate() {
            let index = i + 1;

            if halted {
                let outcome = StepOutcome::skipped(step.name);
                on_event(StepEvent::Finished {
                    index,
                    total,
                    outcome: &outcome,
                });
                outcomes.push(outcome);
                continue;
            }

            on_event(StepEvent::Started { index, total, step });
            log::debug!(
                "Step {}/{} {} via {}:\n{}",
                index,
                total,
                step.name,
                self.db.db_type(),
                step.sql
            );

            let started = Instant::now();
            let outcome = match self.db.execute_sql(&step.sql).await {
                Ok(rows) => StepOutcome::success(step.name, rows, started.elapsed()),
                Err(err) => StepOutcome::failure(step.name, &err, started.elapsed()),
            };

            if outcome.status == StepStatus::Failed {
                match self.policy {
                    FailurePolicy::BestEffort => {
                        log::warn!("Step {} failed; continuing with the next step", step.name)
                    }
                    FailurePolicy::FailFast => {
                        log::warn!("Step {} failed; skipping remaining steps", step.name);
                        halted = true;
                    }
                }
            }

            on_event(StepEvent::Finished {
                index,
                total,
                outcome: &outcome,
            });
            outcomes.push(outcome);
        }

        RunReport {
            policy: self.policy,
            steps: outcomes,
        }
    }
}

#[cfg(test)]
#[path = "sequencer_test.rs"]
mod tests;
