//! The fixed migration plan
//!
//! Steps always come in the same order: account schema, organization schema,
//! organization seed, verification. Each step relies on the side effects of
//! the ones before it, but nothing checks that they succeeded.

use crate::ddl;
use crate::seed::seed_sql;
use crate::step::{Step, StepKind, StepName};
use serde::Serialize;

/// Options that shape the generated SQL
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOptions {
    /// Drop and recreate the organization table instead of creating it if absent
    pub allow_destructive_reset: bool,
}

/// An ordered list of steps
#[derive(Debug, Clone, Serialize)]
pub struct MigrationPlan {
    steps: Vec<Step>,
}

impl MigrationPlan {
    /// The standard four-step sequence
    pub fn standard(options: PlanOptions) -> Self {
        if options.allow_destructive_reset {
            log::warn!("Destructive reset enabled: public.companies will be dropped and recreated");
        }

        Self {
            steps: vec![
                Step::new(StepName::AccountSchema, StepKind::Schema, ddl::ACCOUNT_SCHEMA),
                Step::new(
                    StepName::OrganizationSchema,
                    StepKind::Schema,
                    ddl::organization_schema(options.allow_destructive_reset),
                )
                .destructive(options.allow_destructive_reset),
                Step::new(StepName::OrganizationSeed, StepKind::Seed, seed_sql()),
                Self::verification_step(),
            ],
        }
    }

    /// Only the read-only verification query
    pub fn verification_only() -> Self {
        Self {
            steps: vec![Self::verification_step()],
        }
    }

    fn verification_step() -> Step {
        Step::new(StepName::Verification, StepKind::Verify, ddl::VERIFICATION)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True if any step drops existing data
    pub fn is_destructive(&self) -> bool {
        self.steps.iter().any(|s| s.destructive)
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
