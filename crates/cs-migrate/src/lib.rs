//! Migration sequencer for complyseed.
//!
//! Builds the fixed four-step plan (account schema, organization schema,
//! organization seed, verification) and runs it step by step against a
//! [`cs_db::Database`], collecting a structured outcome for every step.

pub mod ddl;
pub mod error;
pub mod plan;
pub mod report;
pub mod seed;
pub mod sequencer;
pub mod step;

pub use error::{MigrateError, MigrateResult};
pub use plan::{MigrationPlan, PlanOptions};
pub use report::{RunReport, StepOutcome, StepStatus, TableCount, VerificationSummary};
pub use seed::{seed_organizations, seed_sql, SeedOrganization};
pub use sequencer::{Sequencer, StepEvent};
pub use step::{Step, StepKind, StepName};
