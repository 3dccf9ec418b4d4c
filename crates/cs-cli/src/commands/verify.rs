//! Verify command implementation

use anyhow::Result;
use cs_core::FailurePolicy;
use cs_migrate::{MigrationPlan, Sequencer};

use crate::cli::{GlobalArgs, OutputFormat, VerifyArgs};
use crate::commands::common::{self, create_database_connection, load_settings};

/// Execute the verify command
pub(crate) async fn execute(args: &VerifyArgs, global: &GlobalArgs) -> Result<()> {
    let settings = load_settings(global)?;
    let db = create_database_connection(&settings)?;
    let plan = MigrationPlan::verification_only();
    let sequencer = Sequencer::new(db, FailurePolicy::BestEffort);

    let report = match args.output {
        OutputFormat::Json => {
            let report = sequencer.run(&plan).await;
            common::print_report_json(&report)?;
            report
        }
        OutputFormat::Text => {
            let report = sequencer
                .run_observed(&plan, common::print_step_event)
                .await;
            common::print_report_summary(&report);
            report
        }
    };

    common::finish(&report)
}
