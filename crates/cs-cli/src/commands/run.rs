//! Run command implementation

use anyhow::Result;
use cs_core::FailurePolicy;
use cs_migrate::{MigrationPlan, PlanOptions, Sequencer};
use std::time::Instant;

use crate::cli::{GlobalArgs, OutputFormat, RunArgs};
use crate::commands::common::{self, create_database_connection, load_settings};

/// Execute the run command
pub(crate) async fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let start_time = Instant::now();
    let settings = load_settings(global)?;
    let json_mode = args.output == OutputFormat::Json;

    let options = PlanOptions {
        allow_destructive_reset: args.allow_destructive_reset || settings.allow_destructive_reset,
    };
    let policy = if args.fail_fast {
        FailurePolicy::FailFast
    } else {
        settings.failure_policy
    };

    let db = create_database_connection(&settings)?;
    let plan = MigrationPlan::standard(options);
    let sequencer = Sequencer::new(db, policy);

    let report = if json_mode {
        sequencer.run(&plan).await
    } else {
        println!(
            "Running {} steps against {} (policy: {})\n",
            plan.len(),
            settings.endpoint.url,
            policy
        );
        sequencer.run_observed(&plan, common::print_step_event).await
    };

    if json_mode {
        common::print_report_json(&report)?;
    } else {
        common::print_report_summary(&report);
        println!("Total time: {}ms", start_time.elapsed().as_millis());
    }

    common::finish(&report)
}
