//! Plan command implementation (dry run)

use anyhow::{Context, Result};
use cs_migrate::{MigrationPlan, PlanOptions};

use crate::cli::{GlobalArgs, OutputFormat, PlanArgs};
use crate::commands::common::{self, load_config, resolve_target};

/// Execute the plan command
pub(crate) async fn execute(args: &PlanArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let target = resolve_target(global);
    let configured = config
        .destructive_reset_for(target.as_deref())
        .context("Failed to resolve target")?;

    let plan = MigrationPlan::standard(PlanOptions {
        allow_destructive_reset: args.allow_destructive_reset || configured,
    });

    match args.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
            println!("{}", json);
        }
        OutputFormat::Text if args.names_only => {
            let rows: Vec<Vec<String>> = plan
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    vec![
                        (i + 1).to_string(),
                        step.name.to_string(),
                        step.kind.to_string(),
                        if step.destructive { "yes" } else { "no" }.to_string(),
                        step.name.description().to_string(),
                    ]
                })
                .collect();
            common::print_table(&["#", "STEP", "KIND", "DESTRUCTIVE", "DESCRIPTION"], &rows);
        }
        OutputFormat::Text => {
            let total = plan.len();
            for (i, step) in plan.steps().iter().enumerate() {
                println!(
                    "-- [{}/{}] {} ({}){}",
                    i + 1,
                    total,
                    step.name,
                    step.name.description(),
                    if step.destructive { " DESTRUCTIVE" } else { "" }
                );
                println!("{}", step.sql.trim_end());
                println!();
            }
        }
    }

    Ok(())
}
