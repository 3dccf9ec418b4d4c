//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use cs_core::{Config, CoreError, Settings};
use cs_db::{Database, DbError, RpcBackend};
use cs_migrate::{RunReport, StepEvent, StepStatus, VerificationSummary};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main.rs maps it to the process status.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Exit status when verification did not produce rows
pub(crate) const EXIT_UNVERIFIED: i32 = 1;

/// Exit status for configuration and credential errors
pub(crate) const EXIT_CONFIG: i32 = 2;

/// Load the config file named by `--config`, or discover one in the
/// current directory.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let explicit = global.config.as_deref().map(Path::new);
    Config::discover(explicit, Path::new(".")).context("Failed to load configuration")
}

/// Target selected by `--target` or the environment
pub(crate) fn resolve_target(global: &GlobalArgs) -> Option<String> {
    Config::resolve_target(global.target.as_deref())
}

/// Load configuration and resolve endpoint and credentials for the target
pub(crate) fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let config = load_config(global)?;
    let target = resolve_target(global);
    let settings = config
        .resolve(target.as_deref())
        .context("Failed to resolve remote settings")?;

    log::info!(
        "Using {}{}",
        settings.endpoint.rpc_url(),
        settings
            .target
            .as_deref()
            .map(|t| format!(" (target: {})", t))
            .unwrap_or_default()
    );
    Ok(settings)
}

/// Create the remote SQL executor for the resolved settings
pub(crate) fn create_database_connection(settings: &Settings) -> Result<Arc<dyn Database>> {
    let backend =
        RpcBackend::from_settings(settings).context("Failed to create remote SQL client")?;
    Ok(Arc::new(backend))
}

/// Print one progress line for a sequencer event
pub(crate) fn print_step_event(event: StepEvent<'_>) {
    match event {
        StepEvent::Started { index, total, step } => {
            println!(
                "[{}/{}] {} ... {}",
                index,
                total,
                step.name,
                step.name.description()
            );
        }
        StepEvent::Finished { outcome, .. } => match outcome.status {
            StepStatus::Success => {
                let rows = outcome.rows.as_ref().map(|r| r.len()).unwrap_or(0);
                println!(
                    "  \u{2713} {} ({} rows) [{}ms]",
                    outcome.step, rows, outcome.duration_ms
                );
            }
            StepStatus::Failed => {
                println!(
                    "  \u{2717} {} - {} [{}ms]",
                    outcome.step,
                    outcome.error.as_deref().unwrap_or("unknown error"),
                    outcome.duration_ms
                );
            }
            StepStatus::Skipped => {
                println!("  - {} (skipped)", outcome.step);
            }
        },
    }
}

/// Print the verification table and the completion line
pub(crate) fn print_report_summary(report: &RunReport) {
    match report.summary() {
        Ok(summary) => {
            println!();
            print_verification_table(&summary);
        }
        Err(e) => {
            println!();
            println!("{}", e);
        }
    }

    let failed = report.failed_steps().len();
    let succeeded = report.steps.iter().filter(|o| o.is_success()).count();
    let skipped = report.steps.len() - failed - succeeded;
    println!();
    if skipped > 0 {
        println!(
            "Completed: {} succeeded, {} failed, {} skipped",
            succeeded, failed, skipped
        );
    } else {
        println!("Completed: {} succeeded, {} failed", succeeded, failed);
    }
}

fn print_verification_table(summary: &VerificationSummary) {
    let rows: Vec<Vec<String>> = summary
        .tables
        .iter()
        .map(|t| {
            vec![
                t.table_name.clone(),
                t.total_records.to_string(),
                t.with_commercial_date.to_string(),
                t.with_insurance_date.to_string(),
            ]
        })
        .collect();
    print_table(
        &["TABLE", "TOTAL", "COMMERCIAL DATE", "INSURANCE DATE"],
        &rows,
    );
}

/// Print the run report as pretty JSON
pub(crate) fn print_report_json(report: &RunReport) -> Result<()> {
    let summary = report.summary().ok();
    let json = serde_json::json!({
        "success": report.is_success(),
        "report": report,
        "verification": summary,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&json).context("Failed to serialize run report")?
    );
    Ok(())
}

/// Map the overall result to the process exit status
pub(crate) fn finish(report: &RunReport) -> Result<()> {
    if report.is_success() {
        Ok(())
    } else {
        Err(ExitCode(EXIT_UNVERIFIED).into())
    }
}

/// Process exit status for an error returned by a command.
///
/// Configuration problems (file, target, URL, credentials, client setup)
/// exit with [`EXIT_CONFIG`]; anything else with 1.
pub(crate) fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(code) = err.downcast_ref::<ExitCode>() {
        return code.0;
    }
    let is_config = err.chain().any(|cause| {
        cause.downcast_ref::<CoreError>().is_some()
            || matches!(cause.downcast_ref::<DbError>(), Some(DbError::Config(_)))
    });
    if is_config {
        EXIT_CONFIG
    } else {
        1
    }
}

// ---------------------------------------------------------------------------
// Table-printing utilities
// ---------------------------------------------------------------------------

/// Calculate column widths for a table given headers and row data.
///
/// Widths are counted in characters so Arabic names align.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

/// Print a formatted table to stdout: header, dashes, rows, two-space gaps.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  ").trim_end());

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  ").trim_end());
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
