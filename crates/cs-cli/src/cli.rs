//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// complyseed - Create, seed, and verify the compliance tracking schema
#[derive(Parser, Debug)]
#[command(name = "complyseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override config file path (default: ./complyseed.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override target (deployment environment; falls back to COMPLYSEED_TARGET)
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the schema, seed, and verification steps against the remote database
    Run(RunArgs),

    /// Print the ordered steps and their SQL without contacting the database
    Plan(PlanArgs),

    /// Run only the verification query and print row counts
    Verify(VerifyArgs),
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Drop and recreate the companies table before creating it
    #[arg(long)]
    pub allow_destructive_reset: bool,

    /// Skip remaining steps after the first failure
    #[arg(long)]
    pub fail_fast: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Show the plan with the destructive reset enabled
    #[arg(long)]
    pub allow_destructive_reset: bool,

    /// Print step names only, without SQL
    #[arg(long)]
    pub names_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable progress and tables
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
