//! complyseed CLI - create, seed, and verify the compliance tracking schema

use clap::Parser;
use std::process;

mod cli;
mod commands;

use cli::Cli;
use commands::{common, plan, run, verify};

#[tokio::main]
async fn main() -> process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match &cli.command {
        cli::Commands::Run(args) => run::execute(args, &cli.global).await,
        cli::Commands::Plan(args) => plan::execute(args, &cli.global).await,
        cli::Commands::Verify(args) => verify::execute(args, &cli.global).await,
    };

    match result {
        Ok(()) => process::ExitCode::SUCCESS,
        Err(err) => {
            let code = common::exit_code_for(&err);
            if err.downcast_ref::<common::ExitCode>().is_none() {
                eprintln!("Error: {:#}", err);
            }
            process::ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Default filter is `warn`, `info` with `--verbose`; `RUST_LOG` wins.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
