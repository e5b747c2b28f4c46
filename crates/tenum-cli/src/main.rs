//! # tenum CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tenum_cli::classify::{run_classify, ClassifyArgs};
use tenum_cli::list::{run_list, ListArgs};
use tenum_cli::lookup::{run_lookup, LookupArgs};
use tenum_cli::stats::{run_stats, StatsArgs};

/// Explore typed-constant enumerations and case-table dispatch.
#[derive(Parser, Debug)]
#[command(name = "tenum", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// `RUST_LOG`, when set, takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every instance of an enumeration.
    List(ListArgs),

    /// Find an instance by id, value, or value list.
    Lookup(LookupArgs),

    /// Dispatch a value through a case table built from the catalogue.
    Classify(ClassifyArgs),

    /// Report which enumerations the registry has built.
    Stats(StatsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    ExitCode::from(exit_status(run(&cli.command)))
}

fn run(command: &Commands) -> anyhow::Result<u8> {
    match command {
        Commands::List(args) => run_list(args),
        Commands::Lookup(args) => run_lookup(args),
        Commands::Classify(args) => run_classify(args),
        Commands::Stats(args) => run_stats(args),
    }
}

/// Handler status as a process exit code: the handler's own code on
/// success, 2 on error.
fn exit_status(result: anyhow::Result<u8>) -> u8 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            2
        }
    }
}
