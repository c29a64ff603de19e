//! segdep command-line entry point

use clap::Parser;
use segdep_cli::commands::Commands;
use segdep_cli::CliResult;

/// Segmentation-aware evaluation of dependency parses
#[derive(Debug, Parser)]
#[command(name = "segdep", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    Cli::parse().command.execute()
}
