//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{RunArgs, ShowConfigArgs};

/// Fetch trending video metadata and publish it to Pub/Sub.
#[derive(Parser, Debug)]
#[command(name = "trendcast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one fetch-and-publish invocation
    Run(RunArgs),

    /// Display the resolved configuration
    ShowConfig(ShowConfigArgs),
}
