//! Subcommand implementations.

mod run;
mod show_config;

pub use run::{RunArgs, run};
pub use show_config::{ShowConfigArgs, show_config};
