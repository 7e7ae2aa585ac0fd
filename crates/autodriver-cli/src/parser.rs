//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Compile, analyze and fix Linux kernel drivers with a generative model.
#[derive(Parser)]
#[command(name = "autodriver")]
#[command(about = "Automated kernel driver compilation and static analysis")]
#[command(version)]
pub struct Cli {
    /// Model identifier to use for this invocation
    #[arg(long, global = true, env = "AUTODRIVER_MODEL")]
    pub model: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
