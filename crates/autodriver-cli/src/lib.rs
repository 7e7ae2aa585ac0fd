//! Command-line interface for the autodriver workbench.
//!
//! `autodriver build` runs one build in the terminal, `autodriver web`
//! serves the browser workbench. The remaining commands inspect the request
//! contract without touching the network.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by main.rs binary
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{BuildArgs, Commands, InputArgs};
pub use error::CliError;
pub use parser::Cli;
