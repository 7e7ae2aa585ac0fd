//! Command handlers that delegate to the workbench backend.
//!
//! Handlers are thin: turn CLI input into workbench types, call the
//! backend or core, and format the result for the terminal.

pub mod build;
pub mod input;
pub mod options;
pub mod prompt;
pub mod schema;
pub mod web;
