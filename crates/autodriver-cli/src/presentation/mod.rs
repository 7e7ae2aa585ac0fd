//! Shared CLI presentation utilities.
//!
//! Format-only: panel visibility and colour choice come from the
//! workbench view model.

pub mod tables;
pub mod terminal;

pub use tables::{issue_table, print_separator};
pub use terminal::{build_spinner, render_view, styled};
