//! HTTP handlers.

pub mod page;
pub mod workbench;
