//! Core services that orchestrate domain operations through ports.

mod build_service;

pub use build_service::{BuildOutcome, BuildService};
