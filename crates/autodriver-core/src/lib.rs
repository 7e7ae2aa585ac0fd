//! Core domain types and port definitions for autodriver.
//!
//! This crate owns everything that does not depend on a transport or a UI:
//!
//! - `domain` - build request/result shapes, target enumerations, the UI status machine
//! - `prompt` / `schema` - the request contract sent to the model
//! - `parsing` - turning the model's reply back into a [`BuildResult`]
//! - `ports` - the [`DriverBuildPort`] trait adapters implement
//! - `services` - [`BuildService`], the single atomic build operation
//! - `settings` - configuration shared by the binaries

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod parsing;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    AnalysisIssue, BuildRequest, BuildResult, BuildStatus, DEFAULT_DRIVER_SOURCE,
    DEFAULT_EXTRA_FLAGS, DEFAULT_SDK_HEADER, KernelVersion, Severity, TargetArch, TransitionError,
    UiStatus,
};
pub use parsing::{ParseError, parse_build_result, strip_code_fences};
pub use ports::{BuildPortError, BuildPortResult, CoreError, DriverBuildPort};
pub use prompt::build_prompt;
pub use schema::response_schema;
pub use services::{BuildOutcome, BuildService};
pub use settings::{
    DEFAULT_MODEL, DEFAULT_THINKING_BUDGET, DEFAULT_WEB_PORT, Settings, SettingsError,
    SettingsUpdate, api_key_from_env, api_key_from_lookup, validate_settings,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
