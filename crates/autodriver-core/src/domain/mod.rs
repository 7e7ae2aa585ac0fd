//! Core domain types.
//!
//! These types are pure data-transfer shapes, independent of any
//! transport or UI concerns.
//!
//! # Structure
//!
//! - `target` - Target architecture and kernel version enumerations
//! - `build` - Build request, analysis issue and build result types
//! - `status` - The four-state UI status machine
//! - `samples` - Built-in sample inputs shown on first load

mod build;
mod samples;
mod status;
mod target;

pub use build::{AnalysisIssue, BuildRequest, BuildResult, BuildStatus, Severity};
pub use samples::{DEFAULT_DRIVER_SOURCE, DEFAULT_EXTRA_FLAGS, DEFAULT_SDK_HEADER};
pub use status::{TransitionError, UiStatus};
pub use target::{KernelVersion, TargetArch};
