//! The workbench status machine.
//!
//! ```text
//!   Idle ──┐
//! Success ─┼── begin_build ──► Loading ── complete(Success) ──► Success
//!  Failed ─┘                           └─ complete(Failed)  ──► Failed
//! ```
//!
//! There is no timeout and no cancellation: a `Loading` state only leaves
//! through [`UiStatus::complete`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::build::BuildStatus;

/// Status of the workbench around the single in-flight build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// An illegal status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a build is already in progress")]
    AlreadyLoading,

    #[error("no build in progress (status is {0})")]
    NotLoading(UiStatus),
}

impl UiStatus {
    /// Enter `Loading` on a user-initiated build.
    pub const fn begin_build(self) -> Result<Self, TransitionError> {
        match self {
            Self::Loading => Err(TransitionError::AlreadyLoading),
            Self::Idle | Self::Success | Self::Failed => Ok(Self::Loading),
        }
    }

    /// Leave `Loading` with the status the build resolved to.
    pub const fn complete(self, outcome: BuildStatus) -> Result<Self, TransitionError> {
        match self {
            Self::Loading => Ok(Self::from_build_status(outcome)),
            other => Err(TransitionError::NotLoading(other)),
        }
    }

    const fn from_build_status(status: BuildStatus) -> Self {
        match status {
            BuildStatus::Success => Self::Success,
            BuildStatus::Failed => Self::Failed,
        }
    }

    /// Whether the build trigger accepts input.
    #[must_use]
    pub const fn is_trigger_enabled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Text on the build trigger.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        match self {
            Self::Loading => "Compiling...",
            _ => "Build Driver",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

impl From<BuildStatus> for UiStatus {
    fn from(status: BuildStatus) -> Self {
        Self::from_build_status(status)
    }
}

impl std::fmt::Display for UiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
