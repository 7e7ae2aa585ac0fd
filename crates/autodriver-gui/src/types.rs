//! Workbench DTOs shared by the adapters.

use autodriver_core::{
    BuildOutcome, BuildRequest, BuildResult, DEFAULT_EXTRA_FLAGS, KernelVersion, TargetArch,
    UiStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Input Types
// ============================================================================

/// Partial update of the workbench inputs.
///
/// Absent fields leave the current value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputUpdate {
    pub sdk_header: Option<String>,
    pub driver_source: Option<String>,
    pub arch: Option<TargetArch>,
    pub kernel: Option<KernelVersion>,
    pub extra_flags: Option<String>,
}

impl InputUpdate {
    /// True when the update would change nothing.
    pub const fn is_empty(&self) -> bool {
        self.sdk_header.is_none()
            && self.driver_source.is_none()
            && self.arch.is_none()
            && self.kernel.is_none()
            && self.extra_flags.is_none()
    }

    /// Apply onto a request in place.
    pub fn apply_to(self, request: &mut BuildRequest) {
        if let Some(sdk_header) = self.sdk_header {
            request.sdk_header = sdk_header;
        }
        if let Some(driver_source) = self.driver_source {
            request.driver_source = driver_source;
        }
        if let Some(arch) = self.arch {
            request.arch = arch;
        }
        if let Some(kernel) = self.kernel {
            request.kernel = kernel;
        }
        if let Some(extra_flags) = self.extra_flags {
            request.extra_flags = extra_flags;
        }
    }
}

// ============================================================================
// Selector Options
// ============================================================================

/// One selectable value with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// Values offered by the architecture and kernel selectors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchOptions {
    pub architectures: Vec<OptionEntry>,
    pub kernels: Vec<OptionEntry>,
    pub default_arch: TargetArch,
    pub default_kernel: KernelVersion,
    pub default_extra_flags: String,
}

impl WorkbenchOptions {
    /// Options with the given default flags.
    pub fn with_default_flags(flags: impl Into<String>) -> Self {
        Self {
            architectures: TargetArch::ALL
                .iter()
                .map(|arch| OptionEntry {
                    value: arch.as_str().to_string(),
                    label: arch.as_str().to_string(),
                })
                .collect(),
            kernels: KernelVersion::ALL
                .iter()
                .map(|kernel| OptionEntry {
                    value: kernel.as_str().to_string(),
                    label: kernel.label(),
                })
                .collect(),
            default_arch: TargetArch::default(),
            default_kernel: KernelVersion::default(),
            default_extra_flags: flags.into(),
        }
    }
}

impl Default for WorkbenchOptions {
    fn default() -> Self {
        Self::with_default_flags(DEFAULT_EXTRA_FLAGS)
    }
}

// ============================================================================
// State Snapshots
// ============================================================================

/// Bookkeeping for the most recent completed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub build_id: Uuid,
    pub finished_at: DateTime<Utc>,
    pub elapsed_ms: u64,
}

impl From<&BuildOutcome> for BuildSummary {
    fn from(outcome: &BuildOutcome) -> Self {
        Self {
            build_id: outcome.build_id,
            finished_at: Utc::now(),
            elapsed_ms: u64::try_from(outcome.elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Raw workbench state, as opposed to the rendered [`crate::WorkbenchView`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchSnapshot {
    pub inputs: BuildRequest,
    pub status: UiStatus,
    pub result: Option<BuildResult>,
    pub last_build: Option<BuildSummary>,
}
