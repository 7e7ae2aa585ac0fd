//! Workbench state: the inputs, the status machine and the last result.
//!
//! `Workbench` is plain data with synchronous transitions. The async part
//! of a build (the port call) lives in [`crate::WorkbenchBackend`], which
//! calls [`Workbench::begin_build`] and [`Workbench::finish_build`] around it
//! without holding the lock in between.

use autodriver_core::{
    BuildOutcome, BuildRequest, BuildResult, DEFAULT_EXTRA_FLAGS, UiStatus,
};

use crate::error::GuiError;
use crate::types::{BuildSummary, InputUpdate, WorkbenchSnapshot};
use crate::view::WorkbenchView;

/// The editable inputs plus the state of the single build slot.
#[derive(Debug, Clone)]
pub struct Workbench {
    pub(crate) inputs: BuildRequest,
    pub(crate) status: UiStatus,
    pub(crate) result: Option<BuildResult>,
    pub(crate) last_build: Option<BuildSummary>,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl Workbench {
    /// Fresh workbench with the sample sources, default target and `Idle`.
    pub fn new() -> Self {
        Self::with_extra_flags(DEFAULT_EXTRA_FLAGS)
    }

    /// Fresh workbench with custom default flags.
    pub fn with_extra_flags(flags: impl Into<String>) -> Self {
        Self {
            inputs: BuildRequest::sample().with_extra_flags(flags),
            status: UiStatus::Idle,
            result: None,
            last_build: None,
        }
    }

    pub const fn status(&self) -> UiStatus {
        self.status
    }

    pub const fn inputs(&self) -> &BuildRequest {
        &self.inputs
    }

    pub const fn result(&self) -> Option<&BuildResult> {
        self.result.as_ref()
    }

    /// Apply a partial input update.
    ///
    /// Inputs are frozen while a build is in flight.
    pub fn update_inputs(&mut self, update: InputUpdate) -> Result<(), GuiError> {
        if self.status.is_loading() {
            return Err(GuiError::Conflict(
                "inputs cannot change while a build is in progress".to_string(),
            ));
        }
        update.apply_to(&mut self.inputs);
        Ok(())
    }

    /// Enter `Loading`, clear the previous result and return the request to run.
    pub fn begin_build(&mut self) -> Result<BuildRequest, GuiError> {
        self.status = self.status.begin_build()?;
        self.result = None;
        Ok(self.inputs.clone())
    }

    /// Store a finished build and mirror its status.
    pub fn finish_build(&mut self, outcome: &BuildOutcome) {
        self.status = match self.status.complete(outcome.result.status) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    target: "autodriver.build",
                    build_id = %outcome.build_id,
                    error = %err,
                    "Build finished outside of Loading"
                );
                UiStatus::from(outcome.result.status)
            }
        };
        self.last_build = Some(BuildSummary::from(outcome));
        self.result = Some(outcome.result.clone());
    }

    /// Leave `Loading` when the build task itself died.
    pub fn abort_build(&mut self, message: &str) {
        if self.status.is_loading() {
            self.status = UiStatus::Failed;
            self.result = Some(BuildResult::failure(message));
        }
    }

    pub fn snapshot(&self) -> WorkbenchSnapshot {
        WorkbenchSnapshot {
            inputs: self.inputs.clone(),
            status: self.status,
            result: self.result.clone(),
            last_build: self.last_build.clone(),
        }
    }

    pub fn view(&self) -> WorkbenchView {
        WorkbenchView::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodriver_core::{BuildStatus, KernelVersion, TargetArch};
    use std::time::Duration;
    use uuid::Uuid;

    fn outcome(result: BuildResult) -> BuildOutcome {
        BuildOutcome {
            build_id: Uuid::new_v4(),
            result,
            elapsed: Duration::from_millis(1200),
        }
    }

    fn success() -> BuildResult {
        BuildResult {
            status: BuildStatus::Success,
            makefile: "obj-m += my_driver.o\n".to_string(),
            simulated_output: "make -C /lib/modules/6.6/build M=$(PWD) modules".to_string(),
            issues: vec![],
            optimized_source: None,
        }
    }

    #[test]
    fn test_new_uses_samples() {
        let workbench = Workbench::new();
        assert_eq!(workbench.status(), UiStatus::Idle);
        assert_eq!(workbench.inputs().arch, TargetArch::X86_64);
        assert_eq!(workbench.inputs().kernel, KernelVersion::V6_6);
        assert_eq!(workbench.inputs().extra_flags, "-Wall -Werror");
        assert!(workbench.result().is_none());
    }

    #[test]
    fn test_build_cycle_mirrors_status() {
        let mut workbench = Workbench::new();
        let request = workbench.begin_build().unwrap();
        assert_eq!(request, BuildRequest::sample());
        assert_eq!(workbench.status(), UiStatus::Loading);

        workbench.finish_build(&outcome(success()));
        assert_eq!(workbench.status(), UiStatus::Success);
        assert_eq!(workbench.snapshot().last_build.unwrap().elapsed_ms, 1200);
    }

    #[test]
    fn test_begin_build_clears_previous_result() {
        let mut workbench = Workbench::new();
        workbench.begin_build().unwrap();
        workbench.finish_build(&outcome(BuildResult::failure("boom")));
        assert_eq!(workbench.status(), UiStatus::Failed);

        workbench.begin_build().unwrap();
        assert!(workbench.result().is_none());
        assert_eq!(workbench.status(), UiStatus::Loading);
    }

    #[test]
    fn test_second_begin_is_conflict() {
        let mut workbench = Workbench::new();
        workbench.begin_build().unwrap();
        assert!(matches!(workbench.begin_build(), Err(GuiError::Conflict(_))));
    }

    #[test]
    fn test_inputs_frozen_while_loading() {
        let mut workbench = Workbench::new();
        workbench.begin_build().unwrap();

        let update = InputUpdate {
            arch: Some(TargetArch::Arm64),
            ..Default::default()
        };
        assert!(matches!(
            workbench.update_inputs(update),
            Err(GuiError::Conflict(_))
        ));
        assert_eq!(workbench.inputs().arch, TargetArch::X86_64);
    }

    #[test]
    fn test_abort_build_only_from_loading() {
        let mut workbench = Workbench::new();
        workbench.abort_build("ignored");
        assert_eq!(workbench.status(), UiStatus::Idle);

        workbench.begin_build().unwrap();
        workbench.abort_build("task panicked");
        assert_eq!(workbench.status(), UiStatus::Failed);
        assert!(
            workbench
                .result()
                .unwrap()
                .simulated_output
                .contains("task panicked")
        );
    }
}
