//! `WorkbenchBackend` - the workbench orchestration facade.
//!
//! The web handlers and the CLI delegate to this facade. It owns the single
//! shared [`Workbench`] and runs builds through the injected port.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::deps::GuiDeps;
use crate::error::GuiError;
use crate::types::{InputUpdate, WorkbenchOptions, WorkbenchSnapshot};
use crate::view::WorkbenchView;
use crate::workbench::Workbench;

/// Workbench backend facade.
///
/// One workbench, one build at a time. The lock is never held across the
/// port call, so views stay readable while a build runs.
pub struct WorkbenchBackend {
    deps: GuiDeps,
    state: Arc<Mutex<Workbench>>,
}

impl WorkbenchBackend {
    /// Create a new backend with a fresh workbench.
    pub fn new(deps: GuiDeps) -> Self {
        let workbench = Workbench::with_extra_flags(deps.default_extra_flags.clone());
        Self {
            deps,
            state: Arc::new(Mutex::new(workbench)),
        }
    }

    /// Selector values for architectures and kernels.
    pub fn options(&self) -> WorkbenchOptions {
        WorkbenchOptions::with_default_flags(self.deps.default_extra_flags.clone())
    }

    pub async fn snapshot(&self) -> WorkbenchSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn view(&self) -> WorkbenchView {
        self.state.lock().await.view()
    }

    /// Apply a partial input update. Rejected while a build is in flight.
    pub async fn update_inputs(&self, update: InputUpdate) -> Result<WorkbenchView, GuiError> {
        let mut workbench = self.state.lock().await;
        workbench.update_inputs(update)?;
        Ok(workbench.view())
    }

    /// Run one build from the current inputs, optionally updating them first.
    ///
    /// Returns [`GuiError::Conflict`] when a build is already in flight.
    /// The build runs on its own task, so dropping the returned future does
    /// not leave the workbench stuck in `Loading`.
    pub async fn build(&self, update: Option<InputUpdate>) -> Result<WorkbenchView, GuiError> {
        let request = {
            let mut workbench = self.state.lock().await;
            if let Some(update) = update {
                workbench.update_inputs(update)?;
            }
            workbench.begin_build()?
        };

        let service = Arc::clone(&self.deps.build_service);
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            let outcome = service.run(&request).await;
            let mut workbench = state.lock().await;
            workbench.finish_build(&outcome);
            workbench.view()
        });

        match task.await {
            Ok(view) => Ok(view),
            Err(err) => {
                tracing::error!(target: "autodriver.build", error = %err, "Build task aborted");
                let message = format!("Build task aborted: {err}");
                self.state.lock().await.abort_build(&message);
                Err(GuiError::Internal(message))
            }
        }
    }
}
