//! Dependency injection for `WorkbenchBackend`.

use std::sync::Arc;

use autodriver_core::{BuildService, DriverBuildPort, Settings};

/// Dependencies required to construct a `WorkbenchBackend`.
///
/// Fields are private to enforce construction via `GuiDeps::new()`.
pub struct GuiDeps {
    /// Runs builds against the injected port.
    pub(crate) build_service: Arc<BuildService>,
    /// Flags pre-filled into a fresh workbench.
    pub(crate) default_extra_flags: String,
}

impl GuiDeps {
    /// Create a new `GuiDeps` from a build port and the loaded settings.
    pub fn new(port: Arc<dyn DriverBuildPort>, settings: &Settings) -> Self {
        Self {
            build_service: Arc::new(BuildService::new(port)),
            default_extra_flags: settings.effective_extra_flags().to_string(),
        }
    }
}
