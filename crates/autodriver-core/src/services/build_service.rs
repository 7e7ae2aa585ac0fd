//! Build service - the single atomic build operation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{BuildRequest, BuildResult, Severity};
use crate::ports::DriverBuildPort;

/// What one build produced.
#[derive(Debug, Clone, Serialize)]
pub struct BuildOutcome {
    /// Correlates log lines for this build.
    pub build_id: Uuid,
    pub result: BuildResult,
    pub elapsed: Duration,
}

/// Service for running builds against a [`DriverBuildPort`].
///
/// From the caller's perspective a build is all-or-nothing: every port error
/// becomes a failed [`BuildResult`] carrying the diagnostic.
pub struct BuildService {
    port: Arc<dyn DriverBuildPort>,
}

impl BuildService {
    /// Create a new build service.
    pub fn new(port: Arc<dyn DriverBuildPort>) -> Self {
        Self { port }
    }

    /// Run one build. Never fails; errors are folded into the result.
    pub async fn run(&self, request: &BuildRequest) -> BuildOutcome {
        let build_id = Uuid::new_v4();
        let started = Instant::now();

        tracing::info!(
            target: "autodriver.build",
            %build_id,
            arch = %request.arch,
            kernel = %request.kernel,
            sdk_bytes = request.sdk_header.len(),
            driver_bytes = request.driver_source.len(),
            "Starting driver build"
        );

        let result = match self.port.generate(request).await {
            Ok(result) => {
                tracing::info!(
                    target: "autodriver.build",
                    %build_id,
                    status = %result.status,
                    errors = result.count_by_severity(Severity::Error),
                    warnings = result.count_by_severity(Severity::Warning),
                    has_fix = result.optimized_source.is_some(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "Driver build completed"
                );
                result
            }
            Err(err) => {
                tracing::warn!(
                    target: "autodriver.build",
                    %build_id,
                    error = %err,
                    elapsed_ms = started.elapsed().as_millis(),
                    "Driver build failed"
                );
                BuildResult::failure(err.user_message())
            }
        };

        BuildOutcome {
            build_id,
            result,
            elapsed: started.elapsed(),
        }
    }
}
