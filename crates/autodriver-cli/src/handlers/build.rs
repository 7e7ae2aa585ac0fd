//! Build command handler.
//!
//! Runs one build through the workbench backend and renders the same panels
//! the web page shows, or a JSON document with `--json`.

use std::path::Path;

use anyhow::Result;
use autodriver_core::{BuildResult, UiStatus};
use autodriver_gui::{WorkbenchSnapshot, WorkbenchView};
use serde_json::{Value, json};

use crate::bootstrap::CliContext;
use crate::commands::BuildArgs;
use crate::error::CliError;
use crate::handlers::input::to_update;
use crate::presentation::{build_spinner, render_view};

/// Execute the build command.
///
/// # Errors
///
/// Returns [`CliError::BuildFailed`] when the build completes with a
/// `failed` status, after the result has been printed and any requested
/// files written.
pub async fn execute(ctx: &CliContext, args: &BuildArgs) -> Result<()> {
    let update = to_update(&args.input)?;
    let update = (!update.is_empty()).then_some(update);

    let spinner = (!args.json).then(|| build_spinner("Compiling..."));
    let outcome = ctx.backend.build(update).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let view = outcome.map_err(CliError::from)?;
    let snapshot = ctx.backend.snapshot().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json_report(&snapshot))?);
    } else {
        println!("{}", render_view(&view));
    }

    if let Some(result) = &snapshot.result {
        write_outputs(result, args)?;
    }

    finish(&view)
}

/// JSON document printed by `--json`.
pub fn json_report(snapshot: &WorkbenchSnapshot) -> Value {
    json!({
        "status": snapshot.status,
        "result": snapshot.result,
        "lastBuild": snapshot.last_build,
    })
}

/// Write the Makefile and corrected source where the user asked for them.
pub fn write_outputs(result: &BuildResult, args: &BuildArgs) -> Result<(), CliError> {
    if let Some(path) = &args.makefile_out {
        if result.makefile.is_empty() {
            tracing::warn!("No Makefile was generated; not writing {}", path.display());
        } else {
            write_file(path, &result.makefile)?;
        }
    }

    if let Some(path) = &args.fixed_out {
        match result.optimized_source.as_deref() {
            Some(source) => write_file(path, source)?,
            None => tracing::warn!("No fixes were proposed; not writing {}", path.display()),
        }
    }

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    std::fs::write(path, contents).map_err(|e| CliError::io(path, &e))?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

fn finish(view: &WorkbenchView) -> Result<()> {
    match view.status {
        UiStatus::Success => Ok(()),
        _ => Err(CliError::BuildFailed.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use autodriver_core::{
        AnalysisIssue, BuildPortError, BuildPortResult, BuildRequest, BuildStatus,
        DriverBuildPort, Settings, Severity, TargetArch,
    };
    use autodriver_gui::{GuiDeps, WorkbenchBackend};

    use crate::commands::InputArgs;

    struct CannedPort(Option<BuildResult>);

    #[async_trait]
    impl DriverBuildPort for CannedPort {
        async fn generate(&self, _request: &BuildRequest) -> BuildPortResult<BuildResult> {
            self.0.clone().ok_or(BuildPortError::MissingApiKey)
        }
    }

    fn context(reply: Option<BuildResult>) -> CliContext {
        let deps = GuiDeps::new(Arc::new(CannedPort(reply)), &Settings::with_defaults());
        CliContext {
            backend: Arc::new(WorkbenchBackend::new(deps)),
        }
    }

    fn success() -> BuildResult {
        BuildResult {
            status: BuildStatus::Success,
            makefile: "obj-m += drv.o\n".to_string(),
            simulated_output: "CC [M] drv.o".to_string(),
            issues: vec![AnalysisIssue {
                severity: Severity::Info,
                line: 3,
                message: "unused include".to_string(),
                suggestion: "drop it".to_string(),
            }],
            optimized_source: Some("// fixed\n".to_string()),
        }
    }

    #[tokio::test]
    async fn test_success_writes_requested_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = BuildArgs {
            input: InputArgs {
                arch: Some("arm64".to_string()),
                ..Default::default()
            },
            makefile_out: Some(dir.path().join("Makefile")),
            fixed_out: Some(dir.path().join("fixed.c")),
            json: true,
        };
        let ctx = context(Some(success()));

        execute(&ctx, &args).await.unwrap();

        let makefile = std::fs::read_to_string(dir.path().join("Makefile")).unwrap();
        assert_eq!(makefile, "obj-m += drv.o\n");
        let fixed = std::fs::read_to_string(dir.path().join("fixed.c")).unwrap();
        assert_eq!(fixed, "// fixed\n");
        assert_eq!(ctx.backend.snapshot().await.inputs.arch, TargetArch::Arm64);
    }

    #[tokio::test]
    async fn test_missing_key_is_build_failure() {
        let ctx = context(None);
        let args = BuildArgs {
            json: true,
            ..Default::default()
        };

        let err = execute(&ctx, &args).await.unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::BuildFailed));

        let snapshot = ctx.backend.snapshot().await;
        let result = snapshot.result.unwrap();
        assert_eq!(result.status, BuildStatus::Failed);
        assert!(result.simulated_output.contains("API_KEY"));
    }

    #[tokio::test]
    async fn test_bad_input_fails_before_build() {
        let ctx = context(Some(success()));
        let args = BuildArgs {
            input: InputArgs {
                kernel: Some("4.19".to_string()),
                ..Default::default()
            },
            json: true,
            ..Default::default()
        };

        let err = execute(&ctx, &args).await.unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 2);
        assert!(ctx.backend.snapshot().await.result.is_none());
    }

    #[test]
    fn test_outputs_skipped_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let result = BuildResult {
            makefile: String::new(),
            optimized_source: None,
            ..success()
        };
        let args = BuildArgs {
            makefile_out: Some(dir.path().join("Makefile")),
            fixed_out: Some(dir.path().join("fixed.c")),
            ..Default::default()
        };

        write_outputs(&result, &args).unwrap();
        assert!(!dir.path().join("Makefile").exists());
        assert!(!dir.path().join("fixed.c").exists());
    }

    #[test]
    fn test_json_report_shape() {
        let snapshot = WorkbenchSnapshot {
            inputs: BuildRequest::sample(),
            status: UiStatus::Success,
            result: Some(success()),
            last_build: None,
        };
        let report = json_report(&snapshot);

        assert_eq!(report["status"], "success");
        assert_eq!(report["result"]["issues"][0]["severity"], "info");
        assert!(report["lastBuild"].is_null());
    }
}
