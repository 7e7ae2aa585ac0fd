//! Build request and result types.
//!
//! These shapes double as the JSON contract with the model: field names are
//! camelCase on the wire, matching the response schema in [`crate::schema`].

use serde::{Deserialize, Serialize};

use super::samples::{DEFAULT_DRIVER_SOURCE, DEFAULT_EXTRA_FLAGS, DEFAULT_SDK_HEADER};
use super::target::{KernelVersion, TargetArch};

/// Prefix of the simulated output shown when a build could not be performed.
const FAILURE_BANNER: &str = "FATAL ERROR: Connection to AI Build System failed.";

/// Everything the user supplies for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub sdk_header: String,
    pub driver_source: String,
    pub arch: TargetArch,
    pub kernel: KernelVersion,
    pub extra_flags: String,
}

impl BuildRequest {
    /// Create a request for the given sources using default target selections.
    pub fn new(sdk_header: impl Into<String>, driver_source: impl Into<String>) -> Self {
        Self {
            sdk_header: sdk_header.into(),
            driver_source: driver_source.into(),
            arch: TargetArch::default(),
            kernel: KernelVersion::default(),
            extra_flags: DEFAULT_EXTRA_FLAGS.to_string(),
        }
    }

    /// Request built from the sample SDK header and driver.
    pub fn sample() -> Self {
        Self::new(DEFAULT_SDK_HEADER, DEFAULT_DRIVER_SOURCE)
    }

    #[must_use]
    pub const fn with_arch(mut self, arch: TargetArch) -> Self {
        self.arch = arch;
        self
    }

    #[must_use]
    pub const fn with_kernel(mut self, kernel: KernelVersion) -> Self {
        self.kernel = kernel;
        self
    }

    #[must_use]
    pub fn with_extra_flags(mut self, flags: impl Into<String>) -> Self {
        self.extra_flags = flags.into();
        self
    }
}

/// Severity of a static-analysis finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single static-analysis finding reported by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisIssue {
    pub severity: Severity,
    /// Line in the driver source the finding refers to. Zero or negative
    /// values mark findings that are not tied to a line.
    pub line: i64,
    pub message: String,
    pub suggestion: String,
}

/// Overall outcome reported for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Success,
    Failed,
}

impl BuildStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured reply for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResult {
    pub status: BuildStatus,
    /// Generated Makefile contents.
    pub makefile: String,
    /// Model-generated imitation of the compiler/linker transcript.
    pub simulated_output: String,
    pub issues: Vec<AnalysisIssue>,
    /// Corrected driver source, present only when the model proposed fixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimized_source: Option<String>,
}

impl BuildResult {
    /// The result reported when the build could not be performed at all.
    ///
    /// The diagnostic is embedded in the simulated output so it lands in the
    /// terminal panel.
    pub fn failure(message: impl AsRef<str>) -> Self {
        Self {
            status: BuildStatus::Failed,
            makefile: String::new(),
            simulated_output: format!("{FAILURE_BANNER}\n{}", message.as_ref()),
            issues: Vec::new(),
            optimized_source: None,
        }
    }

    /// Number of issues with the given severity.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = BuildRequest::new("hdr", "src")
            .with_arch(TargetArch::Arm64)
            .with_kernel(KernelVersion::V6_1);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["sdkHeader"], "hdr");
        assert_eq!(json["driverSource"], "src");
        assert_eq!(json["arch"], "arm64");
        assert_eq!(json["kernel"], "6.1 LTS");
        assert_eq!(json["extraFlags"], "-Wall -Werror");
    }

    #[test]
    fn test_sample_request_uses_defaults() {
        let request = BuildRequest::sample();
        assert_eq!(request.arch, TargetArch::X86_64);
        assert_eq!(request.kernel, KernelVersion::V6_6);
        assert!(request.sdk_header.contains("sdk_device_t"));
        assert!(request.driver_source.contains("module_init"));
    }

    #[test]
    fn test_failure_result_shape() {
        let result = BuildResult::failure("API_KEY not found in environment variables");

        assert_eq!(result.status, BuildStatus::Failed);
        assert!(result.makefile.is_empty());
        assert!(result.issues.is_empty());
        assert!(result.optimized_source.is_none());
        assert!(
            result
                .simulated_output
                .starts_with("FATAL ERROR: Connection to AI Build System failed.\n")
        );
        assert!(result.simulated_output.ends_with("API_KEY not found in environment variables"));
    }

    #[test]
    fn test_optimized_source_omitted_when_absent() {
        let json = serde_json::to_value(BuildResult::failure("x")).unwrap();
        assert!(json.get("optimizedSource").is_none());
        assert_eq!(json["simulatedOutput"].as_str().unwrap().lines().count(), 2);
    }

    #[test]
    fn test_count_by_severity() {
        let result = BuildResult {
            status: BuildStatus::Failed,
            makefile: String::new(),
            simulated_output: String::new(),
            issues: vec![
                AnalysisIssue {
                    severity: Severity::Error,
                    line: 3,
                    message: "a".into(),
                    suggestion: "b".into(),
                },
                AnalysisIssue {
                    severity: Severity::Warning,
                    line: 9,
                    message: "c".into(),
                    suggestion: "d".into(),
                },
            ],
            optimized_source: None,
        };
        assert_eq!(result.count_by_severity(Severity::Error), 1);
        assert_eq!(result.count_by_severity(Severity::Warning), 1);
        assert_eq!(result.count_by_severity(Severity::Info), 0);
    }
}
