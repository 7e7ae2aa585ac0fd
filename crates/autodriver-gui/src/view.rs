//! Presentation models for the workbench.
//!
//! Both the web page and the CLI render from a [`WorkbenchView`], so panel
//! visibility and colouring are decided once, here.

use autodriver_core::{AnalysisIssue, KernelVersion, Severity, TargetArch, UiStatus};
use serde::Serialize;

use crate::workbench::Workbench;

pub const SDK_HEADER_LABEL: &str = "SDK Header / Definitions";
pub const DRIVER_SOURCE_LABEL: &str = "Driver Source (.c)";
pub const MAKEFILE_LABEL: &str = "Generated Makefile";
pub const OPTIMIZED_SOURCE_LABEL: &str = "AI Refactored Source (Fixes Applied)";
pub const TERMINAL_TITLE: &str = "Build Log / Terminal";
pub const ANALYSIS_TITLE: &str = "Static Analysis Report";

const SDK_HEADER_PLACEHOLDER: &str = "// Paste SDK .h content here...";
const DRIVER_SOURCE_PLACEHOLDER: &str = "// Paste driver .c content here...";
const IDLE_OUTPUT: &str = "Waiting for input...";
const LOADING_OUTPUT: &str =
    "root@autodriver:~/build# make\nCompiling driver sources...\nAnalyze SDK dependency tree...";

/// Colour tokens shared by the status indicator and issue rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Gray,
    Yellow,
    Green,
    Red,
    Blue,
}

impl Tone {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }

    pub const fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Self::Red,
            Severity::Warning => Self::Yellow,
            Severity::Info => Self::Blue,
        }
    }
}

/// Status dot next to the terminal title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub color: Tone,
    pub pulsing: bool,
}

impl Indicator {
    pub const fn for_status(status: UiStatus) -> Self {
        match status {
            UiStatus::Idle => Self {
                color: Tone::Gray,
                pulsing: false,
            },
            UiStatus::Loading => Self {
                color: Tone::Yellow,
                pulsing: true,
            },
            UiStatus::Success => Self {
                color: Tone::Green,
                pulsing: false,
            },
            UiStatus::Failed => Self {
                color: Tone::Red,
                pulsing: false,
            },
        }
    }
}

/// A labelled code area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPanel {
    pub label: String,
    pub value: String,
    pub read_only: bool,
    pub placeholder: Option<String>,
}

impl EditorPanel {
    fn editable(label: &str, value: &str, placeholder: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            read_only: false,
            placeholder: Some(placeholder.to_string()),
        }
    }

    fn read_only(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            read_only: true,
            placeholder: None,
        }
    }
}

/// Terminal-style log viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalPanel {
    pub status: UiStatus,
    pub indicator: Indicator,
    pub title: String,
    pub output: String,
    /// `output` is filler text rather than build output.
    pub placeholder: bool,
}

impl TerminalPanel {
    fn render(status: UiStatus, simulated_output: Option<&str>) -> Self {
        let (output, placeholder) = match (status, simulated_output) {
            (UiStatus::Loading, _) => (LOADING_OUTPUT.to_string(), true),
            (_, Some(text)) if !text.is_empty() => (text.to_string(), false),
            (UiStatus::Idle, _) => (IDLE_OUTPUT.to_string(), true),
            _ => (String::new(), false),
        };
        Self {
            status,
            indicator: Indicator::for_status(status),
            title: TERMINAL_TITLE.to_string(),
            output,
            placeholder,
        }
    }
}

/// One analysis finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRow {
    pub severity: Severity,
    pub line: i64,
    pub message: String,
    pub suggestion: String,
    pub style: Tone,
}

impl From<&AnalysisIssue> for IssueRow {
    fn from(issue: &AnalysisIssue) -> Self {
        Self {
            severity: issue.severity,
            line: issue.line,
            message: issue.message.clone(),
            suggestion: issue.suggestion.clone(),
            style: Tone::for_severity(issue.severity),
        }
    }
}

/// Static analysis report, only rendered when there is at least one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisPanel {
    pub title: String,
    pub count: usize,
    pub rows: Vec<IssueRow>,
}

impl AnalysisPanel {
    fn render(issues: &[AnalysisIssue]) -> Option<Self> {
        (!issues.is_empty()).then(|| Self {
            title: ANALYSIS_TITLE.to_string(),
            count: issues.len(),
            rows: issues.iter().map(IssueRow::from).collect(),
        })
    }
}

/// The input side of the workbench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputsView {
    pub sdk_header: EditorPanel,
    pub driver_source: EditorPanel,
    pub arch: TargetArch,
    pub kernel: KernelVersion,
    pub extra_flags: String,
}

/// Everything a surface needs to draw the workbench.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchView {
    pub status: UiStatus,
    pub button_label: String,
    pub trigger_enabled: bool,
    pub inputs: InputsView,
    pub terminal: TerminalPanel,
    pub analysis: Option<AnalysisPanel>,
    pub makefile: Option<EditorPanel>,
    pub optimized_source: Option<EditorPanel>,
}

impl WorkbenchView {
    pub(crate) fn render(workbench: &Workbench) -> Self {
        let status = workbench.status;
        let inputs = &workbench.inputs;
        let result = workbench.result.as_ref();

        Self {
            status,
            button_label: status.button_label().to_string(),
            trigger_enabled: status.is_trigger_enabled(),
            inputs: InputsView {
                sdk_header: EditorPanel::editable(
                    SDK_HEADER_LABEL,
                    &inputs.sdk_header,
                    SDK_HEADER_PLACEHOLDER,
                ),
                driver_source: EditorPanel::editable(
                    DRIVER_SOURCE_LABEL,
                    &inputs.driver_source,
                    DRIVER_SOURCE_PLACEHOLDER,
                ),
                arch: inputs.arch,
                kernel: inputs.kernel,
                extra_flags: inputs.extra_flags.clone(),
            },
            terminal: TerminalPanel::render(
                status,
                result.map(|r| r.simulated_output.as_str()),
            ),
            analysis: result.and_then(|r| AnalysisPanel::render(&r.issues)),
            makefile: result
                .filter(|r| !r.makefile.is_empty())
                .map(|r| EditorPanel::read_only(MAKEFILE_LABEL, &r.makefile)),
            optimized_source: result
                .and_then(|r| r.optimized_source.as_deref())
                .map(|source| EditorPanel::read_only(OPTIMIZED_SOURCE_LABEL, source)),
        }
    }
}
