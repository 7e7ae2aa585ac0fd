//! Terminal rendering of the workbench view.

use std::time::Duration;

use autodriver_gui::{EditorPanel, Tone, WorkbenchView};
use console::StyledObject;
use indicatif::{ProgressBar, ProgressStyle};

use super::tables::{issue_table, separator};

const RULE_WIDTH: usize = 72;

/// Spinner shown while a build is in flight.
pub fn build_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    match ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        Ok(style) => pb.set_style(style),
        Err(e) => tracing::debug!("spinner template rejected: {e}"),
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Apply a view tone to a piece of text.
pub fn styled<D>(text: D, tone: Tone) -> StyledObject<D> {
    let base = console::style(text);
    match tone {
        Tone::Gray => base.dim(),
        Tone::Yellow => base.yellow(),
        Tone::Green => base.green(),
        Tone::Red => base.red(),
        Tone::Blue => base.blue(),
    }
}

/// Render the output side of the workbench as terminal text.
///
/// The terminal panel is always present. The analysis table, generated
/// Makefile and corrected source follow only when the view carries them.
pub fn render_view(view: &WorkbenchView) -> String {
    let mut out = Vec::new();

    let terminal = &view.terminal;
    out.push(format!(
        "{} {}  [{}]",
        styled("●", terminal.indicator.color),
        console::style(&terminal.title).bold(),
        terminal.status.as_str()
    ));
    out.push(separator(RULE_WIDTH));
    if terminal.placeholder {
        out.push(console::style(&terminal.output).dim().italic().to_string());
    } else {
        out.push(terminal.output.clone());
    }

    if let Some(analysis) = &view.analysis {
        out.push(String::new());
        out.push(format!(
            "{} ({})",
            console::style(&analysis.title).bold(),
            analysis.count
        ));
        out.push(separator(RULE_WIDTH));
        let mut table = issue_table(&analysis.rows).into_iter();
        out.extend(table.next());
        for (entry, row) in table.zip(&analysis.rows) {
            out.push(styled(entry, row.style).to_string());
        }
    }

    for panel in [&view.makefile, &view.optimized_source].into_iter().flatten() {
        out.push(String::new());
        push_editor(&mut out, panel);
    }

    out.join("\n")
}

fn push_editor(out: &mut Vec<String>, panel: &EditorPanel) {
    out.push(console::style(&panel.label).bold().to_string());
    out.push(separator(RULE_WIDTH));
    out.push(panel.value.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodriver_core::{AnalysisIssue, BuildOutcome, BuildResult, BuildStatus, Severity};
    use autodriver_gui::Workbench;

    fn finished(result: BuildResult) -> WorkbenchView {
        let mut workbench = Workbench::new();
        workbench.begin_build().unwrap();
        workbench.finish_build(&BuildOutcome {
            build_id: Default::default(),
            result,
            elapsed: Duration::from_millis(1200),
        });
        workbench.view()
    }

    #[test]
    fn test_idle_render_shows_placeholder_only() {
        console::set_colors_enabled(false);
        let text = render_view(&Workbench::new().view());

        assert!(text.contains("Build Log / Terminal  [idle]"));
        assert!(text.contains("Waiting for input..."));
        assert!(!text.contains("Static Analysis Report"));
        assert!(!text.contains("Generated Makefile"));
    }

    #[test]
    fn test_failed_render_lists_issues() {
        console::set_colors_enabled(false);
        let view = finished(BuildResult {
            status: BuildStatus::Failed,
            makefile: String::new(),
            simulated_output: "drv.c:12: error: 'foo' undeclared".to_string(),
            issues: vec![AnalysisIssue {
                severity: Severity::Error,
                line: 12,
                message: "'foo' undeclared".to_string(),
                suggestion: "Declare foo".to_string(),
            }],
            optimized_source: Some("int foo;".to_string()),
        });
        let text = render_view(&view);

        assert!(text.contains("[failed]"));
        assert!(text.contains("drv.c:12: error: 'foo' undeclared"));
        assert!(text.contains("Static Analysis Report (1)"));
        assert!(text.contains("error    12     'foo' undeclared"));
        assert!(text.contains("-> Declare foo"));
        assert!(!text.contains("Generated Makefile"));
        assert!(text.contains("AI Refactored Source (Fixes Applied)"));
        assert!(text.contains("int foo;"));
    }

    #[test]
    fn test_success_render_includes_makefile() {
        console::set_colors_enabled(false);
        let view = finished(BuildResult {
            status: BuildStatus::Success,
            makefile: "obj-m += drv.o".to_string(),
            simulated_output: "LD [M] drv.ko".to_string(),
            issues: Vec::new(),
            optimized_source: None,
        });
        let text = render_view(&view);

        assert!(text.contains("[success]"));
        assert!(text.contains("Generated Makefile"));
        assert!(text.contains("obj-m += drv.o"));
        assert!(!text.contains("Static Analysis Report"));
    }
}
