//! Table formatting utilities for CLI output.

use autodriver_gui::{IssueRow, OptionEntry};

const SUGGESTION_INDENT: usize = 16;

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", separator(width));
}

pub(crate) fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Header line followed by one entry per issue.
///
/// Messages are printed in full; the suggestion goes on its own indented
/// line below the message.
pub fn issue_table(rows: &[IssueRow]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!("{:<8} {:<6} {}", "Severity", "Line", "Issue"));
    lines.extend(rows.iter().map(issue_entry));
    lines
}

fn issue_entry(row: &IssueRow) -> String {
    format!(
        "{:<8} {:<6} {}\n{:indent$}-> {}",
        row.severity.as_str(),
        row.line,
        row.message,
        "",
        row.suggestion,
        indent = SUGGESTION_INDENT
    )
}

/// One selector option, with a marker when it is the default.
pub fn option_line(entry: &OptionEntry, is_default: bool) -> String {
    let marker = if is_default { "*" } else { " " };
    format!("{marker} {:<14} {}", entry.value, entry.label)
}
