//! Server-rendered workbench page.
//!
//! A single HTML document built from a [`WorkbenchView`]. All user and model
//! text passes through [`escape_html`] before it reaches the page.

use std::fmt::Write as _;

use autodriver_gui::{AnalysisPanel, EditorPanel, TerminalPanel, WorkbenchOptions, WorkbenchView};

const STYLE: &str = r"
body { background:#020617; color:#e2e8f0; font-family:system-ui,sans-serif; margin:0; padding:2rem; }
header { display:flex; flex-wrap:wrap; justify-content:space-between; gap:1rem; border-bottom:1px solid #1e293b; padding-bottom:1.5rem; }
h1 { margin:0; font-size:1.9rem; color:#60a5fa; }
header p { margin:.25rem 0 0; color:#94a3b8; font-size:.9rem; }
.controls { display:flex; gap:.75rem; align-items:center; }
select, input[type=text] { background:#0f172a; color:#e2e8f0; border:1px solid #334155; border-radius:4px; padding:.5rem .75rem; }
button { background:#2563eb; color:#fff; border:0; border-radius:4px; padding:.5rem 1.5rem; font-weight:600; cursor:pointer; }
button:disabled { background:#334155; color:#94a3b8; cursor:not-allowed; }
main { display:grid; grid-template-columns:1fr 1fr; gap:1.5rem; margin-top:1.5rem; }
.col { display:flex; flex-direction:column; gap:1.5rem; }
label.panel { display:block; font-size:.75rem; font-weight:600; letter-spacing:.05em; text-transform:uppercase; color:#94a3b8; margin-bottom:.5rem; }
textarea { width:100%; box-sizing:border-box; background:#0f172a; color:#cbd5e1; border:1px solid #334155; border-radius:8px; padding:1rem; font-family:monospace; font-size:.85rem; resize:vertical; }
.terminal { background:#000; border:1px solid #1e293b; border-radius:8px; padding:1rem; min-height:300px; color:#4ade80; font-family:monospace; font-size:.8rem; white-space:pre-wrap; overflow-y:auto; }
.terminal.placeholder { color:#475569; }
.dot { display:inline-block; width:.5rem; height:.5rem; border-radius:50%; margin-right:.4rem; }
.dot.gray { background:#475569; } .dot.yellow { background:#eab308; } .dot.green { background:#22c55e; } .dot.red { background:#ef4444; }
.dot.pulse { animation:pulse 1s infinite; }
@keyframes pulse { 50% { opacity:.3; } }
.issues { background:#0f172a; border:1px solid #334155; border-radius:8px; padding:1rem; max-height:16rem; overflow-y:auto; }
.issue { display:flex; gap:.75rem; padding:.75rem; border-left:2px solid; border-radius:4px; margin-bottom:.75rem; }
.issue.red { border-color:#ef4444; background:rgba(69,10,10,.3); } .issue.yellow { border-color:#eab308; background:rgba(66,32,6,.3); } .issue.blue { border-color:#3b82f6; background:rgba(23,37,84,.3); }
.sev { font-size:.75rem; font-weight:700; text-transform:uppercase; }
.red .sev { color:#f87171; } .yellow .sev { color:#facc15; } .blue .sev { color:#60a5fa; }
.suggestion { color:#64748b; font-size:.75rem; font-style:italic; }
.editor-head { display:flex; justify-content:space-between; align-items:center; }
button.copy { background:#1e293b; color:#cbd5e1; padding:.2rem .6rem; font-size:.7rem; font-weight:500; margin-bottom:.5rem; }
";

const SCRIPT: &str = r"
document.getElementById('workbench').addEventListener('submit', function () {
  var button = document.getElementById('build');
  button.disabled = true;
  button.textContent = 'Compiling...';
});
document.querySelectorAll('button.copy').forEach(function (copy) {
  copy.addEventListener('click', function () {
    var source = document.getElementById(copy.dataset.copy);
    navigator.clipboard.writeText(source.value).then(function () {
      copy.textContent = 'Copied';
      setTimeout(function () { copy.textContent = 'Copy'; }, 1500);
    });
  });
});
";

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render the full workbench document.
pub fn render_page(view: &WorkbenchView, options: &WorkbenchOptions, notice: Option<&str>) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>AutoDriver AI</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<form id=\"workbench\" method=\"post\" action=\"/\">\n");

    render_header(&mut html, view, options);

    if let Some(notice) = notice {
        let _ = writeln!(html, "<p class=\"notice\">{}</p>", escape_html(notice));
    }

    html.push_str("<main>\n<div class=\"col\">\n");
    render_editor(&mut html, &view.inputs.sdk_header, "sdkHeader", 12);
    render_editor(&mut html, &view.inputs.driver_source, "driverSource", 24);
    html.push_str("</div>\n<div class=\"col\">\n");
    render_terminal(&mut html, &view.terminal);
    if let Some(analysis) = &view.analysis {
        render_analysis(&mut html, analysis);
    }
    if let Some(makefile) = &view.makefile {
        render_editor(&mut html, makefile, "makefile", 12);
    }
    if let Some(optimized) = &view.optimized_source {
        render_editor(&mut html, optimized, "optimizedSource", 20);
    }
    html.push_str("</div>\n</main>\n</form>\n<script>");
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, view: &WorkbenchView, options: &WorkbenchOptions) {
    html.push_str("<header>\n<div>\n<h1>AutoDriver AI</h1>\n");
    html.push_str(
        "<p>Automated Kernel Driver Compilation &amp; Static Analysis Environment</p>\n</div>\n",
    );
    html.push_str("<div class=\"controls\">\n<select name=\"arch\">\n");
    for entry in &options.architectures {
        render_option(html, &entry.value, &entry.label, entry.value == view.inputs.arch.as_str());
    }
    html.push_str("</select>\n<select name=\"kernel\">\n");
    for entry in &options.kernels {
        render_option(
            html,
            &entry.value,
            &entry.label,
            entry.value == view.inputs.kernel.as_str(),
        );
    }
    html.push_str("</select>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" name=\"extraFlags\" value=\"{}\" aria-label=\"Extra compiler flags\">",
        escape_html(&view.inputs.extra_flags)
    );
    let _ = writeln!(
        html,
        "<button id=\"build\" type=\"submit\"{}>{}</button>",
        if view.trigger_enabled { "" } else { " disabled" },
        escape_html(&view.button_label)
    );
    html.push_str("</div>\n</header>\n");
}

fn render_option(html: &mut String, value: &str, label: &str, selected: bool) {
    let _ = writeln!(
        html,
        "<option value=\"{}\"{}>{}</option>",
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    );
}

fn render_editor(html: &mut String, panel: &EditorPanel, name: &str, rows: u32) {
    html.push_str("<div>\n<div class=\"editor-head\">\n");
    let _ = writeln!(
        html,
        "<label class=\"panel\" for=\"{name}\">{}</label>",
        escape_html(&panel.label)
    );
    if panel.read_only {
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"copy\" data-copy=\"{name}\">Copy</button>"
        );
    }
    html.push_str("</div>\n");
    let _ = write!(html, "<textarea id=\"{name}\" rows=\"{rows}\" spellcheck=\"false\"");
    if panel.read_only {
        html.push_str(" readonly");
    } else {
        let _ = write!(html, " name=\"{name}\"");
    }
    if let Some(placeholder) = &panel.placeholder {
        let _ = write!(html, " placeholder=\"{}\"", escape_html(placeholder));
    }
    let _ = writeln!(html, ">{}</textarea>", escape_html(&panel.value));
    html.push_str("</div>\n");
}

fn render_terminal(html: &mut String, terminal: &TerminalPanel) {
    html.push_str("<div>\n");
    let _ = writeln!(
        html,
        "<label class=\"panel\">{} <span class=\"dot {}{}\"></span>{}</label>",
        escape_html(&terminal.title),
        terminal.indicator.color.as_str(),
        if terminal.indicator.pulsing { " pulse" } else { "" },
        terminal.status.as_str()
    );
    let _ = writeln!(
        html,
        "<pre class=\"terminal{}\">{}</pre>",
        if terminal.placeholder { " placeholder" } else { "" },
        escape_html(&terminal.output)
    );
    html.push_str("</div>\n");
}

fn render_analysis(html: &mut String, analysis: &AnalysisPanel) {
    html.push_str("<div>\n");
    let _ = writeln!(
        html,
        "<label class=\"panel\">{} ({})</label>\n<div class=\"issues\">",
        escape_html(&analysis.title),
        analysis.count
    );
    for row in &analysis.rows {
        let _ = writeln!(
            html,
            "<div class=\"issue {}\"><span class=\"sev\">{}</span><div><div>Line {}: {}</div><div class=\"suggestion\">Suggestion: {}</div></div></div>",
            row.style.as_str(),
            row.severity.as_str(),
            row.line,
            escape_html(&row.message),
            escape_html(&row.suggestion)
        );
    }
    html.push_str("</div>\n</div>\n");
}
