//! Colorized rendering of a [`StatusReport`].

use colored::{Color, Colorize};

use super::StatusReport;

/// Presentation switches for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit a "No ... detected." line for empty categories.
    pub always_list_clean: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { always_list_clean: true }
    }
}

struct Category<'a> {
    paths: &'a [String],
    header: fn(usize) -> String,
    clean: &'static str,
    color: Color,
}

/// Renders the full status summary, one output line per entry.
///
/// Each non-empty category is followed by a blank separator line; the
/// report itself is left untouched.
#[must_use]
pub fn render(report: &StatusReport, options: &RenderOptions) -> Vec<String> {
    let categories = [
        Category {
            paths: &report.untracked_files,
            header: |n| format!("Detected {n} untracked file(s):"),
            clean: "No untracked files detected.",
            color: Color::Red,
        },
        Category {
            paths: &report.unstaged_changes,
            header: |n| format!("Detected {n} file(s) with changes not staged for commit:"),
            clean: "No unstaged changes detected.",
            color: Color::Yellow,
        },
        Category {
            paths: &report.staged_changes,
            header: |n| format!("Detected {n} file(s) staged for commit:"),
            clean: "No staged changes detected.",
            color: Color::Green,
        },
    ];

    let mut lines = vec![format!("Branch: {}", report.branch_name())];

    for category in &categories {
        if category.paths.is_empty() {
            if options.always_list_clean {
                lines.push(category.clean.to_string());
            }
            continue;
        }
        lines.push((category.header)(category.paths.len()));
        lines.extend(
            category.paths.iter().map(|path| format!("\t{}", path.as_str().color(category.color))),
        );
        lines.push(String::new());
    }

    if report.is_clean() {
        lines.push("Status: Clean".green().to_string());
    } else {
        lines.push("Status: Actions Suggested".yellow().to_string());
    }

    lines
}

/// One-line summary used by `gpm status --compact`.
#[must_use]
pub fn render_compact(name: &str, report: &StatusReport) -> String {
    let branch = format!("[{}]", report.branch_name());
    if report.is_clean() {
        return format!("{name} {branch} {}", "clean".green());
    }
    let summary = format!(
        "{} staged, {} unstaged, {} untracked",
        report.staged_changes.len(),
        report.unstaged_changes.len(),
        report.untracked_files.len(),
    );
    format!("{name} {branch} {}", summary.yellow())
}
