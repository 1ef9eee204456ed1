//! Classification of `git status --porcelain --branch` output.
//!
//! Each line is bucketed by its two-character prefix:
//!
//! ```text
//! ## main...origin/main   branch header
//!  M src/lib.rs           unstaged modification
//! M  src/main.rs          staged (also "A ")
//! ?? notes.txt            untracked
//! ```
//!
//! Any other prefix is skipped without error.

pub mod render;

pub use render::{render, render_compact, RenderOptions};

const UNKNOWN_BRANCH: &str = "unknown";

/// Structured view of one repository's working tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    /// Checked-out branch, if the header line was present.
    pub branch: Option<String>,
    /// Paths modified but not staged.
    pub unstaged_changes: Vec<String>,
    /// Paths not under version control.
    pub untracked_files: Vec<String>,
    /// Paths staged for the next commit.
    pub staged_changes: Vec<String>,
}

impl StatusReport {
    /// The branch name, or `unknown` when no header line was seen.
    #[must_use]
    pub fn branch_name(&self) -> &str {
        self.branch.as_deref().unwrap_or(UNKNOWN_BRANCH)
    }

    /// `true` when all three categories are empty.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unstaged_changes.is_empty()
            && self.untracked_files.is_empty()
            && self.staged_changes.is_empty()
    }
}

/// Classifies porcelain status lines, preserving input order per category.
pub fn parse_status<I, S>(lines: I) -> StatusReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = StatusReport::default();

    for line in lines {
        let line = line.as_ref();
        let (Some(prefix), Some(rest)) = (line.get(..2), line.get(2..)) else {
            continue;
        };

        match prefix {
            "##" => {
                let branch = rest.split("...").next().unwrap_or_default().trim_start();
                if !branch.is_empty() {
                    report.branch = Some(branch.to_string());
                }
            }
            " M" => report.unstaged_changes.push(rest.trim().to_string()),
            "M " | "A " => report.staged_changes.push(rest.trim().to_string()),
            "??" => report.untracked_files.push(rest.trim().to_string()),
            _ => {}
        }
    }

    report
}

/// Splits raw command output into lines and classifies them.
#[must_use]
pub fn parse_status_output(output: &str) -> StatusReport {
    parse_status(output.lines())
}
