//! `gpm issues` command.

use std::io::Write;

use super::block_on;
use crate::context::ServiceContext;
use crate::error::GpmError;
use crate::registry::Registry;

/// Execute the `issues` command.
///
/// Pull requests returned by the issues endpoint are skipped.
///
/// # Errors
///
/// Returns an error if the repository is not tracked, no hosting client is
/// configured, or the API request fails.
pub fn run(
    ctx: &ServiceContext,
    registry: &Registry<'_>,
    name: &str,
    out: &mut dyn Write,
) -> Result<(), GpmError> {
    let entry = registry.get(name)?;
    let hosting = ctx.hosting()?;
    let issues = block_on(hosting.issues(&entry.author, &entry.name))?;

    let mut shown = 0;
    for issue in issues.iter().filter(|issue| !issue.is_pull_request()) {
        let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
        if labels.is_empty() {
            writeln!(out, "#{} {} ({})", issue.number, issue.title, issue.user.login)?;
        } else {
            writeln!(
                out,
                "#{} {} ({}) [{}]",
                issue.number,
                issue.title,
                issue.user.login,
                labels.join(", ")
            )?;
        }
        shown += 1;
    }

    if shown == 0 {
        writeln!(out, "No open issues for {}/{}.", entry.author, entry.name)?;
    }
    Ok(())
}
