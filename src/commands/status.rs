//! `gpm status` command.

use std::io::Write;
use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::GpmError;
use crate::registry::discovery::find_repository_root;
use crate::registry::Registry;
use crate::status::{parse_status, render, render_compact, RenderOptions, StatusReport};

/// Which repositories `status` reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The repository containing the working directory.
    Current,
    /// Full report for every tracked repository.
    All,
    /// One line per tracked repository.
    Compact,
}

impl Scope {
    /// Maps the `--all` / `--compact` flags to a scope.
    #[must_use]
    pub fn from_flags(all: bool, compact: bool) -> Self {
        if compact {
            Self::Compact
        } else if all {
            Self::All
        } else {
            Self::Current
        }
    }
}

/// Execute the `status` command.
///
/// # Errors
///
/// Returns [`GpmError::NotARepository`] when `cwd` is outside a repository,
/// [`GpmError::CommandUnavailable`] when git fails, and
/// [`GpmError::NoTrackedRepositories`] for the multi-repository scopes on
/// an empty registry. A repository whose status cannot be read is reported
/// on `err` and skipped.
pub fn run(
    ctx: &ServiceContext,
    config: &Config,
    registry: &Registry<'_>,
    cwd: &Path,
    scope: Scope,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), GpmError> {
    let options = RenderOptions { always_list_clean: config.settings.status.always_list_clean };

    if scope == Scope::Current {
        if find_repository_root(&*ctx.fs, cwd).is_none() {
            return Err(GpmError::NotARepository(cwd.to_path_buf()));
        }
        let report = read_status(ctx, cwd)?;
        return write_lines(out, &render(&report, &options));
    }

    let repositories = registry.list()?;
    for (name, entry) in &repositories {
        let report = match read_status(ctx, Path::new(&entry.path)) {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(repository = %name, "skipping: {e}");
                writeln!(err, "{}", format!("{name}: {e}").red())?;
                continue;
            }
        };
        if scope == Scope::Compact {
            writeln!(out, "{}", render_compact(name, &report))?;
        } else {
            writeln!(out, "{name} - Author {}", entry.author)?;
            write_lines(out, &render(&report, &options))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Runs the porcelain status query in `dir` and classifies its output.
///
/// # Errors
///
/// Returns [`GpmError::CommandUnavailable`] if git cannot produce the status.
pub fn read_status(ctx: &ServiceContext, dir: &Path) -> Result<StatusReport, GpmError> {
    let lines = ctx
        .git
        .status_porcelain(dir)
        .map_err(|e| GpmError::CommandUnavailable(e.to_string()))?;
    Ok(parse_status(&lines))
}

fn write_lines(out: &mut dyn Write, lines: &[String]) -> Result<(), GpmError> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
