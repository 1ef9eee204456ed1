//! `gpm track` command.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use colored::Colorize;

use crate::context::ServiceContext;
use crate::error::GpmError;
use crate::registry::discovery::{entry_from_path, is_repository_root};
use crate::registry::{Registry, RegistryEntry};

/// Execute the `track` command.
///
/// Each path is registered independently; a rejected path is reported and
/// the rest of the batch still runs. With `all`, every immediate child of
/// each path that is a repository root is registered instead.
///
/// # Errors
///
/// Returns [`GpmError::TrackFailed`] if any path was rejected.
pub fn run(
    ctx: &ServiceContext,
    registry: &Registry<'_>,
    cwd: &Path,
    paths: &[PathBuf],
    all: bool,
    out: &mut dyn Write,
) -> Result<(), GpmError> {
    let mut targets = Vec::new();
    let mut failed = 0;

    for path in paths {
        let path = absolutize(cwd, path);
        if !all {
            targets.push(path);
            continue;
        }
        match repositories_under(ctx, &path) {
            Ok(children) => targets.extend(children),
            Err(e) => {
                failed += 1;
                report_failure(&e);
            }
        }
    }

    let total = targets.len() + failed;
    for target in &targets {
        match track_one(ctx, registry, target) {
            Ok(entry) => writeln!(out, "Tracking {} ({})", entry.name, entry.path)?,
            Err(e) => {
                failed += 1;
                report_failure(&e);
            }
        }
    }

    if failed > 0 {
        return Err(GpmError::TrackFailed { failed, total });
    }
    Ok(())
}

/// Validates one directory and adds it to the registry.
///
/// # Errors
///
/// Returns [`GpmError::NotADirectory`], [`GpmError::NotARepository`], or
/// [`GpmError::MissingOrigin`] before anything is written.
pub fn track_one(
    ctx: &ServiceContext,
    registry: &Registry<'_>,
    path: &Path,
) -> Result<RegistryEntry, GpmError> {
    if !ctx.fs.is_dir(path) {
        return Err(GpmError::NotADirectory(path.to_path_buf()));
    }
    let entry = entry_from_path(&*ctx.fs, path)?;
    registry.add(entry.clone())?;
    Ok(entry)
}

fn repositories_under(ctx: &ServiceContext, parent: &Path) -> Result<Vec<PathBuf>, GpmError> {
    if !ctx.fs.is_dir(parent) {
        return Err(GpmError::NotADirectory(parent.to_path_buf()));
    }
    let names =
        ctx.fs.list_dir(parent).map_err(|_| GpmError::NotADirectory(parent.to_path_buf()))?;
    let mut found = Vec::new();
    for name in names {
        let child = parent.join(&name);
        if ctx.fs.is_dir(&child) && is_repository_root(&*ctx.fs, &child) {
            found.push(child);
        } else {
            tracing::debug!(path = %child.display(), "not a repository, skipping");
        }
    }
    Ok(found)
}

fn report_failure(err: &GpmError) {
    tracing::debug!("track failed: {err:?}");
    eprintln!("{}", err.to_string().bold().red());
}

/// Joins `path` onto `cwd` when relative and folds `.` and `..` lexically.
fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
