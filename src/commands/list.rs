//! `gpm list` command.

use std::io::Write;

use crate::error::GpmError;
use crate::registry::Registry;

/// Execute the `list` command.
///
/// Prints `<name>: <path>` per tracked repository, or only the total with `count`.
///
/// # Errors
///
/// Returns [`GpmError::NoTrackedRepositories`] if the registry is empty.
pub fn run(registry: &Registry<'_>, count: bool, out: &mut dyn Write) -> Result<(), GpmError> {
    let repositories = registry.list()?;

    if count {
        writeln!(out, "There are currently {} repositories tracked by gpm.", repositories.len())?;
        return Ok(());
    }

    for (name, entry) in &repositories {
        writeln!(out, "{name}: {}", entry.path)?;
    }
    Ok(())
}
