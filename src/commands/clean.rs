//! `gpm clean` command.

use colored::Colorize;

use super::Io;
use crate::error::GpmError;
use crate::registry::Registry;

/// Execute the `clean` command.
///
/// Asks for confirmation on `io.input` unless `yes` is set; only `y`
/// (case-insensitive) proceeds. Below zero verbosity the prompt text is
/// not printed but the answer is still read.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or read, or the
/// registry file cannot be truncated.
pub fn run(registry: &Registry<'_>, yes: bool, io: &mut Io<'_>) -> Result<(), GpmError> {
    if !yes {
        if io.verbosity >= 0 {
            write!(
                io.out,
                "This will clear all tracked repository cached data\n\
                 Are you sure you want to proceed? (y/n) "
            )?;
            io.out.flush()?;
        }
        let mut answer = String::new();
        io.input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            writeln!(io.out, "{}", "Aborting.".red())?;
            return Ok(());
        }
    }

    registry.clear()?;
    tracing::info!(path = %registry.path().display(), "registry cleared");
    writeln!(io.out, "Cleaned cached repository data.")?;
    Ok(())
}
