//! Core library entry for the `gpm` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod registry;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::config::Config;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    logging::init(cli.global.verbosity(), cli.global.show_time);
    if cli.global.no_color {
        colored::control::set_override(false);
    }

    let started = Instant::now();
    let config = Config::load(&LiveFileSystem).map_err(|err| err.to_string())?;
    let result = commands::dispatch(&cli.command, &config, cli.global.verbosity())
        .map_err(|err| err.to_string());

    if cli.global.time_command {
        let elapsed = started.elapsed().as_secs_f64();
        println!("{}", format!("Run time: {elapsed:.3}s").yellow());
    }
    result
}
