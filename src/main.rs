//! Binary entrypoint for the `gpm` CLI.

use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    match gpm::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.as_str().bold().red());
            ExitCode::FAILURE
        }
    }
}
