//! Command dispatch and handlers.

pub mod clean;
pub mod issues;
pub mod list;
pub mod pulls;
pub mod status;
pub mod track;

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::GpmError;
use crate::ports::PortError;
use crate::registry::Registry;

/// Standard streams handed to a command.
pub struct Io<'a> {
    /// Primary output.
    pub out: &'a mut dyn Write,
    /// Failures reported per item while a command keeps going.
    pub err: &'a mut dyn Write,
    /// Answers to interactive prompts.
    pub input: &'a mut dyn BufRead,
    /// Net `-v`/`-q` count; prompts stay silent below zero.
    pub verbosity: i16,
}

/// Dispatch a parsed command against live adapters and the process streams.
///
/// # Errors
///
/// Returns the error of the selected command handler.
pub fn dispatch(command: &Command, config: &Config, verbosity: i16) -> Result<(), GpmError> {
    let ctx = match command {
        Command::Pulls { .. } | Command::Issues { .. } => {
            ServiceContext::live().with_hosting(config)?
        }
        _ => ServiceContext::live(),
    };
    let cwd = std::env::current_dir()?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    let stdin = io::stdin();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut input = stdin.lock();
    let mut streams = Io { out: &mut out, err: &mut err, input: &mut input, verbosity };

    dispatch_with_context(command, &ctx, config, &cwd, &mut streams)
}

/// Dispatch a command with the given service context and streams.
///
/// # Errors
///
/// Returns the error of the selected command handler.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
    cwd: &Path,
    streams: &mut Io<'_>,
) -> Result<(), GpmError> {
    let registry = Registry::new(ctx, &config.registry_path());
    match command {
        Command::Status { all, compact } => {
            let scope = status::Scope::from_flags(*all, *compact);
            status::run(ctx, config, &registry, cwd, scope, streams.out, streams.err)
        }
        Command::Track { all, paths } => track::run(ctx, &registry, cwd, paths, *all, streams.out),
        Command::List { count } => list::run(&registry, *count, streams.out),
        Command::Clean { yes } => clean::run(&registry, *yes, streams),
        Command::Pulls { name } => pulls::run(ctx, &registry, name, streams.out),
        Command::Issues { name } => issues::run(ctx, &registry, name, streams.out),
    }
}

/// Drives a hosting future to completion on a current-thread runtime.
fn block_on<T>(future: impl Future<Output = Result<T, PortError>>) -> Result<T, GpmError> {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(future).map_err(|e| GpmError::Hosting(e.to_string()))
}
