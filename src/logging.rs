//! Diagnostic logging setup.
//!
//! User-facing output goes to stdout through `println!`/`writeln!`; tracing
//! events go to stderr and are filtered by the `-v`/`-q` flags unless
//! `RUST_LOG` is set.

use tracing_subscriber::EnvFilter;

/// Maps net verbosity (`-v` count minus `-q` count) to a filter directive.
#[must_use]
pub fn level_for(verbosity: i16) -> &'static str {
    match verbosity {
        v if v >= 1 => "debug",
        0 => "info",
        -1 => "warn",
        -2 => "error",
        _ => "off",
    }
}

/// Installs the global subscriber. Later calls are no-ops.
///
/// Messages carry a timestamp only when `show_time` is set.
pub fn init(verbosity: i16, show_time: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gpm={}", level_for(verbosity))));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = if show_time { builder.try_init() } else { builder.without_time().try_init() };
}
