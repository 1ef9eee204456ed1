//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI parser for `gpm`.
#[derive(Debug, Parser)]
#[command(name = "gpm", version, about = "Track git repositories and summarize their status")]
pub struct Cli {
    /// Options accepted by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Output and diagnostics flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase log output (repeatable).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Decrease log output (repeatable, up to three times).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
    /// Disable color output.
    #[arg(long, global = true)]
    pub no_color: bool,
    /// Prefix log messages with a timestamp.
    #[arg(long, global = true)]
    pub show_time: bool,
    /// Print the command's run time when it finishes.
    #[arg(long, global = true)]
    pub time_command: bool,
}

impl GlobalArgs {
    /// Net verbosity: positive is chattier, negative is quieter.
    #[must_use]
    pub fn verbosity(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show an enhanced status of the current repository, or of all tracked repositories.
    Status {
        /// Show the full status of every tracked repository.
        #[arg(short, long)]
        all: bool,
        /// Show one summary line per tracked repository.
        #[arg(long, conflicts_with = "all")]
        compact: bool,
    },
    /// Add git repositories for gpm to track.
    Track {
        /// Treat each path as a parent and track every repository directly inside it.
        #[arg(short, long)]
        all: bool,
        /// Repository paths (or parent directories with `--all`).
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// List every tracked repository.
    List {
        /// Only print how many repositories are tracked.
        #[arg(long)]
        count: bool,
    },
    /// Forget all tracked repositories.
    Clean {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// List open pull requests of a tracked repository on GitHub.
    Pulls {
        /// Tracked repository name.
        name: String,
    },
    /// List open issues of a tracked repository on GitHub.
    Issues {
        /// Tracked repository name.
        name: String,
    },
}
