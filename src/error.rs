//! Error taxonomy shared by the registry, status, and hosting commands.

use std::path::PathBuf;

/// Errors surfaced to the user by `gpm` commands.
#[derive(Debug, thiserror::Error)]
pub enum GpmError {
    /// No `.git` marker in the path or any of its ancestors.
    #[error("{} is not a valid git repository.", .0.display())]
    NotARepository(PathBuf),

    /// A path given for registration is not a directory.
    #[error("{} is not a valid directory.", .0.display())]
    NotADirectory(PathBuf),

    /// The `git` executable could not be run or exited non-zero.
    #[error("git command unavailable: {0}")]
    CommandUnavailable(String),

    /// The registry holds no repositories.
    #[error("gpm found no tracked repositories.")]
    NoTrackedRepositories,

    /// The repository config has no `remote "origin"` url.
    #[error("{} has no origin remote configured.", .0.display())]
    MissingOrigin(PathBuf),

    /// No tracked repository under the given name.
    #[error("no tracked repository named '{0}'")]
    UnknownRepository(String),

    /// No GitHub token in the settings file or environment.
    #[error("no GitHub token configured; set GPM_AUTH_TOKEN or github.auth_token")]
    MissingToken,

    /// The hosting API request failed.
    #[error("GitHub API error: {0}")]
    Hosting(String),

    /// Settings could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Some paths in a `track` batch were rejected.
    #[error("failed to track {failed} of {total} path(s)")]
    TrackFailed {
        /// Number of rejected paths.
        failed: usize,
        /// Number of paths attempted.
        total: usize,
    },

    /// Filesystem failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
