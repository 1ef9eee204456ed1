//! Git port for working-tree queries.

use std::path::Path;

use super::PortError;

/// Runs read-only git queries against a working tree.
pub trait GitRepo: Send + Sync {
    /// Returns the stdout of `git status --porcelain --branch` run in `dir`,
    /// split into lines.
    ///
    /// # Errors
    ///
    /// Returns an error if git cannot be spawned or exits non-zero.
    fn status_porcelain(&self, dir: &Path) -> Result<Vec<String>, PortError>;
}
