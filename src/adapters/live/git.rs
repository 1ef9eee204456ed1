//! Live git adapter using `git` CLI commands.

use std::path::Path;
use std::process::Command;

use crate::ports::git::GitRepo;
use crate::ports::PortError;

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

impl GitRepo for LiveGitRepo {
    fn status_porcelain(&self, dir: &Path) -> Result<Vec<String>, PortError> {
        tracing::debug!(dir = %dir.display(), "running git status --porcelain --branch");
        let output = Command::new("git")
            .args(["status", "--porcelain", "--branch"])
            .current_dir(dir)
            .output()
            .map_err(|e| format!("failed to run git: {e}"))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("git status failed: {}", stderr.trim()).into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).lines().map(String::from).collect())
    }
}
