//! In-memory port fakes shared by unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::context::ServiceContext;
use crate::ports::hosting::{HostingApi, HostingFuture, Issue, PullRequest};
use crate::ports::{FileSystem, GitRepo, PortError};

/// In-memory filesystem for testing without touching disk.
///
/// Directories exist implicitly whenever a file lives beneath them.
pub struct MemFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }

    /// Seeds a file.
    pub fn insert(&self, path: &str, contents: &str) {
        self.files.lock().unwrap().insert(PathBuf::from(path), contents.to_string());
    }
}

impl FileSystem for MemFs {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        files.keys().any(|k| k.starts_with(path) && k != path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        let files = self.files.lock().unwrap();
        let mut names: Vec<String> = files
            .keys()
            .filter_map(|k| k.strip_prefix(path).ok())
            .filter_map(|rel| rel.components().next())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }
}

/// Git fake answering `status_porcelain` from canned output per directory.
pub struct ScriptedGit {
    outputs: HashMap<PathBuf, Vec<String>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self { outputs: HashMap::new() }
    }

    /// Registers the status lines returned for `dir`.
    #[must_use]
    pub fn with_status(mut self, dir: &str, lines: &[&str]) -> Self {
        self.outputs.insert(PathBuf::from(dir), lines.iter().map(ToString::to_string).collect());
        self
    }
}

impl GitRepo for ScriptedGit {
    fn status_porcelain(&self, dir: &Path) -> Result<Vec<String>, PortError> {
        self.outputs
            .get(dir)
            .cloned()
            .ok_or_else(|| format!("fatal: not a git repository: {}", dir.display()).into())
    }
}

/// Hosting fake returning fixed records.
pub struct StaticHosting {
    pub pulls: Vec<PullRequest>,
    pub issues: Vec<Issue>,
}

impl HostingApi for StaticHosting {
    fn pull_requests<'a>(
        &'a self,
        _owner: &'a str,
        _repo: &'a str,
    ) -> HostingFuture<'a, Vec<PullRequest>> {
        let pulls = self.pulls.clone();
        Box::pin(async move { Ok(pulls) })
    }

    fn issues<'a>(&'a self, _owner: &'a str, _repo: &'a str) -> HostingFuture<'a, Vec<Issue>> {
        let issues = self.issues.clone();
        Box::pin(async move { Ok(issues) })
    }
}

/// Context over the given filesystem with a git fake that knows no repositories.
pub fn test_context(fs: MemFs) -> ServiceContext {
    ServiceContext { fs: Box::new(fs), git: Box::new(ScriptedGit::new()), hosting: None }
}
