//! Service context bundling all port trait objects.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::git::LiveGitRepo;
use crate::adapters::live::hosting::LiveHostingApi;
use crate::config::Config;
use crate::error::GpmError;
use crate::ports::filesystem::FileSystem;
use crate::ports::git::GitRepo;
use crate::ports::hosting::HostingApi;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests build the
/// struct directly with in-memory fakes.
pub struct ServiceContext {
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Git working-tree queries.
    pub git: Box<dyn GitRepo>,
    /// Hosting API; `None` until a token is configured.
    pub hosting: Option<Box<dyn HostingApi>>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for filesystem and git.
    ///
    /// The hosting port is left unset; see [`ServiceContext::with_hosting`].
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), git: Box::new(LiveGitRepo), hosting: None }
    }

    /// Attaches the live GitHub client configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GpmError::MissingToken`] if no token is configured.
    pub fn with_hosting(mut self, config: &Config) -> Result<Self, GpmError> {
        let github = &config.settings.github;
        let token = github.auth_token.as_deref().ok_or(GpmError::MissingToken)?;
        self.hosting = Some(Box::new(LiveHostingApi::new(&github.api_url, token)));
        Ok(self)
    }

    /// The hosting port.
    ///
    /// # Errors
    ///
    /// Returns [`GpmError::MissingToken`] if no hosting client is attached.
    pub fn hosting(&self) -> Result<&dyn HostingApi, GpmError> {
        self.hosting.as_deref().ok_or(GpmError::MissingToken)
    }
}
