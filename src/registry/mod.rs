//! Repository registry — the persisted set of tracked repositories.
//!
//! The registry is a single JSON object keyed by repository name:
//!
//! ```text
//! {
//!     "<name>": { "author": "...", "url": "...", "path": "..." }
//! }
//! ```
//!
//! The whole map is loaded, mutated, and rewritten on every update. There
//! is no locking; concurrent writers race and the last one wins.

pub mod discovery;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::GpmError;

/// A tracked repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Final path component of `path`; the registry key.
    #[serde(skip)]
    pub name: String,
    /// Owner segment of the origin URL.
    pub author: String,
    /// Origin remote URL.
    pub url: String,
    /// Absolute path of the working tree.
    pub path: String,
}

/// Tracked repositories keyed by name.
pub type Repositories = BTreeMap<String, RegistryEntry>;

/// Persistence layer for the registry file.
///
/// All I/O goes through `ctx.fs`.
pub struct Registry<'a> {
    ctx: &'a ServiceContext,
    path: PathBuf,
}

impl<'a> Registry<'a> {
    /// Creates a registry backed by the JSON file at `path`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, path: &Path) -> Self {
        Self { ctx, path: path.to_path_buf() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every entry.
    ///
    /// A missing, unreadable, empty, or malformed file is an empty registry.
    #[must_use]
    pub fn load(&self) -> Repositories {
        if !self.ctx.fs.exists(&self.path) {
            return Repositories::new();
        }
        let contents = match self.ctx.fs.read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "registry unreadable: {e}");
                return Repositories::new();
            }
        };
        if contents.trim().is_empty() {
            return Repositories::new();
        }
        match serde_json::from_str::<Repositories>(&contents) {
            Ok(mut entries) => {
                for (name, entry) in &mut entries {
                    entry.name.clone_from(name);
                }
                entries
            }
            Err(e) => {
                tracing::debug!(path = %self.path.display(), "registry malformed, treating as empty: {e}");
                Repositories::new()
            }
        }
    }

    /// Inserts or overwrites the entry under `entry.name` and rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn add(&self, entry: RegistryEntry) -> Result<(), GpmError> {
        let mut entries = self.load();
        tracing::debug!(name = %entry.name, path = %entry.path, "caching repository");
        entries.insert(entry.name.clone(), entry);
        self.save(&entries)
    }

    /// Returns the tracked repositories.
    ///
    /// # Errors
    ///
    /// Returns [`GpmError::NoTrackedRepositories`] if the registry is empty.
    pub fn list(&self) -> Result<Repositories, GpmError> {
        let entries = self.load();
        if entries.is_empty() {
            return Err(GpmError::NoTrackedRepositories);
        }
        Ok(entries)
    }

    /// Looks up a single tracked repository by name.
    ///
    /// # Errors
    ///
    /// Returns [`GpmError::NoTrackedRepositories`] on an empty registry and
    /// [`GpmError::UnknownRepository`] if the name is not tracked.
    pub fn get(&self, name: &str) -> Result<RegistryEntry, GpmError> {
        self.list()?
            .remove(name)
            .ok_or_else(|| GpmError::UnknownRepository(name.to_string()))
    }

    /// Truncates the backing file to empty content. The file is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be written.
    pub fn clear(&self) -> Result<(), GpmError> {
        if !self.ctx.fs.exists(&self.path) {
            return Ok(());
        }
        self.ctx.fs.write(&self.path, "").map_err(|e| {
            GpmError::Io(std::io::Error::other(format!(
                "failed to clear {}: {e}",
                self.path.display()
            )))
        })
    }

    fn save(&self, entries: &Repositories) -> Result<(), GpmError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut serializer)?;
        let json = String::from_utf8_lossy(&buf);
        self.ctx.fs.write(&self.path, &json).map_err(|e| {
            GpmError::Io(std::io::Error::other(format!(
                "failed to write {}: {e}",
                self.path.display()
            )))
        })
    }
}
