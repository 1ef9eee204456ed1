//! Runtime configuration, built once at startup and passed to every command.
//!
//! Directory resolution:
//!
//! ```text
//! cache:  $GPM_CACHE_DIR  or <platform cache dir>/gpm   (repos.json)
//! config: $GPM_CONFIG_DIR or <platform config dir>/gpm  (config.yaml)
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GpmError;
use crate::ports::FileSystem;

const APP_DIR: &str = "gpm";
const REGISTRY_FILE: &str = "repos.json";
const SETTINGS_FILE: &str = "config.yaml";
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Options for `gpm status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSettings {
    /// Print a line for empty categories too.
    pub always_list_clean: bool,
}

impl Default for StatusSettings {
    fn default() -> Self {
        Self { always_list_clean: true }
    }
}

/// Options for the GitHub commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubSettings {
    /// Bearer token for the REST API.
    pub auth_token: Option<String>,
    /// API root.
    pub api_url: String,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self { auth_token: None, api_url: DEFAULT_API_URL.to_string() }
    }
}

/// Contents of `config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `status:` section.
    pub status: StatusSettings,
    /// `github:` section.
    pub github: GitHubSettings,
}

impl Settings {
    /// Parses settings from YAML text. Empty text yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(text: &str) -> Result<Self, GpmError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| GpmError::Config(format!("invalid config.yaml: {e}")))
    }
}

/// Resolved configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the registry file.
    pub cache_dir: PathBuf,
    /// Directory holding `config.yaml`.
    pub config_dir: PathBuf,
    /// Parsed settings.
    pub settings: Settings,
}

impl Config {
    /// Resolves directories from the environment and loads `config.yaml`.
    ///
    /// A `.env` file in the working directory is loaded first, so
    /// `GPM_AUTH_TOKEN` and the directory overrides may live there.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed.
    pub fn load(fs: &dyn FileSystem) -> Result<Self, GpmError> {
        let _ = dotenvy::dotenv();

        let cache_dir = dir_from_env("GPM_CACHE_DIR", dirs::cache_dir());
        let config_dir = dir_from_env("GPM_CONFIG_DIR", dirs::config_dir());
        let mut config = Self::with_dirs(fs, cache_dir, config_dir)?;
        if let Ok(token) = env::var("GPM_AUTH_TOKEN") {
            if !token.is_empty() {
                config.settings.github.auth_token = Some(token);
            }
        }
        Ok(config)
    }

    /// Builds a config for explicit directories, reading settings if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed.
    pub fn with_dirs(
        fs: &dyn FileSystem,
        cache_dir: PathBuf,
        config_dir: PathBuf,
    ) -> Result<Self, GpmError> {
        let settings_path = config_dir.join(SETTINGS_FILE);
        let settings = if fs.exists(&settings_path) {
            let text = fs
                .read_to_string(&settings_path)
                .map_err(|e| GpmError::Config(format!("failed to read {}: {e}", settings_path.display())))?;
            Settings::from_yaml(&text)?
        } else {
            Settings::default()
        };
        tracing::debug!(cache = %cache_dir.display(), config = %config_dir.display(), "resolved directories");
        Ok(Self { cache_dir, config_dir, settings })
    }

    /// Path of the registry JSON file.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.cache_dir.join(REGISTRY_FILE)
    }

    /// Path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }
}

fn dir_from_env(var: &str, platform_root: Option<PathBuf>) -> PathBuf {
    match env::var_os(var) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => platform_root.unwrap_or_else(|| Path::new(".").to_path_buf()).join(APP_DIR),
    }
}
