//! Deriving a [`RegistryEntry`] from a working-tree path.

use std::path::{Path, PathBuf};

use super::RegistryEntry;
use crate::error::GpmError;
use crate::ports::FileSystem;

const GIT_MARKER: &str = ".git";

/// Walks from `path` up to the filesystem root and returns the first
/// directory containing a `.git` entry.
pub fn find_repository_root(fs: &dyn FileSystem, path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|dir| fs.exists(&dir.join(GIT_MARKER)))
        .map(Path::to_path_buf)
}

/// `true` if `dir` itself holds a `.git` entry.
pub fn is_repository_root(fs: &dyn FileSystem, dir: &Path) -> bool {
    fs.exists(&dir.join(GIT_MARKER))
}

/// Extracts the `url` of the `[remote "origin"]` section from git config text.
#[must_use]
pub fn parse_origin_url(config: &str) -> Option<String> {
    let mut in_origin = false;

    for raw in config.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[') {
            let header = header.trim_end_matches(']').trim();
            in_origin = is_origin_section(header);
            continue;
        }
        if !in_origin {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim().eq_ignore_ascii_case("url") {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            return Some(value.to_string());
        }
    }

    None
}

fn is_origin_section(header: &str) -> bool {
    let Some((section, subsection)) = header.split_once(char::is_whitespace) else {
        return false;
    };
    section.eq_ignore_ascii_case("remote") && subsection.trim() == "\"origin\""
}

/// Owner segment of a remote URL: after the last `:`, before the first `/`.
///
/// `git@github.com:octo/demo.git` gives `octo`. Other URL shapes produce
/// whatever the slicing yields; `https://github.com/octo/demo` gives `""`.
#[must_use]
pub fn author_from_url(url: &str) -> String {
    let after_colon = url.rsplit(':').next().unwrap_or(url);
    after_colon.split('/').next().unwrap_or_default().to_string()
}

/// Final path component as a registry name.
#[must_use]
pub fn name_from_path(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Builds the registry entry for the repository rooted at `path`.
///
/// `path` should be absolute and must itself be the repository root; a
/// subdirectory of a repository is rejected.
///
/// # Errors
///
/// Returns [`GpmError::NotARepository`] unless `path` is a repository root
/// and [`GpmError::MissingOrigin`] if the config has no origin url.
pub fn entry_from_path(fs: &dyn FileSystem, path: &Path) -> Result<RegistryEntry, GpmError> {
    let root = find_repository_root(fs, path)
        .filter(|root| root == path)
        .ok_or_else(|| GpmError::NotARepository(path.to_path_buf()))?;
    let config_path = root.join(GIT_MARKER).join("config");
    let config = fs.read_to_string(&config_path).unwrap_or_default();
    let url = parse_origin_url(&config).ok_or_else(|| GpmError::MissingOrigin(root.clone()))?;

    Ok(RegistryEntry {
        name: name_from_path(&root),
        author: author_from_url(&url),
        url,
        path: root.to_string_lossy().into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemFs;

    const CONFIG: &str = r#"[core]
	repositoryformatversion = 0
	bare = false
[remote "upstream"]
	url = git@github.com:someone-else/demo.git
[remote "origin"]
	url = git@github.com:octo/demo.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[branch "main"]
	remote = origin
"#;

    #[test]
    fn origin_url_is_read_from_its_section() {
        assert_eq!(parse_origin_url(CONFIG).as_deref(), Some("git@github.com:octo/demo.git"));
    }

    #[test]
    fn missing_origin_is_none() {
        let config = "[core]\n\tbare = false\n[remote \"upstream\"]\n\turl = x\n";
        assert!(parse_origin_url(config).is_none());
    }

    #[test]
    fn comments_and_quotes_are_handled() {
        let config = "; comment\n[remote \"origin\"]\n# url = wrong\n  URL = \"https://h/o/r\"\n";
        assert_eq!(parse_origin_url(config).as_deref(), Some("https://h/o/r"));
    }

    #[test]
    fn author_is_owner_of_scp_style_url() {
        assert_eq!(author_from_url("git@github.com:octo/demo.git"), "octo");
    }

    #[test]
    fn author_of_https_url_is_best_effort() {
        assert_eq!(author_from_url("https://github.com/octo/demo"), "");
        assert_eq!(author_from_url("plain"), "plain");
    }

    #[test]
    fn root_is_found_walking_upward() {
        let fs = MemFs::new();
        fs.insert("/work/demo/.git/config", CONFIG);

        let root = find_repository_root(&fs, Path::new("/work/demo/src/deep"));

        assert_eq!(root, Some(PathBuf::from("/work/demo")));
        assert!(is_repository_root(&fs, Path::new("/work/demo")));
        assert!(!is_repository_root(&fs, Path::new("/work/demo/src")));
    }

    #[test]
    fn entry_is_derived_from_root_and_config() {
        let fs = MemFs::new();
        fs.insert("/work/demo/.git/config", CONFIG);

        let entry = entry_from_path(&fs, Path::new("/work/demo")).unwrap();

        assert_eq!(entry.name, "demo");
        assert_eq!(entry.author, "octo");
        assert_eq!(entry.url, "git@github.com:octo/demo.git");
        assert_eq!(entry.path, "/work/demo");
    }

    #[test]
    fn plain_directory_is_not_a_repository() {
        let fs = MemFs::new();
        fs.insert("/work/plain/readme.md", "hi");

        let err = entry_from_path(&fs, Path::new("/work/plain")).unwrap_err();

        assert!(matches!(err, GpmError::NotARepository(p) if p == Path::new("/work/plain")));
    }

    #[test]
    fn subdirectory_of_repository_is_rejected() {
        let fs = MemFs::new();
        fs.insert("/work/demo/.git/config", CONFIG);
        fs.insert("/work/demo/src/main.rs", "fn main() {}");

        let err = entry_from_path(&fs, Path::new("/work/demo/src")).unwrap_err();

        assert!(matches!(err, GpmError::NotARepository(p) if p == Path::new("/work/demo/src")));
    }

    #[test]
    fn repository_without_origin_is_rejected() {
        let fs = MemFs::new();
        fs.insert("/work/local/.git/config", "[core]\n\tbare = false\n");

        let err = entry_from_path(&fs, Path::new("/work/local")).unwrap_err();

        assert!(matches!(err, GpmError::MissingOrigin(_)));
    }
}
