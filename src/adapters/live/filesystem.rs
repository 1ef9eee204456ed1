//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;
use crate::ports::PortError;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>, PortError> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                entries.push(name.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories() {
        let dir = std::env::temp_dir().join("gpm_live_fs_write_nested");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("a").join("b").join("file.json");

        LiveFileSystem.write(&path, "{}").unwrap();

        assert_eq!(LiveFileSystem.read_to_string(&path).unwrap(), "{}");
        assert!(LiveFileSystem.is_dir(&dir.join("a")));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn list_dir_is_sorted() {
        let dir = std::env::temp_dir().join("gpm_live_fs_list_sorted");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("zeta")).unwrap();
        std::fs::create_dir_all(dir.join("alpha")).unwrap();

        let names = LiveFileSystem.list_dir(&dir).unwrap();

        assert_eq!(names, vec!["alpha", "zeta"]);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
