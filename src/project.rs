//! Project layout resolution
//!
//! A bootstrap project lives two levels below the repository root
//! (`<repo>/Platform/<port>`). All path derivation happens here so the
//! individual steps never reason about relative locations themselves.

use std::path::{Path, PathBuf};

use crate::error::{EpubstrapError, Result};

/// Resolved directory layout for one run.
#[derive(Debug, Clone)]
pub struct Project {
    dir: PathBuf,
    root: PathBuf,
}

impl Project {
    /// Resolve from an explicit project directory, or the current directory.
    pub fn locate(project_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match project_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let dir = dunce::canonicalize(&dir).map_err(|e| EpubstrapError::IoError {
            message: format!("{}: {}", dir.display(), e),
        })?;
        let root = dir
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| EpubstrapError::ProjectLayoutInvalid {
                path: dir.display().to_string(),
            })?
            .to_path_buf();
        Ok(Self { dir, root })
    }

    /// The platform port directory the tool runs against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Repository root, two levels above the project directory. Patches are
    /// applied from here.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn vendor_dir(&self) -> PathBuf {
        self.dir.join("vendor")
    }

    pub fn include_dir(&self) -> PathBuf {
        self.dir.join("include")
    }

    pub fn patches_dir(&self) -> PathBuf {
        self.dir.join("patches")
    }

    /// ePub3 library sources under the repository root.
    pub fn epub3_dir(&self) -> PathBuf {
        self.root.join("ePub3")
    }

    /// Bundled third-party sources that feed the include tree.
    pub fn third_party_dir(&self) -> PathBuf {
        self.epub3_dir().join("ThirdParty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_port(root: &Path) -> PathBuf {
        let port = root.join("Platform").join("port");
        std::fs::create_dir_all(&port).unwrap();
        port
    }

    #[test]
    fn test_locate_resolves_root_two_levels_up() {
        let temp = TempDir::new().unwrap();
        let port = fake_port(temp.path());

        let project = Project::locate(Some(port.clone())).unwrap();
        assert_eq!(project.dir(), dunce::canonicalize(&port).unwrap());
        assert_eq!(
            project.root(),
            dunce::canonicalize(temp.path()).unwrap().as_path()
        );
    }

    #[test]
    fn test_locate_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = Project::locate(Some(temp.path().join("does-not-exist")));
        assert!(result.is_err());
    }

    #[test]
    fn test_derived_directories() {
        let temp = TempDir::new().unwrap();
        let port = fake_port(temp.path());

        let project = Project::locate(Some(port)).unwrap();
        assert_eq!(project.vendor_dir(), project.dir().join("vendor"));
        assert_eq!(project.include_dir(), project.dir().join("include"));
        assert_eq!(project.patches_dir(), project.dir().join("patches"));
        assert_eq!(project.epub3_dir(), project.root().join("ePub3"));
        assert_eq!(
            project.third_party_dir(),
            project.root().join("ePub3").join("ThirdParty")
        );
    }
}
