//! Module root checks.
//!
//! Most commands only make sense inside a module. A directory counts as a
//! module when a metadata.json is found in it or one of its parents. Some
//! commands (for example converting an existing project) also accept a
//! directory that merely looks like a module because it contains one of
//! the conventional module folders.

use std::path::{Path, PathBuf};

use crate::error::{ModkitError, Result};

use super::metadata::find_module_root;

/// Folders that mark a directory as having a module layout.
pub const MODULE_FOLDERS: [&str; 6] = [
    "manifests",
    "lib",
    "tasks",
    "facts.d",
    "functions",
    "types",
];

/// Default error when the current directory is not a module.
pub const NOT_IN_MODULE_MESSAGE: &str =
    "This command must be run from inside a valid module (no metadata.json found).";

/// Checks whether a working directory is a module.
///
/// # Example
///
/// ```
/// use modkit::module::DirectoryLayoutChecker;
///
/// let temp = tempfile::TempDir::new().unwrap();
/// std::fs::create_dir(temp.path().join("manifests")).unwrap();
///
/// let checker = DirectoryLayoutChecker::new(temp.path());
/// assert!(checker.ensure_in_module(true).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryLayoutChecker {
    cwd: PathBuf,
    message: Option<String>,
}

impl DirectoryLayoutChecker {
    /// Create a checker for the given working directory.
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            message: None,
        }
    }

    /// Replace the default error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Succeed if the working directory is inside a module.
    ///
    /// With `check_layout`, a directory without metadata.json still passes
    /// when it contains any of [`MODULE_FOLDERS`].
    pub fn ensure_in_module(&self, check_layout: bool) -> Result<()> {
        if let Some(root) = find_module_root(&self.cwd) {
            tracing::debug!("Module root: {}", root.display());
            return Ok(());
        }

        if check_layout && self.has_module_layout() {
            tracing::debug!("No metadata.json, but {} has a module layout", self.cwd.display());
            return Ok(());
        }

        Err(ModkitError::NotInModule {
            message: self
                .message
                .clone()
                .unwrap_or_else(|| NOT_IN_MODULE_MESSAGE.to_string()),
        })
    }

    /// True if any conventional module folder exists in the working directory.
    pub fn has_module_layout(&self) -> bool {
        MODULE_FOLDERS
            .iter()
            .any(|dir| self.cwd.join(dir).is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn assert_not_in_module(result: Result<()>) {
        match result {
            Err(ModkitError::NotInModule { message }) => {
                assert!(message.contains("no metadata.json found"), "{}", message)
            }
            other => panic!("expected NotInModule, got {:?}", other),
        }
    }

    #[test]
    fn metadata_json_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.json"), "{}").unwrap();
        let checker = DirectoryLayoutChecker::new(temp.path());
        assert!(checker.ensure_in_module(false).is_ok());
        assert!(checker.ensure_in_module(true).is_ok());
    }

    #[test]
    fn metadata_json_in_parent_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.json"), "{}").unwrap();
        let sub = temp.path().join("server");
        fs::create_dir(&sub).unwrap();
        assert!(DirectoryLayoutChecker::new(&sub).ensure_in_module(false).is_ok());
    }

    #[test]
    fn each_module_folder_passes_with_layout_check() {
        for dir in MODULE_FOLDERS {
            let temp = TempDir::new().unwrap();
            fs::create_dir(temp.path().join(dir)).unwrap();
            let checker = DirectoryLayoutChecker::new(temp.path());
            assert!(checker.ensure_in_module(true).is_ok(), "folder {}", dir);
        }
    }

    #[test]
    fn no_layout_fails_with_layout_check() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        assert_not_in_module(DirectoryLayoutChecker::new(temp.path()).ensure_in_module(true));
    }

    #[test]
    fn module_folders_ignored_without_layout_check() {
        let temp = TempDir::new().unwrap();
        for dir in MODULE_FOLDERS {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        assert_not_in_module(DirectoryLayoutChecker::new(temp.path()).ensure_in_module(false));
    }

    #[test]
    fn file_named_like_folder_does_not_count() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("manifests"), "").unwrap();
        assert_not_in_module(DirectoryLayoutChecker::new(temp.path()).ensure_in_module(true));
    }

    #[test]
    fn custom_message() {
        let temp = TempDir::new().unwrap();
        let err = DirectoryLayoutChecker::new(temp.path())
            .with_message("Run this from a module (no metadata.json found).")
            .ensure_in_module(false)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Run this from a module (no metadata.json found)."
        );
    }
}
