//! Removing previously generated files or directories

use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of a successful removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub path: PathBuf,
    /// Files and directories deleted, the target itself included
    pub entries: usize,
    pub was_dir: bool,
}

/// Resolve `relative` against the project root, falling back to `<root>/src`
pub fn resolve(root: &Path, relative: &str) -> Result<PathBuf> {
    let candidates = [root.join(relative), root.join("src").join(relative)];
    candidates
        .into_iter()
        .find(|p| p.symlink_metadata().is_ok())
        .ok_or_else(|| ScaffoldError::PathNotFound(root.join(relative)))
}

/// Number of entries a removal of `path` will delete
pub fn count_entries(path: &Path) -> usize {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .count()
}

/// Delete a file or directory tree under the project
pub fn remove(root: &Path, relative: &str) -> Result<Removal> {
    let path = resolve(root, relative)?;
    let entries = count_entries(&path);
    let was_dir = path.is_dir();

    if was_dir {
        fs::remove_dir_all(&path).map_err(|e| ScaffoldError::io("remove directory", &path, e))?;
    } else {
        fs::remove_file(&path).map_err(|e| ScaffoldError::io("remove file", &path, e))?;
    }

    Ok(Removal {
        path,
        entries,
        was_dir,
    })
}
