//! Writing generated artifacts to disk

use crate::artifact::Artifact;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Write artifacts under `root` in order, creating parent directories
///
/// Existing files are overwritten. Writes are not transactional: when a
/// later artifact fails, the earlier ones stay on disk.
pub fn emit(root: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let target_path = artifact.target(root);

        // Ensure parent directories exist
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ScaffoldError::io("create directory", parent, e))?;
        }

        fs::write(&target_path, &artifact.content)
            .map_err(|e| ScaffoldError::io("write file", &target_path, e))?;

        written.push(target_path);
    }

    Ok(written)
}
