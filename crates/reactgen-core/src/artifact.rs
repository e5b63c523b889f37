//! Generated output files

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Source,
    Stylesheet,
    Test,
}

/// One generated file: a path relative to the project root and its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub kind: ArtifactKind,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn source(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, ArtifactKind::Source)
    }

    /// Absolute location under the given project root
    pub fn target(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

/// Build a relative path from `/`-separated segments
pub(crate) fn rel_path<I, S>(segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut path = PathBuf::new();
    for segment in segments {
        for part in segment.as_ref().split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
    }
    path
}
