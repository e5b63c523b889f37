//! React project detection

use crate::request::FileKind;
use std::path::{Path, PathBuf};

/// What was found at the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub root: PathBuf,
    pub has_package_json: bool,
    pub has_tsconfig: bool,
    pub has_src: bool,
}

impl ProjectInfo {
    /// TypeScript projects default to tsx, everything else to jsx
    pub fn default_file_kind(&self) -> FileKind {
        if self.has_tsconfig {
            FileKind::Tsx
        } else {
            FileKind::Jsx
        }
    }

    /// Advisory messages about the project layout; never fatal
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.has_package_json {
            warnings.push(format!(
                "No package.json found in {}; is this a React project?",
                self.root.display()
            ));
        }
        if !self.has_src {
            warnings.push("No src directory yet; it will be created".to_string());
        }
        warnings
    }
}

pub fn detect(root: &Path) -> ProjectInfo {
    ProjectInfo {
        root: root.to_path_buf(),
        has_package_json: root.join("package.json").is_file(),
        has_tsconfig: root.join("tsconfig.json").is_file(),
        has_src: root.join("src").is_dir(),
    }
}
