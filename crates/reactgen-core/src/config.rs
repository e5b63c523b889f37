//! Project-level defaults (`reactgen.yaml`) and project root resolution

use crate::error::{Result, ScaffoldError};
use crate::request::{FileKind, FormLibrary, HttpClient, StyleKind};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up at the project root
pub const CONFIG_FILE: &str = "reactgen.yaml";

/// Environment variable overriding the project root
pub const ROOT_ENV: &str = "REACTGEN_ROOT";

/// Default answers for prompts; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Falls back to project detection (tsx with a tsconfig.json, jsx otherwise)
    #[serde(default)]
    pub file_kind: Option<FileKind>,

    #[serde(default)]
    pub style: Option<StyleKind>,

    #[serde(default)]
    pub http_client: Option<HttpClient>,

    #[serde(default)]
    pub form_library: Option<FormLibrary>,

    /// JavaScript expression for generated API services
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub paths: Paths,
}

/// Default output directories
///
/// `hooks` is relative to the project root, the others to `src`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub components: String,
    pub hooks: String,
    pub contexts: String,
    pub services: String,
    pub forms: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            components: "components".to_string(),
            hooks: "src/hooks".to_string(),
            contexts: "contexts".to_string(),
            services: "services".to_string(),
            forms: "components".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Load `reactgen.yaml` from `root`; a missing file yields the defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ScaffoldError::io("read", &path, e))?;
        Self::parse(&content).map_err(|source| ScaffoldError::Config { path, source })
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

/// Pick the project root: explicit flag, then `REACTGEN_ROOT`, then the cwd
pub fn resolve_root(flag: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| ScaffoldError::io("read current directory", ".", e))?;
    Ok(pick_root(flag, std::env::var_os(ROOT_ENV), &cwd))
}

fn pick_root(flag: Option<PathBuf>, env: Option<OsString>, cwd: &Path) -> PathBuf {
    let chosen = flag
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| cwd.to_path_buf());

    if chosen.is_absolute() {
        chosen
    } else {
        cwd.join(chosen)
    }
}
