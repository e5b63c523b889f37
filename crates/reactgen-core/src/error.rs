//! Error type shared by the collector, generators, emitter and remover

use std::path::PathBuf;

/// Errors raised while collecting answers or producing files
#[derive(thiserror::Error, Debug)]
pub enum ScaffoldError {
    /// User input rejected by a validation rule (shown inline by prompts)
    #[error("{message}")]
    Validation { field: &'static str, message: String },

    /// A choice outside the set a generator accepts
    #[error("Invalid file extension for {generator}: .{kind} (expected {expected})")]
    UnsupportedFileKind {
        generator: &'static str,
        kind: String,
        expected: &'static str,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
