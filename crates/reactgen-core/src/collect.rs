//! Answer validation and normalization
//!
//! Every raw string typed by the user (or passed as a flag) goes through one
//! of these functions before it becomes part of a request. Prompts call them
//! from their `validate` callbacks so a rejection becomes an inline
//! re-prompt; non-interactive flags surface the same message as an error.

use crate::error::{Result, ScaffoldError};
use crate::request::FileKind;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static PASCAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());

static HOOK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^use[A-Z][a-zA-Z]*$").unwrap());

// A plain JavaScript identifier, no unicode escapes
static IDENTIFIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// True when `name` can be used as a JavaScript binding
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(name)
}

/// Reject empty (or whitespace-only) input, returning the trimmed value
pub fn required<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScaffoldError::validation(field, format!("{} is required", field)));
    }
    Ok(trimmed)
}

/// Validate a component, context or form name (`^[A-Z][A-Za-z0-9]*$`)
///
/// `field` is the prompt label, e.g. "Component name".
pub fn pascal_name(field: &'static str, raw: &str) -> Result<String> {
    let name = required(field, raw)?;
    if !PASCAL_PATTERN.is_match(name) {
        return Err(ScaffoldError::validation(
            field,
            format!(
                "{} must start with uppercase letter and contain only letters and numbers",
                field
            ),
        ));
    }
    Ok(name.to_string())
}

/// Normalize and validate a hook name
///
/// A trailing `.ts`/`.js` is dropped and a missing `use` prefix is added,
/// so `auth` and `useAuth.ts` both become `useAuth`. The prefix only counts
/// when an uppercase letter follows it: `userProfile` becomes `useUserProfile`.
pub fn hook_name(raw: &str) -> Result<String> {
    let field = "Hook name";
    let trimmed = required(field, raw)?;
    let stem = trimmed
        .strip_suffix(".ts")
        .or_else(|| trimmed.strip_suffix(".js"))
        .unwrap_or(trimmed);

    let prefixed = stem
        .strip_prefix("use")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()));
    let name = if prefixed {
        stem.to_string()
    } else {
        let mut chars = stem.chars();
        match chars.next() {
            Some(first) => format!("use{}{}", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    };

    if !HOOK_PATTERN.is_match(&name) {
        return Err(ScaffoldError::validation(
            field,
            "Hook name must be in format \"useHookName\" (e.g., useAuth, useMyHook)",
        ));
    }
    Ok(name)
}

/// Parse a comma-separated list of hook names; empty entries are skipped
pub fn hook_list(raw: &str) -> Result<Vec<String>> {
    let mut hooks = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let name = hook_name(entry)?;
        if !hooks.contains(&name) {
            hooks.push(name);
        }
    }
    Ok(hooks)
}

/// Service base name: required, and usable as the `<name>Service` binding
pub fn service_name(raw: &str) -> Result<String> {
    let field = "Service name";
    let name = required(field, raw)?;
    if name.chars().any(char::is_whitespace) {
        return Err(ScaffoldError::validation(
            field,
            "Service name must not contain spaces",
        ));
    }
    if !is_identifier(name) {
        return Err(ScaffoldError::validation(
            field,
            "Service name may only contain letters, numbers, _ and $, and must not start with a number",
        ));
    }
    Ok(name.to_string())
}

/// Normalize a relative directory: trims whitespace and slashes, drops `.`
/// segments and rejects anything that could leave the project
pub fn relative_path(field: &'static str, raw: &str) -> Result<String> {
    let trimmed = required(field, raw)?;
    let stripped = trimmed.trim_matches(|c| c == '/' || c == '\\');

    let mut segments = Vec::new();
    for component in Path::new(stripped).components() {
        match component {
            Component::Normal(seg) => segments.push(seg.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(ScaffoldError::InvalidPath {
                    path: trimmed.to_string(),
                    reason: "parent directory segments are not allowed",
                })
            }
            Component::Prefix(_) | Component::RootDir => {
                return Err(ScaffoldError::InvalidPath {
                    path: trimmed.to_string(),
                    reason: "path must be relative to the project",
                })
            }
        }
    }

    if segments.is_empty() {
        return Err(ScaffoldError::InvalidPath {
            path: trimmed.to_string(),
            reason: "path points at the project itself",
        });
    }
    Ok(segments.join("/"))
}

/// Validate the target of a test-suite command: an existing
/// `.js/.jsx/.ts/.tsx` file under `<root>/src`
pub fn test_target(root: &Path, raw: &str) -> Result<String> {
    let field = "Component path";
    let relative = relative_path(field, raw)?;

    let has_valid_extension = Path::new(&relative)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(FileKind::from_extension)
        .is_some();
    if !has_valid_extension {
        return Err(ScaffoldError::validation(
            field,
            "Component file must have a valid extension (.js, .jsx, .ts, .tsx)",
        ));
    }

    let stem = Path::new(&relative)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    if !is_identifier(stem) {
        return Err(ScaffoldError::validation(
            field,
            "Component file name must be a valid identifier (e.g. Button.tsx, not Button.test.tsx)",
        ));
    }

    let full = root.join("src").join(&relative);
    if !full.is_file() {
        return Err(ScaffoldError::validation(
            field,
            "Component file does not exist",
        ));
    }
    Ok(relative)
}

/// Validate the target of a removal command; returns the resolved path
pub fn removal_target(root: &Path, raw: &str) -> Result<PathBuf> {
    let relative = relative_path("Path", raw)?;
    crate::remover::resolve(root, &relative).map_err(|err| match err {
        ScaffoldError::PathNotFound(_) => ScaffoldError::validation(
            "Path",
            "Path does not exist in root or src directory",
        ),
        other => other,
    })
}

/// Reject an empty multi-select answer
pub fn non_empty<T: Ord + Clone>(field: &'static str, items: &[T]) -> Result<BTreeSet<T>> {
    if items.is_empty() {
        return Err(ScaffoldError::validation(
            field,
            format!("Select at least one {}", field.to_lowercase()),
        ));
    }
    Ok(items.iter().cloned().collect())
}
