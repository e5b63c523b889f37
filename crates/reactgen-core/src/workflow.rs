//! Running a validated request against a project: generate, emit, report

use crate::emitter;
use crate::error::Result;
use crate::generators::{self, test_suite};
use crate::remover::{self, Removal};
use crate::request::GenerationRequest;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// What a finished command did on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated {
        noun: &'static str,
        files: Vec<PathBuf>,
    },
    Removed(Removal),
}

/// Carry out one request under `root`
pub fn execute(root: &Path, request: &GenerationRequest) -> Result<Outcome> {
    match request {
        GenerationRequest::Removal(req) => remover::remove(root, &req.target).map(Outcome::Removed),
        _ => {
            if let GenerationRequest::TestSuite(req) = request {
                test_suite::ensure_target(root, req)?;
            }
            let artifacts = generators::generate(request)?;
            let files = emitter::emit(root, &artifacts)?;
            Ok(Outcome::Generated {
                noun: request.noun(),
                files,
            })
        }
    }
}

/// Human-readable summary lines for an outcome
pub fn summary(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Generated { noun, files } => {
            let mut lines = vec![format!(
                "{} {}",
                "✓".green(),
                format!("{} created successfully!", noun).bold()
            )];
            if let Some(location) = files.first().and_then(|f| f.parent()) {
                lines.push(format!("  {} {}", "Location:".dimmed(), location.display()));
            }
            lines.push(format!("  {}", "Generated files:".dimmed()));
            for file in files {
                lines.push(format!("    {} {}", "•".blue(), file.display()));
            }
            lines
        }
        Outcome::Removed(removal) => {
            let what = if removal.was_dir { "directory" } else { "file" };
            vec![format!(
                "{} Removed {} {} ({} {})",
                "✓".green(),
                what,
                removal.path.display(),
                removal.entries,
                if removal.entries == 1 { "entry" } else { "entries" }
            )]
        }
    }
}

pub fn print_summary(outcome: &Outcome) {
    println!();
    for line in summary(outcome) {
        println!("  {}", line);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::request::{
        ComponentRequest, FileKind, RemovalRequest, StyleKind, TestKind, TestSuiteRequest,
    };
    use std::fs;
    use tempfile::tempdir;

    fn component() -> GenerationRequest {
        GenerationRequest::Component(ComponentRequest {
            name: "Button".to_string(),
            path: "components".to_string(),
            file_kind: FileKind::Tsx,
            style: StyleKind::Scss,
            props: true,
            state: false,
            effect: false,
            hooks: Vec::new(),
            hooks_dir: "src/hooks".to_string(),
            test: true,
        })
    }

    #[test]
    fn test_component_then_test_suite_then_removal() {
        colored::control::set_override(false);
        let dir = tempdir().unwrap();

        let outcome = execute(dir.path(), &component()).unwrap();
        let Outcome::Generated { noun, files } = &outcome else {
            panic!("expected generated files");
        };
        assert_eq!(*noun, "Component");
        assert_eq!(files.len(), 3);
        assert!(summary(&outcome).iter().any(|l| l.contains("Button.scss")));

        // Test suite targets the freshly generated component and overwrites its test
        let suite = GenerationRequest::TestSuite(TestSuiteRequest {
            target: "components/Button/Button.tsx".to_string(),
            kinds: [TestKind::Unit, TestKind::Snapshot].into_iter().collect(),
            mocks: true,
        });
        execute(dir.path(), &suite).unwrap();
        let test_file = dir.path().join("src/components/Button/Button.test.tsx");
        let content = fs::read_to_string(test_file).unwrap();
        assert!(content.contains("import Button from './Button';"));
        assert!(content.contains("toMatchSnapshot()"));

        let removal = GenerationRequest::Removal(RemovalRequest {
            target: "components/Button".to_string(),
        });
        let outcome = execute(dir.path(), &removal).unwrap();
        assert!(matches!(&outcome, Outcome::Removed(r) if r.entries == 4));
        assert!(summary(&outcome)[0].contains("(4 entries)"));
        assert!(!dir.path().join("src/components/Button").exists());
    }

    #[test]
    fn test_test_suite_for_missing_target_writes_nothing() {
        let dir = tempdir().unwrap();
        let suite = GenerationRequest::TestSuite(TestSuiteRequest {
            target: "components/Ghost/Ghost.jsx".to_string(),
            kinds: [TestKind::Unit].into_iter().collect(),
            mocks: false,
        });
        let err = execute(dir.path(), &suite).unwrap_err();
        assert!(matches!(err, ScaffoldError::PathNotFound(_)));
        assert!(!dir.path().join("src").exists());
    }
}
