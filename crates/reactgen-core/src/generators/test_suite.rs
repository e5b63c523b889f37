//! Test suite generator for an existing component file

use crate::artifact::{rel_path, Artifact, ArtifactKind};
use crate::collect;
use crate::error::{Result, ScaffoldError};
use crate::request::{TestKind, TestSuiteRequest};
use crate::template::{lines, Template};
use std::path::{Path, PathBuf};

/// Fail with `PathNotFound` unless the target still exists under `<root>/src`
///
/// The file stem becomes the imported binding, so it must be an identifier.
pub fn ensure_target(root: &Path, req: &TestSuiteRequest) -> Result<()> {
    let source = source_path(req);
    if !collect::is_identifier(&stem(&source)) {
        return Err(ScaffoldError::validation(
            "Component path",
            "Component file name must be a valid identifier (e.g. Button.tsx, not Button.test.tsx)",
        ));
    }
    let full = root.join(source);
    if !full.is_file() {
        return Err(ScaffoldError::PathNotFound(full));
    }
    Ok(())
}

fn source_path(req: &TestSuiteRequest) -> PathBuf {
    rel_path(["src", req.target.as_str()])
}

pub fn generate(req: &TestSuiteRequest) -> Vec<Artifact> {
    let source = source_path(req);
    let stem = stem(&source);
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "js".to_string());

    let path = source
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
        .join(format!("{stem}.test.{ext}"));
    vec![Artifact::new(path, render(req, &stem), ArtifactKind::Test)]
}

fn stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn render_block(kind: TestKind, stem: &str, props: &str) -> String {
    let element = format!("<{stem}{props} />");
    match kind {
        TestKind::Unit => lines([
            "it('renders successfully', () => {".to_string(),
            format!("  render({element});"),
            format!("  expect(screen.getByText(/{stem}/)).toBeInTheDocument();"),
            "});".to_string(),
        ]),
        TestKind::Snapshot => lines([
            "it('matches snapshot', () => {".to_string(),
            format!("  const {{ container }} = render({element});"),
            "  expect(container).toMatchSnapshot();".to_string(),
            "});".to_string(),
        ]),
        TestKind::Integration => lines([
            "it('handles user interactions', async () => {".to_string(),
            format!("  render({element});"),
            "  // Add interaction tests here".to_string(),
            "});".to_string(),
        ]),
    }
}

fn render(req: &TestSuiteRequest, stem: &str) -> String {
    let props = if req.mocks { " {...mockProps}" } else { "" };

    let mut imports = vec![
        "import React from 'react';".to_string(),
        "import { render, screen } from '@testing-library/react';".to_string(),
    ];
    if req.kinds.contains(&TestKind::Integration) {
        imports.push("import userEvent from '@testing-library/user-event';".to_string());
    }
    imports.push(format!("import {stem} from './{stem}';"));

    let blocks = Template::new().sections("test", req.kinds.iter(), |kind| {
        render_block(*kind, stem, props)
    });

    Template::new()
        .section("imports", lines(imports))
        .section_if(req.mocks, "mocks", || {
            lines([
                "// Mocks",
                "const mockProps = {",
                "  // Add mock props here",
                "};",
            ])
        })
        .section(
            "suite",
            format!(
                "describe('{stem}', () => {{\n{}}});",
                blocks.render_indented(2)
            ),
        )
        .render()
}
