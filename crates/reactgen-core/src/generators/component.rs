//! React component generator: source file plus optional stylesheet and test

use super::hook::hook_dir;
use crate::artifact::{rel_path, Artifact, ArtifactKind};
use crate::request::{ComponentRequest, StyleKind};
use crate::template::{lines, Template};
use std::path::{Component, Path};

pub fn generate(req: &ComponentRequest) -> Vec<Artifact> {
    let dir = rel_path(["src", req.path.as_str(), req.name.as_str()]);
    let ext = req.file_kind.extension();

    let mut artifacts = vec![Artifact::source(
        dir.join(format!("{}.{}", req.name, ext)),
        render_source(req),
    )];

    if let Some(style_ext) = req.style.stylesheet_extension() {
        artifacts.push(Artifact::new(
            dir.join(format!("{}.{}", req.name, style_ext)),
            render_stylesheet(&req.name),
            ArtifactKind::Stylesheet,
        ));
    }

    if req.test {
        artifacts.push(Artifact::new(
            dir.join(format!("{}.test.{}", req.name, ext)),
            render_test(&req.name),
            ArtifactKind::Test,
        ));
    }

    artifacts
}

/// Local variable bound to a custom hook's result: `useAuthState` -> `authstate`
pub fn hook_binding(hook: &str) -> String {
    hook.strip_prefix("use").unwrap_or(hook).to_lowercase()
}

/// Import specifier for a hook in the hook directory, seen from the component directory
fn hook_import_path(req: &ComponentRequest, hook: &str) -> String {
    let from = rel_path(["src", req.path.as_str(), req.name.as_str()]);
    let to = hook_dir(&req.hooks_dir).join(hook);
    relative_import(&from, &to)
}

/// Relative module specifier from directory `from` to module `to` (both project-relative)
fn relative_import(from: &Path, to: &Path) -> String {
    let segments = |p: &Path| -> Vec<String> {
        p.components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    };
    let from = segments(from);
    let to = segments(to);
    let shared = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let ups = from.len() - shared;
    let mut specifier = if ups == 0 {
        "./".to_string()
    } else {
        "../".repeat(ups)
    };
    specifier.push_str(&to[shared..].join("/"));
    specifier
}

fn render_imports(req: &ComponentRequest) -> String {
    let mut imports = vec!["import React from 'react';".to_string()];
    if req.state {
        imports.push("import { useState } from 'react';".to_string());
    }
    if req.effect {
        imports.push("import { useEffect } from 'react';".to_string());
    }
    match req.style {
        StyleKind::StyledComponents => {
            imports.push("import styled from 'styled-components';".to_string())
        }
        StyleKind::Scss | StyleKind::Css => {
            if let Some(ext) = req.style.stylesheet_extension() {
                imports.push(format!("import './{}.{}';", req.name, ext));
            }
        }
        StyleKind::None => {}
    }
    for hook in &req.hooks {
        imports.push(format!(
            "import {{ {} }} from '{}';",
            hook,
            hook_import_path(req, hook)
        ));
    }
    lines(imports)
}

fn render_body(req: &ComponentRequest) -> String {
    let (open_tag, close_tag) = if req.style == StyleKind::StyledComponents {
        ("<StyledWrapper>".to_string(), "</StyledWrapper>")
    } else {
        (format!("<div className=\"{}\">", req.name), "</div>")
    };

    let body = Template::new()
        .section_if(req.state, "state", || {
            "const [state, setState] = useState();".to_string()
        })
        .section_if(req.effect, "effect", || {
            lines([
                "useEffect(() => {",
                "  // Add effect logic here",
                "}, []);",
            ])
        })
        .section_if(!req.hooks.is_empty(), "hooks", || {
            lines(
                req.hooks
                    .iter()
                    .map(|hook| format!("const {} = {}();", hook_binding(hook), hook)),
            )
        })
        .section(
            "return",
            lines([
                "return (".to_string(),
                format!("  {}", open_tag),
                format!("    {} Component", req.name),
                format!("  {}", close_tag),
                ");".to_string(),
            ]),
        );

    body.render_indented(2)
}

fn render_source(req: &ComponentRequest) -> String {
    let name = &req.name;
    let typed = req.file_kind.is_typed();

    let declaration = if typed && req.props {
        format!("const {name}: React.FC<{name}Props> = () => {{")
    } else if typed {
        format!("const {name}: React.FC = () => {{")
    } else {
        format!("const {name} = () => {{")
    };

    Template::new()
        .section("imports", render_imports(req))
        .section_if(req.style == StyleKind::StyledComponents, "styled", || {
            lines([
                "const StyledWrapper = styled.div`",
                "  /* Add your styles here */",
                "`;",
            ])
        })
        .section_if(typed && req.props, "props", || {
            lines([
                format!("interface {name}Props {{"),
                "  // Add your props here".to_string(),
                "}".to_string(),
            ])
        })
        .section(
            "component",
            format!("{declaration}\n{}}};", render_body(req)),
        )
        .section("export", format!("export default {name};"))
        .render()
}

fn render_stylesheet(name: &str) -> String {
    Template::new()
        .section("comment", format!("/* Styles for {name} component */"))
        .section(
            "rule",
            lines([
                format!(".{name} {{"),
                "  /* Add your styles here */".to_string(),
                "}".to_string(),
            ]),
        )
        .render()
}

fn render_test(name: &str) -> String {
    Template::new()
        .section(
            "imports",
            lines([
                "import React from 'react';".to_string(),
                "import { render, screen } from '@testing-library/react';".to_string(),
                format!("import {name} from './{name}';"),
            ]),
        )
        .section(
            "suite",
            lines([
                format!("describe('{name}', () => {{"),
                "  it('renders successfully', () => {".to_string(),
                format!("    render(<{name} />);"),
                format!("    expect(screen.getByText('{name} Component')).toBeInTheDocument();"),
                "  });".to_string(),
                "});".to_string(),
            ]),
        )
        .render()
}
