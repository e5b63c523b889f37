//! Custom hook generator

use crate::artifact::{rel_path, Artifact};
use crate::request::{HookFeature, HookRequest};
use crate::template::{lines, Template};
use std::path::PathBuf;

pub const DEFAULT_HOOKS_DIR: &str = "src/hooks";

/// Directory a hook is written to; a trailing `hooks` segment is ensured
pub fn hook_dir(dir: &str) -> PathBuf {
    let dir = if dir.trim_matches('/').is_empty() {
        DEFAULT_HOOKS_DIR
    } else {
        dir
    };
    let path = rel_path([dir]);
    if path.file_name().is_some_and(|last| last == "hooks") {
        path
    } else {
        path.join("hooks")
    }
}

pub fn generate(req: &HookRequest) -> Vec<Artifact> {
    let path = hook_dir(&req.dir).join(format!("{}.{}", req.name, req.script.extension()));
    vec![Artifact::source(path, render(req))]
}

fn feature_block(feature: HookFeature) -> Option<String> {
    let block = match feature {
        HookFeature::State => lines(["const [state, setState] = useState();"]),
        HookFeature::Effect => lines([
            "useEffect(() => {",
            "  // Effect logic here",
            "}, []);",
        ]),
        HookFeature::Callback => lines([
            "const handleCallback = useCallback(() => {",
            "  // Callback logic here",
            "}, []);",
        ]),
        HookFeature::Memo => lines([
            "const memoizedValue = useMemo(() => {",
            "  // Memoization logic here",
            "  return {};",
            "}, []);",
        ]),
        HookFeature::Test => return None,
    };
    Some(block)
}

fn render(req: &HookRequest) -> String {
    // BTreeSet iteration already follows state -> effect -> callback -> memo
    let primitives: Vec<&str> = req.features.iter().filter_map(|f| f.primitive()).collect();

    let body = Template::new()
        .sections(
            "feature",
            req.features.iter().filter_map(|f| feature_block(*f)),
            |block| block,
        )
        .section(
            "return",
            lines(["return {", "  // Return values here", "};"]),
        );

    Template::new()
        .section_if(!primitives.is_empty(), "imports", || {
            format!("import {{ {} }} from 'react';", primitives.join(", "))
        })
        .section(
            "hook",
            format!(
                "export const {} = () => {{\n{}}};",
                req.name,
                body.render_indented(2)
            ),
        )
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect;
    use crate::request::ScriptKind;
    use std::collections::BTreeSet;

    fn request(features: &[HookFeature]) -> HookRequest {
        HookRequest {
            name: "useAuth".to_string(),
            dir: DEFAULT_HOOKS_DIR.to_string(),
            script: ScriptKind::Ts,
            features: features.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_hook_dir_appends_hooks_segment() {
        assert_eq!(hook_dir("src/hooks"), PathBuf::from("src/hooks"));
        assert_eq!(hook_dir("src/features"), PathBuf::from("src/features/hooks"));
        assert_eq!(hook_dir("src/myhooks"), PathBuf::from("src/myhooks/hooks"));
        assert_eq!(hook_dir(""), PathBuf::from("src/hooks"));
    }

    #[test]
    fn test_auth_with_state_scenario() {
        let name = collect::hook_name("auth").unwrap();
        let mut req = request(&[HookFeature::State]);
        req.name = name;

        let artifacts = generate(&req);
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, PathBuf::from("src/hooks/useAuth.ts"));

        let content = &artifacts[0].content;
        assert!(content.starts_with("import { useState } from 'react';\n"));
        assert!(content.contains("export const useAuth = () => {"));
        assert_eq!(content.matches("useState()").count(), 1);
    }

    #[test]
    fn test_no_primitives_means_no_import() {
        for features in [vec![], vec![HookFeature::Test]] {
            let content = &generate(&request(&features))[0].content;
            assert!(!content.contains("import"), "{content}");
            assert!(content.starts_with("export const useAuth = () => {"));
        }
    }

    #[test]
    fn test_test_flag_is_not_imported() {
        let content = &generate(&request(&[HookFeature::Test, HookFeature::Memo]))[0].content;
        assert!(content.starts_with("import { useMemo } from 'react';\n"));
    }

    #[test]
    fn test_all_primitives_in_fixed_order() {
        let req = request(&[
            HookFeature::Memo,
            HookFeature::Callback,
            HookFeature::Effect,
            HookFeature::State,
        ]);
        let expected = "\
import { useState, useEffect, useCallback, useMemo } from 'react';

export const useAuth = () => {
  const [state, setState] = useState();

  useEffect(() => {
    // Effect logic here
  }, []);

  const handleCallback = useCallback(() => {
    // Callback logic here
  }, []);

  const memoizedValue = useMemo(() => {
    // Memoization logic here
    return {};
  }, []);

  return {
    // Return values here
  };
};
";
        assert_eq!(generate(&req)[0].content, expected);
    }
}
