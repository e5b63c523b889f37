//! React context generator: context object, provider component and consumer hook

use crate::artifact::{rel_path, Artifact};
use crate::error::{Result, ScaffoldError};
use crate::request::{ContextRequest, FileKind};
use crate::template::{lines, Template};

pub fn generate(req: &ContextRequest) -> Result<Vec<Artifact>> {
    let typed = match req.file_kind {
        FileKind::Tsx => true,
        FileKind::Jsx => false,
        other => {
            return Err(ScaffoldError::UnsupportedFileKind {
                generator: "context",
                kind: other.extension().to_string(),
                expected: ".tsx or .jsx",
            })
        }
    };

    let path = rel_path(["src", req.path.as_str()])
        .join(format!("{}.{}", req.name, req.file_kind.extension()));
    Ok(vec![Artifact::source(path, render(req, typed))])
}

fn render(req: &ContextRequest, typed: bool) -> String {
    let name = &req.name;
    let state_hook = if req.reducer { "useReducer" } else { "useState" };

    Template::new()
        .section(
            "imports",
            format!("import React, {{ createContext, useContext, {state_hook} }} from 'react';"),
        )
        .section_if(typed, "types", || {
            lines([
                "// Define types".to_string(),
                format!("type {name}ContextType = {{"),
                "  // Add your context types here".to_string(),
                "};".to_string(),
            ])
        })
        .section_if(typed && req.reducer, "actions", || {
            lines([
                "// Define action types".to_string(),
                format!("type {name}Action ="),
                "  | { type: 'ACTION_1'; payload: any }".to_string(),
                "  | { type: 'ACTION_2'; payload: any };".to_string(),
            ])
        })
        .section_if(req.reducer, "reducer", || render_reducer(name, typed))
        .section("context", render_context(name, typed))
        .section("provider", render_provider(req, typed))
        .section("consumer", render_consumer(name))
        .render()
}

fn render_reducer(name: &str, typed: bool) -> String {
    let signature = if typed {
        format!("const {name}Reducer = (state: {name}ContextType, action: {name}Action) => {{")
    } else {
        format!("const {name}Reducer = (state, action) => {{")
    };
    lines([
        "// Define reducer".to_string(),
        signature,
        "  switch (action.type) {".to_string(),
        "    case 'ACTION_1':".to_string(),
        "      return { ...state };".to_string(),
        "    case 'ACTION_2':".to_string(),
        "      return { ...state };".to_string(),
        "    default:".to_string(),
        "      return state;".to_string(),
        "  }".to_string(),
        "};".to_string(),
    ])
}

fn render_context(name: &str, typed: bool) -> String {
    let create = if typed {
        format!("const {name}Context = createContext<{name}ContextType | undefined>(undefined);")
    } else {
        format!("const {name}Context = createContext(undefined);")
    };
    lines(["// Create context".to_string(), create])
}

fn render_provider(req: &ContextRequest, typed: bool) -> String {
    let name = &req.name;
    let signature = if typed {
        format!(
            "export const {name}Provider: React.FC<{{ children: React.ReactNode }}> = ({{ children }}) => {{"
        )
    } else {
        format!("export const {name}Provider = ({{ children }}) => {{")
    };

    let state = if req.reducer {
        let initial = if typed {
            format!("const initialState: {name}ContextType = {{")
        } else {
            "const initialState = {".to_string()
        };
        Template::new()
            .section(
                "initial",
                lines([
                    initial,
                    "  // Initialize your state here".to_string(),
                    "};".to_string(),
                ]),
            )
            .section(
                "state",
                format!("const [state, dispatch] = useReducer({name}Reducer, initialState);"),
            )
            .section("value", "const value = { ...state, dispatch };")
    } else {
        let generic = if typed {
            format!("<{name}ContextType>")
        } else {
            String::new()
        };
        Template::new()
            .section(
                "state",
                lines([
                    format!("const [state, setState] = useState{generic}({{"),
                    "  // Initialize your state here".to_string(),
                    "});".to_string(),
                ]),
            )
            .section("value", "const value = { ...state, setState };")
    };

    let body = state.section(
        "render",
        lines([
            "return (".to_string(),
            format!("  <{name}Context.Provider value={{value}}>"),
            "    {children}".to_string(),
            format!("  </{name}Context.Provider>"),
            ");".to_string(),
        ]),
    );

    format!(
        "// Create provider component\n{signature}\n{}}};",
        body.render_indented(2)
    )
}

fn render_consumer(name: &str) -> String {
    lines([
        "// Custom hook to use the context".to_string(),
        format!("export const use{name} = () => {{"),
        format!("  const context = useContext({name}Context);"),
        "  if (context === undefined) {".to_string(),
        format!("    throw new Error('use{name} must be used within a {name}Provider');"),
        "  }".to_string(),
        "  return context;".to_string(),
        "};".to_string(),
    ])
}
