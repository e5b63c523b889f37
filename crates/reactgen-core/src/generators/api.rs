//! REST API service generator (axios or fetch)

use crate::artifact::{rel_path, Artifact};
use crate::request::{ApiServiceRequest, HttpClient};
use crate::template::{indent, lines, Template};

pub const DEFAULT_BASE_URL: &str = "process.env.REACT_APP_API_URL";

pub fn generate(req: &ApiServiceRequest) -> Vec<Artifact> {
    let path = rel_path(["src", req.dir.as_str()])
        .join(format!("{}.{}", req.name, req.script.extension()));
    vec![Artifact::source(path, render(req))]
}

/// One service method, independent of the HTTP client
struct Method {
    name: &'static str,
    verb: &'static str,
    with_id: bool,
    with_body: bool,
}

const METHOD_SPECS: [Method; 5] = [
    Method { name: "getAll", verb: "GET", with_id: false, with_body: false },
    Method { name: "getById", verb: "GET", with_id: true, with_body: false },
    Method { name: "create", verb: "POST", with_id: false, with_body: true },
    Method { name: "update", verb: "PUT", with_id: true, with_body: true },
    Method { name: "delete", verb: "DELETE", with_id: true, with_body: false },
];

impl Method {
    fn params(&self, req: &ApiServiceRequest) -> String {
        let typed = req.script.is_typed();
        let mut params = Vec::new();
        if self.with_id {
            params.push(if typed { "id: number".to_string() } else { "id".to_string() });
        }
        if self.with_body {
            params.push(if typed {
                format!("data: Partial<{}>", req.name)
            } else {
                "data".to_string()
            });
        }
        params.join(", ")
    }

    /// Resource path relative to the base URL, as a JS string literal
    fn resource(&self, resource: &str, prefix: &str) -> String {
        if self.with_id {
            format!("`{prefix}/{resource}/${{id}}`")
        } else if prefix.is_empty() {
            format!("'/{resource}'")
        } else {
            format!("`{prefix}/{resource}`")
        }
    }

    fn axios_body(&self, req: &ApiServiceRequest, resource: &str) -> String {
        let call = self.verb.to_lowercase();
        let generic = match (req.script.is_typed(), self.name) {
            (true, "getAll") => format!("<{}[]>", req.name),
            (true, "delete") => String::new(),
            (true, _) => format!("<{}>", req.name),
            (false, _) => String::new(),
        };
        let data = if self.with_body { ", data" } else { "" };
        lines([
            format!(
                "const response = await api.{call}{generic}({}{data});",
                self.resource(resource, "")
            ),
            "return response.data;".to_string(),
        ])
    }

    fn fetch_body(&self, resource: &str) -> String {
        let mut options = Vec::new();
        if self.verb != "GET" {
            options.push(format!("method: '{}',", self.verb));
        }
        options.push("headers: getHeaders(),".to_string());
        if self.with_body {
            options.push("body: JSON.stringify(data),".to_string());
        }

        lines([
            format!(
                "const response = await fetch({}, {{",
                self.resource(resource, "${BASE_URL}")
            ),
            indent(&lines(options), 2),
            "});".to_string(),
            "if (!response.ok) throw new Error('Network response was not ok');".to_string(),
            "return response.json();".to_string(),
        ])
    }

    fn render(&self, req: &ApiServiceRequest) -> String {
        let resource = req.name.to_lowercase();
        let body = match req.client {
            HttpClient::Axios => self.axios_body(req, &resource),
            HttpClient::Fetch => self.fetch_body(&resource),
        };
        format!(
            "{}: async ({}) => {{\n{}\n}},",
            self.name,
            self.params(req),
            indent(&body, 2)
        )
    }
}

fn render_axios_setup(req: &ApiServiceRequest) -> Template {
    Template::new()
        .section(
            "client",
            lines([
                "// Create axios instance".to_string(),
                "const api = axios.create({".to_string(),
                format!("  baseURL: {},", req.base_url),
                "  headers: {".to_string(),
                "    'Content-Type': 'application/json',".to_string(),
                "  },".to_string(),
                "});".to_string(),
            ]),
        )
        .section(
            "interceptor",
            lines([
                "// Request interceptor",
                "api.interceptors.request.use(",
                "  (config) => {",
                "    const token = localStorage.getItem('token');",
                "    if (token) {",
                "      config.headers.Authorization = `Bearer ${token}`;",
                "    }",
                "    return config;",
                "  },",
                "  (error) => Promise.reject(error)",
                ");",
            ]),
        )
}

fn render_fetch_setup(req: &ApiServiceRequest) -> Template {
    let headers_decl = if req.script.is_typed() {
        "  const headers: Record<string, string> = {"
    } else {
        "  const headers = {"
    };
    Template::new()
        .section("base_url", format!("const BASE_URL = {};", req.base_url))
        .section(
            "headers",
            lines([
                "const getHeaders = () => {",
                headers_decl,
                "    'Content-Type': 'application/json',",
                "  };",
                "",
                "  const token = localStorage.getItem('token');",
                "  if (token) {",
                "    headers.Authorization = `Bearer ${token}`;",
                "  }",
                "",
                "  return headers;",
                "};",
            ]),
        )
}

fn render(req: &ApiServiceRequest) -> String {
    let typed = req.script.is_typed();

    let setup = match req.client {
        HttpClient::Axios => render_axios_setup(req),
        HttpClient::Fetch => render_fetch_setup(req),
    };

    let methods: Vec<String> = METHOD_SPECS.iter().map(|m| m.render(req)).collect();
    let service = format!(
        "export const {}Service = {{\n{}}};",
        req.name,
        indent(&(methods.join("\n\n") + "\n"), 2)
    );

    Template::new()
        .section_if(req.client == HttpClient::Axios, "imports", || {
            "import axios from 'axios';".to_string()
        })
        .section_if(typed, "model", || {
            lines([
                format!("export interface {} {{", req.name),
                "  id: number;".to_string(),
                "  // Add other properties here".to_string(),
                "}".to_string(),
            ])
        })
        .append(setup)
        .section("service", service)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ScriptKind;
    use std::path::PathBuf;

    fn request(client: HttpClient, script: ScriptKind) -> ApiServiceRequest {
        ApiServiceRequest {
            name: "User".to_string(),
            dir: "services".to_string(),
            script,
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    fn method_names(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|l| l.starts_with("  ") && !l.starts_with("   "))
            .filter_map(|l| l.trim().split_once(": async"))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    #[test]
    fn test_exactly_five_methods_for_every_variant() {
        let expected = ["getAll", "getById", "create", "update", "delete"];
        for client in [HttpClient::Axios, HttpClient::Fetch] {
            for script in [ScriptKind::Ts, ScriptKind::Js] {
                let content = &generate(&request(client, script))[0].content;
                assert_eq!(method_names(content), expected, "{content}");
                assert!(content.contains("export const UserService = {"));
            }
        }
    }

    #[test]
    fn test_axios_service_layout() {
        let artifacts = generate(&request(HttpClient::Axios, ScriptKind::Js));
        assert_eq!(artifacts[0].path, PathBuf::from("src/services/User.js"));

        let content = &artifacts[0].content;
        assert!(content.starts_with("import axios from 'axios';\n"));
        assert!(content.contains("baseURL: process.env.REACT_APP_API_URL,"));
        assert!(content.contains("config.headers.Authorization = `Bearer ${token}`;"));
        assert!(content.contains("const response = await api.get('/user');"));
        assert!(content.contains("const response = await api.put(`/user/${id}`, data);"));
        assert!(content.contains("update: async (id, data) => {"));
        assert!(!content.contains("interface"));
    }

    #[test]
    fn test_fetch_service_layout() {
        let content = &generate(&request(HttpClient::Fetch, ScriptKind::Js))[0].content;
        assert!(content.starts_with("const BASE_URL = process.env.REACT_APP_API_URL;\n"));
        assert!(!content.contains("axios"));
        assert!(content.contains("const getHeaders = () => {"));
        assert!(content.contains("const response = await fetch(`${BASE_URL}/user`, {"));
        assert!(content.contains("method: 'DELETE',"));
        assert!(content.contains("body: JSON.stringify(data),"));
        assert_eq!(
            content
                .matches("if (!response.ok) throw new Error('Network response was not ok');")
                .count(),
            5
        );
    }

    #[test]
    fn test_typed_service_has_model_and_typed_params() {
        let content = &generate(&request(HttpClient::Axios, ScriptKind::Ts))[0].content;
        assert!(content.contains("export interface User {"));
        assert!(content.contains("getById: async (id: number) => {"));
        assert!(content.contains("create: async (data: Partial<User>) => {"));
        assert!(content.contains("await api.get<User[]>('/user');"));
    }

    #[test]
    fn test_resource_path_is_lowercased_not_pluralized() {
        let mut req = request(HttpClient::Axios, ScriptKind::Js);
        req.name = "BlogPost".to_string();
        let content = &generate(&req)[0].content;
        assert!(content.contains("'/blogpost'"));
        assert!(!content.contains("/blogposts"));
    }
}
