//! Charm-style CLI prompts using cliclack

use crate::collect;
use crate::config::{self, ScaffoldConfig};
use crate::generators::api::DEFAULT_BASE_URL;
use crate::project::{self, ProjectInfo};
use crate::request::{
    ApiServiceRequest, ComponentRequest, ContextRequest, FieldKind, FileKind, FormLibrary,
    FormRequest, GenerationRequest, HookFeature, HookRequest, HttpClient, RemovalRequest,
    ScriptKind, StyleKind, TestKind, TestSuiteRequest,
};
use crate::workflow::{self, Outcome};
use anyhow::{Context, Result};
use console::style;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// CLI arguments for the component command
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    pub name: Option<String>,
    /// Directory relative to `src`
    pub path: Option<String>,
    pub file_kind: Option<FileKind>,
    pub style: Option<StyleKind>,
    pub props: Option<bool>,
    pub state: Option<bool>,
    pub effect: Option<bool>,
    /// Comma-separated custom hook names
    pub hooks: Option<String>,
    pub test: Option<bool>,

    /// Accept defaults for everything not given on the command line
    pub yes: bool,
}

/// CLI arguments for the hook command
#[derive(Debug, Clone, Default)]
pub struct HookArgs {
    pub name: Option<String>,
    /// Directory relative to the project root
    pub dir: Option<String>,
    pub script: Option<ScriptKind>,
    pub features: Option<Vec<HookFeature>>,
    pub yes: bool,
}

/// CLI arguments for the context command
#[derive(Debug, Clone, Default)]
pub struct ContextArgs {
    pub name: Option<String>,
    pub path: Option<String>,
    pub file_kind: Option<FileKind>,
    pub reducer: Option<bool>,
    pub yes: bool,
}

/// CLI arguments for the API service command
#[derive(Debug, Clone, Default)]
pub struct ApiArgs {
    pub name: Option<String>,
    pub dir: Option<String>,
    pub script: Option<ScriptKind>,
    pub client: Option<HttpClient>,
    pub base_url: Option<String>,
    pub yes: bool,
}

/// CLI arguments for the form command
#[derive(Debug, Clone, Default)]
pub struct FormArgs {
    pub name: Option<String>,
    pub path: Option<String>,
    pub file_kind: Option<FileKind>,
    pub library: Option<FormLibrary>,
    pub validation: Option<bool>,
    pub fields: Option<Vec<FieldKind>>,
    pub yes: bool,
}

/// CLI arguments for the test suite command
#[derive(Debug, Clone, Default)]
pub struct TestArgs {
    /// Existing component file relative to `src`
    pub target: Option<String>,
    pub kinds: Option<Vec<TestKind>>,
    pub mocks: Option<bool>,
    pub yes: bool,
}

/// CLI arguments for the remove command
#[derive(Debug, Clone, Default)]
pub struct RemoveArgs {
    pub target: Option<String>,

    /// Skip the confirmation prompt
    pub yes: bool,
}

/// One scaffold action, with whatever answers were pre-filled
#[derive(Debug, Clone)]
pub enum Command {
    Component(ComponentArgs),
    Hook(HookArgs),
    Context(ContextArgs),
    Api(ApiArgs),
    Form(FormArgs),
    Test(TestArgs),
    Remove(RemoveArgs),
}

/// Project facts shared by every prompt
struct Session {
    root: PathBuf,
    project: ProjectInfo,
    config: ScaffoldConfig,
}

impl Session {
    fn file_kind(&self) -> FileKind {
        self.config
            .file_kind
            .unwrap_or_else(|| self.project.default_file_kind())
    }

    fn script_kind(&self) -> ScriptKind {
        self.file_kind().into()
    }
}

/// Run the CLI with interactive prompts
pub fn run(root: Option<PathBuf>, command: Option<Command>) -> Result<()> {
    cliclack::intro("reactgen")?;

    let root = config::resolve_root(root)?;
    let project = project::detect(&root);
    cliclack::log::info(format!("Project root: {}", style(root.display()).dim()))?;
    for warning in project.warnings() {
        cliclack::log::warning(warning)?;
    }

    let config = ScaffoldConfig::load(&root)
        .with_context(|| format!("Failed to load configuration from {}", root.display()))?;

    let session = Session {
        root,
        project,
        config,
    };

    let command = match command {
        Some(command) => command,
        None => select_action()?,
    };

    let request = match command {
        // Removal reports its own failures and never fails the process
        Command::Remove(args) => return remove(&session, args),
        Command::Component(args) => component(&session, args)?,
        Command::Hook(args) => hook(&session, args)?,
        Command::Context(args) => context(&session, args)?,
        Command::Api(args) => api_service(&session, args)?,
        Command::Form(args) => form(&session, args)?,
        Command::Test(args) => test_suite(&session, args)?,
    };

    let outcome = workflow::execute(&session.root, &request)
        .with_context(|| format!("Failed to create {}", request.noun().to_lowercase()))?;

    workflow::print_summary(&outcome);
    cliclack::outro("Happy coding!")?;

    Ok(())
}

fn select_action() -> Result<Command> {
    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "component",
            "Create new component",
            "React component with custom configuration",
        )
        .item("hook", "Generate custom hook", "")
        .item("context", "Create context", "Context with Provider and hook")
        .item("api", "Create API service", "axios or fetch")
        .item("form", "Create form component", "Formik or React Hook Form")
        .item("test", "Generate test suite", "for an existing component")
        .item("remove", "Remove file/folder", "")
        .interact()?;

    let command = match action {
        "component" => Command::Component(ComponentArgs::default()),
        "hook" => Command::Hook(HookArgs::default()),
        "context" => Command::Context(ContextArgs::default()),
        "api" => Command::Api(ApiArgs::default()),
        "form" => Command::Form(FormArgs::default()),
        "test" => Command::Test(TestArgs::default()),
        "remove" => Command::Remove(RemoveArgs::default()),
        other => anyhow::bail!("Unknown action: {}", other),
    };
    Ok(command)
}

/// Pre-filled value, else the default under `--yes`, else an input prompt
///
/// `check` validates and normalizes; prompts re-ask until it accepts.
fn ask_text<T, F>(
    label: &'static str,
    flag: Option<String>,
    default: Option<&str>,
    yes: bool,
    check: F,
) -> Result<T>
where
    F: Fn(&str) -> crate::Result<T> + Clone + 'static,
{
    if let Some(value) = flag {
        let answer = check(&value)?;
        cliclack::log::info(format!("{}: {}", label, value.trim()))?;
        return Ok(answer);
    }

    if let (true, Some(default)) = (yes, default) {
        return Ok(check(default)?);
    }

    let validator = check.clone();
    let mut input =
        cliclack::input(label).validate(move |raw: &String| validator(raw.as_str()).map(|_| ()));
    if let Some(default) = default {
        input = input.placeholder(default).default_input(default);
    }

    let raw: String = input.interact()?;
    Ok(check(&raw)?)
}

fn ask_select<T: Clone + Eq>(
    label: &'static str,
    flag: Option<T>,
    default: T,
    yes: bool,
    items: Vec<(T, &'static str, &'static str)>,
) -> Result<T> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if yes {
        return Ok(default);
    }

    let mut select = cliclack::select(label).initial_value(default);
    for (value, name, hint) in items {
        select = select.item(value, name, hint);
    }
    Ok(select.interact()?)
}

fn ask_confirm(label: &'static str, flag: Option<bool>, default: bool, yes: bool) -> Result<bool> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if yes {
        return Ok(default);
    }
    Ok(cliclack::confirm(label).initial_value(default).interact()?)
}

/// Multi-choice answer; `required` names the field when an empty set is rejected
fn ask_multi<T: Clone + Eq + Ord>(
    label: &'static str,
    flag: Option<Vec<T>>,
    defaults: Vec<T>,
    yes: bool,
    items: Vec<(T, &'static str, &'static str)>,
    required: Option<&'static str>,
) -> Result<BTreeSet<T>> {
    let chosen: Vec<T> = match flag {
        Some(values) => values,
        None if yes => defaults,
        None => {
            let mut multi = cliclack::multiselect(label)
                .initial_values(defaults)
                .required(required.is_some());
            for (value, name, hint) in items {
                multi = multi.item(value, name, hint);
            }
            multi.interact()?
        }
    };

    match required {
        Some(field) => Ok(collect::non_empty(field, &chosen)?),
        None => Ok(chosen.into_iter().collect()),
    }
}

fn file_kind_items(kinds: &[FileKind]) -> Vec<(FileKind, &'static str, &'static str)> {
    kinds.iter().map(|k| (*k, k.label(), "")).collect()
}

fn script_items() -> Vec<(ScriptKind, &'static str, &'static str)> {
    vec![
        (ScriptKind::Ts, "TypeScript (ts)", ""),
        (ScriptKind::Js, "JavaScript (js)", ""),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ComponentFeature {
    Props,
    State,
    Effect,
    CustomHooks,
    Test,
}

fn component_features(args: &ComponentArgs) -> Result<BTreeSet<ComponentFeature>> {
    let flags = [
        (ComponentFeature::Props, args.props, true),
        (ComponentFeature::State, args.state, false),
        (ComponentFeature::Effect, args.effect, false),
        (ComponentFeature::CustomHooks, args.hooks.as_ref().map(|_| true), false),
        (ComponentFeature::Test, args.test, true),
    ];

    // Any pre-filled feature skips the checklist; the rest take their defaults
    if args.yes || flags.iter().any(|(_, flag, _)| flag.is_some()) {
        return Ok(flags
            .iter()
            .filter(|(_, flag, default)| flag.unwrap_or(*default))
            .map(|(feature, _, _)| *feature)
            .collect());
    }

    let selected: Vec<ComponentFeature> = cliclack::multiselect("Additional features")
        .initial_values(vec![ComponentFeature::Props, ComponentFeature::Test])
        .item(
            ComponentFeature::Props,
            "Props interface",
            "recommended for TypeScript",
        )
        .item(ComponentFeature::State, "useState hook", "")
        .item(ComponentFeature::Effect, "useEffect hook", "")
        .item(ComponentFeature::CustomHooks, "Custom hooks", "")
        .item(ComponentFeature::Test, "Test file", "")
        .required(false)
        .interact()?;

    Ok(selected.into_iter().collect())
}

fn component(session: &Session, args: ComponentArgs) -> Result<GenerationRequest> {
    let yes = args.yes;

    let name = ask_text("Component name", args.name.clone(), None, yes, |s| {
        collect::pascal_name("Component name", s)
    })?;
    let path = ask_text(
        "Component path (relative to src)",
        args.path.clone(),
        Some(session.config.paths.components.as_str()),
        yes,
        |s| collect::relative_path("Component path", s),
    )?;
    let file_kind = ask_select(
        "File type",
        args.file_kind,
        session.file_kind(),
        yes,
        file_kind_items(&FileKind::ALL),
    )?;
    let style = ask_select(
        "Styling solution",
        args.style,
        session.config.style.unwrap_or(StyleKind::Scss),
        yes,
        StyleKind::ALL
            .iter()
            .map(|s| (*s, s.label(), s.hint()))
            .collect(),
    )?;

    let features = component_features(&args)?;
    let hooks = if features.contains(&ComponentFeature::CustomHooks) {
        ask_text(
            "Enter hook names (comma separated)",
            args.hooks,
            None,
            yes,
            collect::hook_list,
        )?
    } else {
        Vec::new()
    };

    Ok(GenerationRequest::Component(ComponentRequest {
        name,
        path,
        file_kind,
        style,
        props: features.contains(&ComponentFeature::Props),
        state: features.contains(&ComponentFeature::State),
        effect: features.contains(&ComponentFeature::Effect),
        hooks,
        hooks_dir: session.config.paths.hooks.clone(),
        test: features.contains(&ComponentFeature::Test),
    }))
}

fn hook(session: &Session, args: HookArgs) -> Result<GenerationRequest> {
    let name = ask_text("Hook name (useHookName)", args.name, None, args.yes, collect::hook_name)?;
    let dir = ask_text(
        "Hook directory",
        args.dir,
        Some(session.config.paths.hooks.as_str()),
        args.yes,
        |s| collect::relative_path("Hook directory", s),
    )?;
    let script = ask_select(
        "File type",
        args.script,
        session.script_kind(),
        args.yes,
        script_items(),
    )?;
    let features = ask_multi(
        "Include built-in hooks",
        args.features,
        Vec::new(),
        args.yes,
        HookFeature::ALL.iter().map(|f| (*f, f.label(), "")).collect(),
        None,
    )?;

    Ok(GenerationRequest::Hook(HookRequest {
        name,
        dir,
        script,
        features,
    }))
}

fn context(session: &Session, args: ContextArgs) -> Result<GenerationRequest> {
    let name = ask_text("Context name", args.name, None, args.yes, |s| {
        collect::pascal_name("Context name", s)
    })?;
    let path = ask_text(
        "Context path (relative to src)",
        args.path,
        Some(session.config.paths.contexts.as_str()),
        args.yes,
        |s| collect::relative_path("Context path", s),
    )?;
    let default_kind = if session.file_kind().is_typed() {
        FileKind::Tsx
    } else {
        FileKind::Jsx
    };
    let file_kind = ask_select(
        "File type",
        args.file_kind,
        default_kind,
        args.yes,
        file_kind_items(&[FileKind::Tsx, FileKind::Jsx]),
    )?;
    let reducer = ask_confirm("Include reducer?", args.reducer, false, args.yes)?;

    Ok(GenerationRequest::Context(ContextRequest {
        name,
        path,
        file_kind,
        reducer,
    }))
}

fn api_service(session: &Session, args: ApiArgs) -> Result<GenerationRequest> {
    let name = ask_text("Service name", args.name, None, args.yes, collect::service_name)?;
    let client = ask_select(
        "HTTP client",
        args.client,
        session.config.http_client.unwrap_or(HttpClient::Axios),
        args.yes,
        vec![
            (HttpClient::Axios, HttpClient::Axios.label(), "interceptors included"),
            (HttpClient::Fetch, HttpClient::Fetch.label(), "no dependency"),
        ],
    )?;
    let base_url = ask_text(
        "Base URL expression",
        args.base_url,
        Some(
            session
                .config
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL),
        ),
        args.yes,
        |s| collect::required("Base URL", s).map(str::to_string),
    )?;
    let dir = ask_text(
        "Service directory (relative to src)",
        args.dir,
        Some(session.config.paths.services.as_str()),
        args.yes,
        |s| collect::relative_path("Service directory", s),
    )?;
    let script = ask_select(
        "File type",
        args.script,
        session.script_kind(),
        args.yes,
        script_items(),
    )?;

    Ok(GenerationRequest::ApiService(ApiServiceRequest {
        name,
        dir,
        script,
        client,
        base_url,
    }))
}

fn form(session: &Session, args: FormArgs) -> Result<GenerationRequest> {
    let name = ask_text("Form name", args.name, None, args.yes, |s| {
        collect::pascal_name("Form name", s)
    })?;
    let path = ask_text(
        "Form path (relative to src)",
        args.path,
        Some(session.config.paths.forms.as_str()),
        args.yes,
        |s| collect::relative_path("Form path", s),
    )?;
    let file_kind = ask_select(
        "File type",
        args.file_kind,
        session.file_kind(),
        args.yes,
        file_kind_items(&FileKind::ALL),
    )?;
    let library = ask_select(
        "Form library",
        args.library,
        session
            .config
            .form_library
            .unwrap_or(FormLibrary::ReactHookForm),
        args.yes,
        vec![
            (FormLibrary::ReactHookForm, FormLibrary::ReactHookForm.label(), ""),
            (FormLibrary::Formik, FormLibrary::Formik.label(), ""),
        ],
    )?;
    let validation = ask_confirm("Include Yup validation?", args.validation, true, args.yes)?;
    let fields = ask_multi(
        "Field types",
        args.fields,
        vec![FieldKind::Text],
        args.yes,
        FieldKind::ALL.iter().map(|f| (*f, f.title(), "")).collect(),
        Some("Field type"),
    )?;

    Ok(GenerationRequest::Form(FormRequest {
        name,
        path,
        file_kind,
        library,
        validation,
        fields,
    }))
}

fn test_suite(session: &Session, args: TestArgs) -> Result<GenerationRequest> {
    let root = session.root.clone();
    let target = ask_text(
        "Path to component (relative to src, e.g. components/Button/Button.tsx)",
        args.target,
        None,
        args.yes,
        move |s| collect::test_target(&root, s),
    )?;
    let kinds = ask_multi(
        "Test types",
        args.kinds,
        vec![TestKind::Unit],
        args.yes,
        TestKind::ALL.iter().map(|k| (*k, k.label(), "")).collect(),
        Some("Test type"),
    )?;
    let mocks = ask_confirm("Include test mocks?", args.mocks, true, args.yes)?;

    Ok(GenerationRequest::TestSuite(TestSuiteRequest {
        target,
        kinds,
        mocks,
    }))
}

fn remove(session: &Session, args: RemoveArgs) -> Result<()> {
    match confirm_and_remove(session, args) {
        Ok(Some(outcome)) => {
            workflow::print_summary(&outcome);
            cliclack::outro("Done")?;
        }
        Ok(None) => cliclack::outro_cancel("Removal cancelled.")?,
        Err(e) => {
            cliclack::log::error(format!("Error removing path: {:#}", e))?;
            cliclack::outro_cancel("Removal did not complete.")?;
        }
    }
    Ok(())
}

fn confirm_and_remove(session: &Session, args: RemoveArgs) -> Result<Option<Outcome>> {
    let root = session.root.clone();
    let target = ask_text(
        "Path to remove (relative to the project root or src)",
        args.target,
        None,
        args.yes,
        move |s| {
            collect::removal_target(&root, s)?;
            collect::relative_path("Path", s)
        },
    )?;

    if !args.yes {
        let confirmed: bool = cliclack::confirm(format!(
            "Are you sure you want to permanently delete \"{}\"?",
            target
        ))
        .initial_value(false)
        .interact()?;

        if !confirmed {
            return Ok(None);
        }
    }

    let request = GenerationRequest::Removal(RemovalRequest { target });
    Ok(Some(workflow::execute(&session.root, &request)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn session(root: &Path) -> Session {
        Session {
            root: root.to_path_buf(),
            project: project::detect(root),
            config: ScaffoldConfig::default(),
        }
    }

    fn scaffold_error(err: &anyhow::Error) -> &ScaffoldError {
        err.downcast_ref::<ScaffoldError>()
            .unwrap_or_else(|| panic!("expected a scaffold error, got {err:#}"))
    }

    #[test]
    fn test_component_features_default_under_yes() {
        let args = ComponentArgs {
            yes: true,
            ..Default::default()
        };
        let features = component_features(&args).unwrap();
        assert_eq!(
            features,
            [ComponentFeature::Props, ComponentFeature::Test].into_iter().collect()
        );
    }

    #[test]
    fn test_any_feature_flag_skips_checklist() {
        let args = ComponentArgs {
            state: Some(true),
            test: Some(false),
            hooks: Some("auth".to_string()),
            ..Default::default()
        };
        let features = component_features(&args).unwrap();
        assert_eq!(
            features,
            [
                ComponentFeature::Props,
                ComponentFeature::State,
                ComponentFeature::CustomHooks
            ]
            .into_iter()
            .collect()
        );
    }

    #[test]
    fn test_flags_win_over_defaults() {
        assert_eq!(
            ask_select("File type", Some(FileKind::Js), FileKind::Tsx, true, Vec::new()).unwrap(),
            FileKind::Js
        );
        assert_eq!(
            ask_select("File type", None, FileKind::Tsx, true, Vec::new()).unwrap(),
            FileKind::Tsx
        );
        assert!(!ask_confirm("Include reducer?", Some(false), true, true).unwrap());
        assert!(ask_confirm("Include reducer?", None, true, true).unwrap());

        let path = ask_text("Path", None, Some("/components/"), true, |s| {
            collect::relative_path("Path", s)
        })
        .unwrap();
        assert_eq!(path, "components");
    }

    #[test]
    fn test_component_request_from_flags_and_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("tsconfig.json"), "{}").unwrap();
        let session = session(dir.path());

        let args = ComponentArgs {
            name: Some("Button".to_string()),
            hooks: Some("auth, userProfile".to_string()),
            yes: true,
            ..Default::default()
        };
        let GenerationRequest::Component(req) = component(&session, args).unwrap() else {
            panic!("expected component request");
        };
        assert_eq!(req.name, "Button");
        assert_eq!(req.path, "components");
        assert_eq!(req.file_kind, FileKind::Tsx);
        assert_eq!(req.style, StyleKind::Scss);
        assert!(req.props && req.test);
        assert!(!req.state && !req.effect);
        assert_eq!(req.hooks, vec!["useAuth", "useUserProfile"]);
        assert_eq!(req.hooks_dir, "src/hooks");
    }

    #[test]
    fn test_config_paths_flow_into_requests() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        session.config.paths.hooks = "src/lib/hooks".to_string();
        session.config.file_kind = Some(FileKind::Jsx);

        let args = ComponentArgs {
            name: Some("Card".to_string()),
            yes: true,
            ..Default::default()
        };
        let GenerationRequest::Component(req) = component(&session, args).unwrap() else {
            panic!("expected component request");
        };
        assert_eq!(req.hooks_dir, "src/lib/hooks");
        assert_eq!(req.file_kind, FileKind::Jsx);

        let args = HookArgs {
            name: Some("auth".to_string()),
            yes: true,
            ..Default::default()
        };
        let GenerationRequest::Hook(req) = hook(&session, args).unwrap() else {
            panic!("expected hook request");
        };
        assert_eq!(req.name, "useAuth");
        assert_eq!(req.dir, "src/lib/hooks");
        assert_eq!(req.script, ScriptKind::Js);
        assert!(req.features.is_empty());
    }

    #[test]
    fn test_invalid_config_path_default_is_rejected() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());
        session.config.paths.components = "../outside".to_string();

        let args = ComponentArgs {
            name: Some("Button".to_string()),
            yes: true,
            ..Default::default()
        };
        let err = component(&session, args).unwrap_err();
        assert!(matches!(scaffold_error(&err), ScaffoldError::InvalidPath { .. }));
    }

    #[test]
    fn test_context_with_script_kind_fails_in_generator() {
        let dir = tempdir().unwrap();
        let session = session(dir.path());

        let args = ContextArgs {
            name: Some("Theme".to_string()),
            file_kind: Some(FileKind::Ts),
            yes: true,
            ..Default::default()
        };
        let request = context(&session, args).unwrap();
        let GenerationRequest::Context(req) = &request else {
            panic!("expected context request");
        };
        assert_eq!(req.path, "contexts");
        assert!(!req.reducer);

        let err = workflow::execute(dir.path(), &request).unwrap_err();
        assert!(matches!(err, ScaffoldError::UnsupportedFileKind { .. }));
        assert!(!dir.path().join("src").exists());
    }

    #[test]
    fn test_api_request_defaults() {
        let dir = tempdir().unwrap();
        let mut session = session(dir.path());

        let args = ApiArgs {
            name: Some("user".to_string()),
            yes: true,
            ..Default::default()
        };
        let GenerationRequest::ApiService(req) = api_service(&session, args).unwrap() else {
            panic!("expected api request");
        };
        assert_eq!(req.dir, "services");
        assert_eq!(req.client, HttpClient::Axios);
        assert_eq!(req.base_url, DEFAULT_BASE_URL);
        assert_eq!(req.script, ScriptKind::Js);

        session.config.base_url = Some("'https://api.example.com'".to_string());
        let args = ApiArgs {
            name: Some("user".to_string()),
            yes: true,
            ..Default::default()
        };
        let GenerationRequest::ApiService(req) = api_service(&session, args).unwrap() else {
            panic!("expected api request");
        };
        assert_eq!(req.base_url, "'https://api.example.com'");

        let args = ApiArgs {
            name: Some("user-api".to_string()),
            yes: true,
            ..Default::default()
        };
        assert!(api_service(&session, args).is_err());
    }

    #[test]
    fn test_form_request_defaults() {
        let dir = tempdir().unwrap();
        let session = session(dir.path());

        let args = FormArgs {
            name: Some("Login".to_string()),
            yes: true,
            ..Default::default()
        };
        let GenerationRequest::Form(req) = form(&session, args).unwrap() else {
            panic!("expected form request");
        };
        assert_eq!(req.path, "components");
        assert_eq!(req.library, FormLibrary::ReactHookForm);
        assert!(req.validation);
        assert_eq!(req.fields, [FieldKind::Text].into_iter().collect());

        let args = FormArgs {
            name: Some("Login".to_string()),
            fields: Some(Vec::new()),
            yes: true,
            ..Default::default()
        };
        let err = form(&session, args).unwrap_err();
        assert!(matches!(scaffold_error(&err), ScaffoldError::Validation { .. }));
    }

    #[test]
    fn test_test_suite_request_requires_existing_target() {
        let dir = tempdir().unwrap();
        let session = session(dir.path());

        let args = TestArgs {
            target: Some("components/Button/Button.tsx".to_string()),
            yes: true,
            ..Default::default()
        };
        assert!(test_suite(&session, args.clone()).is_err());

        let component_dir = dir.path().join("src/components/Button");
        fs::create_dir_all(&component_dir).unwrap();
        fs::write(component_dir.join("Button.tsx"), "").unwrap();

        let GenerationRequest::TestSuite(req) = test_suite(&session, args).unwrap() else {
            panic!("expected test suite request");
        };
        assert_eq!(req.kinds, [TestKind::Unit].into_iter().collect());
        assert!(req.mocks);
    }

    #[test]
    fn test_remove_reports_errors_without_failing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("keep.txt"), "").unwrap();
        let session = session(dir.path());

        let args = RemoveArgs {
            target: Some("components/Missing".to_string()),
            yes: true,
        };
        assert!(remove(&session, args).is_ok());
        assert!(dir.path().join("keep.txt").exists());
    }

    #[test]
    fn test_remove_with_yes_skips_confirmation() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("src/components/Old");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("Old.jsx"), "").unwrap();
        let session = session(dir.path());

        let args = RemoveArgs {
            target: Some("components/Old".to_string()),
            yes: true,
        };
        assert!(remove(&session, args).is_ok());
        assert!(!target.exists());
        assert!(dir.path().join("src/components").exists());
    }
}
