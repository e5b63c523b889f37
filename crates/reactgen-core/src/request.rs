//! Generation requests and the choice enums they are built from
//!
//! A [`GenerationRequest`] is the validated answer set for exactly one
//! command. Generators consume these types only; raw user strings never
//! reach them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Source file flavour for components, contexts and forms
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    Tsx,
    Jsx,
    Ts,
    Js,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [FileKind::Tsx, FileKind::Jsx, FileKind::Ts, FileKind::Js];

    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Tsx => "tsx",
            FileKind::Jsx => "jsx",
            FileKind::Ts => "ts",
            FileKind::Js => "js",
        }
    }

    /// TypeScript flavours get type declarations
    pub fn is_typed(&self) -> bool {
        matches!(self, FileKind::Tsx | FileKind::Ts)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Tsx => "TypeScript React (tsx)",
            FileKind::Jsx => "JavaScript React (jsx)",
            FileKind::Ts => "TypeScript (ts)",
            FileKind::Js => "JavaScript (js)",
        }
    }

    /// Parse a bare extension (`tsx`, `.jsx`, ...)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "tsx" => Some(FileKind::Tsx),
            "jsx" => Some(FileKind::Jsx),
            "ts" => Some(FileKind::Ts),
            "js" => Some(FileKind::Js),
            _ => None,
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Plain script flavour for hooks and API services
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScriptKind {
    Ts,
    Js,
}

impl ScriptKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ScriptKind::Ts => "ts",
            ScriptKind::Js => "js",
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, ScriptKind::Ts)
    }
}

impl From<FileKind> for ScriptKind {
    fn from(kind: FileKind) -> Self {
        if kind.is_typed() {
            ScriptKind::Ts
        } else {
            ScriptKind::Js
        }
    }
}

/// Styling approach for a component
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    Scss,
    Css,
    StyledComponents,
    None,
}

impl StyleKind {
    pub const ALL: [StyleKind; 4] = [
        StyleKind::Scss,
        StyleKind::Css,
        StyleKind::StyledComponents,
        StyleKind::None,
    ];

    /// Extension of the companion stylesheet, if this style writes one
    pub fn stylesheet_extension(&self) -> Option<&'static str> {
        match self {
            StyleKind::Scss => Some("scss"),
            StyleKind::Css => Some("css"),
            StyleKind::StyledComponents | StyleKind::None => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StyleKind::Scss => "SCSS",
            StyleKind::Css => "CSS",
            StyleKind::StyledComponents => "Styled Components",
            StyleKind::None => "None",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            StyleKind::Scss => "Sass with more features",
            StyleKind::Css => "Standard styling",
            StyleKind::StyledComponents => "CSS-in-JS",
            StyleKind::None => "No styling file",
        }
    }
}

/// Built-in hook usage selectable for a custom hook
///
/// Declaration order is the order blocks and imports are emitted in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HookFeature {
    State,
    Effect,
    Callback,
    Memo,
    Test,
}

impl HookFeature {
    pub const ALL: [HookFeature; 5] = [
        HookFeature::State,
        HookFeature::Effect,
        HookFeature::Callback,
        HookFeature::Memo,
        HookFeature::Test,
    ];

    /// The React primitive imported for this feature; `Test` has none
    pub fn primitive(&self) -> Option<&'static str> {
        match self {
            HookFeature::State => Some("useState"),
            HookFeature::Effect => Some("useEffect"),
            HookFeature::Callback => Some("useCallback"),
            HookFeature::Memo => Some("useMemo"),
            HookFeature::Test => None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.primitive().unwrap_or("Test file")
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HttpClient {
    Axios,
    Fetch,
}

impl HttpClient {
    pub fn label(&self) -> &'static str {
        match self {
            HttpClient::Axios => "Axios",
            HttpClient::Fetch => "Fetch",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FormLibrary {
    ReactHookForm,
    Formik,
}

impl FormLibrary {
    pub fn label(&self) -> &'static str {
        match self {
            FormLibrary::ReactHookForm => "React Hook Form",
            FormLibrary::Formik => "Formik",
        }
    }
}

/// Form input category
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Number,
    Select,
    Checkbox,
    Radio,
    Textarea,
}

impl FieldKind {
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Text,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Number,
        FieldKind::Select,
        FieldKind::Checkbox,
        FieldKind::Radio,
        FieldKind::Textarea,
    ];

    /// Field name, input type and registration key
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Textarea => "textarea",
        }
    }

    /// Capitalized name used for labels and placeholders
    pub fn title(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text",
            FieldKind::Email => "Email",
            FieldKind::Password => "Password",
            FieldKind::Number => "Number",
            FieldKind::Select => "Select",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Radio => "Radio",
            FieldKind::Textarea => "Textarea",
        }
    }

    /// TypeScript type of the field in the form data shape
    pub fn ts_type(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Checkbox => "boolean",
            _ => "string",
        }
    }
}

/// Test block kinds, emitted in declaration order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum TestKind {
    Unit,
    Snapshot,
    Integration,
}

impl TestKind {
    pub const ALL: [TestKind; 3] = [TestKind::Unit, TestKind::Snapshot, TestKind::Integration];

    pub fn label(&self) -> &'static str {
        match self {
            TestKind::Unit => "Unit Tests",
            TestKind::Snapshot => "Snapshot Tests",
            TestKind::Integration => "Integration Tests",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    pub name: String,
    /// Directory relative to `src`
    pub path: String,
    pub file_kind: FileKind,
    pub style: StyleKind,
    pub props: bool,
    pub state: bool,
    pub effect: bool,
    /// Custom hooks, already normalized to the `use...` form
    pub hooks: Vec<String>,
    /// Hook directory relative to the project root, as given to the hook generator
    pub hooks_dir: String,
    pub test: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRequest {
    /// Normalized `use...` name
    pub name: String,
    /// Directory relative to the project root
    pub dir: String,
    pub script: ScriptKind,
    pub features: BTreeSet<HookFeature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRequest {
    pub name: String,
    /// Directory relative to `src`
    pub path: String,
    pub file_kind: FileKind,
    pub reducer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiServiceRequest {
    pub name: String,
    /// Directory relative to `src`
    pub dir: String,
    pub script: ScriptKind,
    pub client: HttpClient,
    /// JavaScript expression evaluated for the base URL
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub name: String,
    /// Directory relative to `src`
    pub path: String,
    pub file_kind: FileKind,
    pub library: FormLibrary,
    pub validation: bool,
    pub fields: BTreeSet<FieldKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuiteRequest {
    /// Existing source file, relative to `src`
    pub target: String,
    pub kinds: BTreeSet<TestKind>,
    pub mocks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    /// Relative to the project root, falling back to `src`
    pub target: String,
}

/// Validated configuration for one scaffold command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Component(ComponentRequest),
    Hook(HookRequest),
    Context(ContextRequest),
    ApiService(ApiServiceRequest),
    Form(FormRequest),
    TestSuite(TestSuiteRequest),
    Removal(RemovalRequest),
}

impl GenerationRequest {
    /// Short noun used in summaries ("Component created successfully!")
    pub fn noun(&self) -> &'static str {
        match self {
            GenerationRequest::Component(_) => "Component",
            GenerationRequest::Hook(_) => "Hook",
            GenerationRequest::Context(_) => "Context",
            GenerationRequest::ApiService(_) => "API service",
            GenerationRequest::Form(_) => "Form",
            GenerationRequest::TestSuite(_) => "Test suite",
            GenerationRequest::Removal(_) => "Removal",
        }
    }
}
