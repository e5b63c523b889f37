//! Reactgen CLI - Scaffolding for React components, hooks, contexts, services, forms and tests

use anyhow::Result;
use clap::{Parser, Subcommand};
use reactgen_core::request::{
    FieldKind, FileKind, FormLibrary, HookFeature, HttpClient, ScriptKind, StyleKind, TestKind,
};
use reactgen_core::tui::{
    ApiArgs, Command as CoreCommand, ComponentArgs, ContextArgs, FormArgs, HookArgs, RemoveArgs,
    TestArgs,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reactgen")]
#[command(about = "CLI for scaffolding React components, hooks, contexts, API services, forms and tests")]
#[command(version)]
pub struct Args {
    /// Project root (defaults to $REACTGEN_ROOT, then the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new React component
    Component(CliComponentArgs),
    /// Generate a custom hook
    Hook(CliHookArgs),
    /// Create a context with provider and consumer hook
    Context(CliContextArgs),
    /// Create a REST API service
    Api(CliApiArgs),
    /// Create a form component
    Form(CliFormArgs),
    /// Generate a test suite for an existing component
    Test(CliTestArgs),
    /// Remove a file or folder
    Remove(CliRemoveArgs),
}

#[derive(Parser, Debug)]
pub struct CliComponentArgs {
    /// Component name (PascalCase)
    pub name: Option<String>,

    /// Directory relative to src
    #[arg(short, long)]
    pub path: Option<String>,

    /// File type
    #[arg(short = 't', long = "type", value_enum)]
    pub file_kind: Option<FileKind>,

    /// Styling solution
    #[arg(short, long, value_enum)]
    pub style: Option<StyleKind>,

    /// Include a props interface
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub props: Option<bool>,

    /// Include a useState hook
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub state: Option<bool>,

    /// Include a useEffect hook
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub effect: Option<bool>,

    /// Custom hooks to call (comma-separated)
    #[arg(long)]
    pub hooks: Option<String>,

    /// Generate a test file
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub test: Option<bool>,

    /// Accept defaults for unanswered questions (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliComponentArgs> for ComponentArgs {
    fn from(args: CliComponentArgs) -> Self {
        ComponentArgs {
            name: args.name,
            path: args.path,
            file_kind: args.file_kind,
            style: args.style,
            props: args.props,
            state: args.state,
            effect: args.effect,
            hooks: args.hooks,
            test: args.test,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliHookArgs {
    /// Hook name (`auth` becomes `useAuth`)
    pub name: Option<String>,

    /// Directory relative to the project root
    #[arg(short, long)]
    pub dir: Option<String>,

    /// File type
    #[arg(short = 't', long = "type", value_enum)]
    pub script: Option<ScriptKind>,

    /// Built-in hooks to include (comma-separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub features: Option<Vec<HookFeature>>,

    /// Accept defaults for unanswered questions (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliHookArgs> for HookArgs {
    fn from(args: CliHookArgs) -> Self {
        HookArgs {
            name: args.name,
            dir: args.dir,
            script: args.script,
            features: args.features,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliContextArgs {
    /// Context name (PascalCase)
    pub name: Option<String>,

    /// Directory relative to src
    #[arg(short, long)]
    pub path: Option<String>,

    /// File type (tsx or jsx)
    #[arg(short = 't', long = "type", value_enum)]
    pub file_kind: Option<FileKind>,

    /// Manage state with a reducer
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub reducer: Option<bool>,

    /// Accept defaults for unanswered questions (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliContextArgs> for ContextArgs {
    fn from(args: CliContextArgs) -> Self {
        ContextArgs {
            name: args.name,
            path: args.path,
            file_kind: args.file_kind,
            reducer: args.reducer,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliApiArgs {
    /// Service name
    pub name: Option<String>,

    /// Directory relative to src
    #[arg(short, long)]
    pub dir: Option<String>,

    /// File type
    #[arg(short = 't', long = "type", value_enum)]
    pub script: Option<ScriptKind>,

    /// HTTP client
    #[arg(short, long, value_enum)]
    pub client: Option<HttpClient>,

    /// JavaScript expression for the base URL
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Accept defaults for unanswered questions (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliApiArgs> for ApiArgs {
    fn from(args: CliApiArgs) -> Self {
        ApiArgs {
            name: args.name,
            dir: args.dir,
            script: args.script,
            client: args.client,
            base_url: args.base_url,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliFormArgs {
    /// Form name (PascalCase)
    pub name: Option<String>,

    /// Directory relative to src
    #[arg(short, long)]
    pub path: Option<String>,

    /// File type
    #[arg(short = 't', long = "type", value_enum)]
    pub file_kind: Option<FileKind>,

    /// Form library
    #[arg(short, long, value_enum)]
    pub library: Option<FormLibrary>,

    /// Include a yup validation schema
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub validation: Option<bool>,

    /// Field types (comma-separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub fields: Option<Vec<FieldKind>>,

    /// Accept defaults for unanswered questions (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliFormArgs> for FormArgs {
    fn from(args: CliFormArgs) -> Self {
        FormArgs {
            name: args.name,
            path: args.path,
            file_kind: args.file_kind,
            library: args.library,
            validation: args.validation,
            fields: args.fields,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliTestArgs {
    /// Component file relative to src (e.g. components/Button/Button.tsx)
    pub target: Option<String>,

    /// Test types (comma-separated)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub kinds: Option<Vec<TestKind>>,

    /// Include a mock props object
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub mocks: Option<bool>,

    /// Accept defaults for unanswered questions (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliTestArgs> for TestArgs {
    fn from(args: CliTestArgs) -> Self {
        TestArgs {
            target: args.target,
            kinds: args.kinds,
            mocks: args.mocks,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliRemoveArgs {
    /// Path relative to the project root or src
    pub target: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliRemoveArgs> for RemoveArgs {
    fn from(args: CliRemoveArgs) -> Self {
        RemoveArgs {
            target: args.target,
            yes: args.yes,
        }
    }
}

impl From<Command> for CoreCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Component(args) => CoreCommand::Component(args.into()),
            Command::Hook(args) => CoreCommand::Hook(args.into()),
            Command::Context(args) => CoreCommand::Context(args.into()),
            Command::Api(args) => CoreCommand::Api(args.into()),
            Command::Form(args) => CoreCommand::Form(args.into()),
            Command::Test(args) => CoreCommand::Test(args.into()),
            Command::Remove(args) => CoreCommand::Remove(args.into()),
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No subcommand provided: the top-level menu picks one
    let result = reactgen_core::run(args.root, args.command.map(Into::into));

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
