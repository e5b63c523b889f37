//! Reactgen Core - Shared library for the `reactgen` scaffolding CLI
//!
//! This library turns answers about a React project into boilerplate source
//! files: components, custom hooks, contexts, REST API services, forms and
//! test suites. It can also remove previously generated files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Validation (`collect`), pure generators producing
//!   [`Artifact`]s, the emitter that writes them and the remover
//! - **Layer 2: Workflow Orchestration** - [`workflow::execute`] runs one
//!   [`GenerationRequest`] against a project root
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use reactgen_core::{collect, request::*, workflow, GenerationRequest};
//!
//! let request = GenerationRequest::Hook(HookRequest {
//!     name: collect::hook_name("auth")?,
//!     dir: "src/hooks".to_string(),
//!     script: ScriptKind::Ts,
//!     features: [HookFeature::State].into_iter().collect(),
//! });
//! let outcome = workflow::execute(Path::new("."), &request)?;
//! ```

pub mod artifact;
pub mod collect;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generators;
pub mod project;
pub mod remover;
pub mod request;
pub mod template;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use artifact::{Artifact, ArtifactKind};
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use project::ProjectInfo;
pub use request::GenerationRequest;
pub use workflow::Outcome;

#[cfg(feature = "tui")]
pub use tui::run;
