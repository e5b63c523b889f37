//! Template generators, one per artifact kind
//!
//! Every generator is a pure function from its request to the files it
//! produces. Nothing here touches the filesystem; see [`crate::emitter`].

pub mod api;
pub mod component;
pub mod context;
pub mod form;
pub mod hook;
pub mod test_suite;

use crate::artifact::Artifact;
use crate::error::Result;
use crate::request::GenerationRequest;

/// Produce the artifacts for a request
///
/// Removal produces nothing; it is carried out by [`crate::remover`].
pub fn generate(request: &GenerationRequest) -> Result<Vec<Artifact>> {
    let artifacts = match request {
        GenerationRequest::Component(req) => component::generate(req),
        GenerationRequest::Hook(req) => hook::generate(req),
        GenerationRequest::Context(req) => context::generate(req)?,
        GenerationRequest::ApiService(req) => api::generate(req),
        GenerationRequest::Form(req) => form::generate(req),
        GenerationRequest::TestSuite(req) => test_suite::generate(req),
        GenerationRequest::Removal(_) => Vec::new(),
    };
    Ok(artifacts)
}
