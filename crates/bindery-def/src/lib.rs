//! Shared vocabulary for bindery.
//!
//! Identifier grammar, compatibility issues, and the parsed artifact
//! documents (profiles, maps, provider descriptions) that every other crate
//! in the workspace speaks in.

mod document;
mod id;
mod issue;

pub use document::{
    DefinitionError, MapCall, MapDocument, MapUseCase, ProfileDocument, ProfileUseCase,
    ProviderDocument, ProviderService, SecurityScheme, UseCaseSafety,
};
pub use id::{IdentifierError, ProfileId, is_valid_provider_name};
pub use issue::{Issue, IssueKind};
