//! Collaborator boundaries: the remote registry and the artifact validators.
//!
//! Both are traits so the engine runs against fixture implementations in
//! tests and against the real client and linter in the CLI.

use bindery_def::{Issue, MapDocument, ProfileDocument, ProviderDocument};

/// Artifact kind, as the registry addresses content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Profile,
    Map,
    Provider,
}

impl ArtifactKind {
    /// Registry path segment for this kind.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Profile => "profiles",
            Self::Map => "maps",
            Self::Provider => "providers",
        }
    }
}

/// Error surfaced by a registry implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct RegistryError(pub String);

/// Remote registry lookups the check engine depends on.
pub trait Registry {
    /// Resolves the latest published version for an artifact.
    fn resolve_latest_version(
        &self,
        kind: ArtifactKind,
        id: &str,
    ) -> Result<String, RegistryError>;

    /// Fetches artifact content. `version` is `None` for unversioned kinds
    /// (provider descriptions).
    fn fetch_content(
        &self,
        kind: ArtifactKind,
        id: &str,
        version: Option<&str>,
    ) -> Result<String, RegistryError>;
}

/// Pairwise artifact validation.
///
/// Issues come back pre-classified; the engine counts and renders them
/// without interpreting the messages.
pub trait Validator {
    fn validate_profile_map(&self, profile: &ProfileDocument, map: &MapDocument) -> Vec<Issue>;

    fn validate_map_provider(&self, map: &MapDocument, provider: &ProviderDocument) -> Vec<Issue>;
}
