//! Source resolution: where each artifact's authoritative content lives.
//!
//! Resolution never mutates anything. A failure (missing local file, failed
//! fetch, unparsable content) is scoped to the artifact it hit: the
//! descriptor still records the declared provenance and the failure travels
//! as an error issue on the affected result.

use crate::boundary::{ArtifactKind, Registry};
use crate::source::{MapSource, ProfileSource, ProviderSource};
use bindery_config::{ProfileEntry, ProfileProviderEntry, ProviderEntry};
use bindery_def::{Issue, MapDocument, ProfileDocument, ProfileId, ProviderDocument};
use std::fs;
use std::path::Path;

/// Version recorded when latest-version resolution itself fails.
const UNRESOLVED_VERSION: &str = "latest";

pub(crate) struct ResolvedProfile {
    pub source: ProfileSource,
    pub document: Result<ProfileDocument, Issue>,
}

pub(crate) struct ResolvedMap {
    pub source: MapSource,
    pub document: Result<MapDocument, Issue>,
}

pub(crate) struct ResolvedProvider {
    pub source: ProviderSource,
    pub document: Result<ProviderDocument, Issue>,
}

pub(crate) fn resolve_profile(
    entry: &ProfileEntry,
    id: &ProfileId,
    registry: &dyn Registry,
) -> ResolvedProfile {
    match &entry.file {
        Some(path) => ResolvedProfile {
            source: ProfileSource::Local { path: path.clone() },
            document: read_artifact(path, "profile").and_then(|text| {
                ProfileDocument::parse(&text).map_err(|e| Issue::error(e.to_string()))
            }),
        },
        None => {
            let (version, resolve_failure) = match &entry.version {
                Some(version) => (version.clone(), None),
                None => match registry.resolve_latest_version(ArtifactKind::Profile, &id.to_string())
                {
                    Ok(version) => (version, None),
                    Err(e) => (
                        UNRESOLVED_VERSION.to_string(),
                        Some(Issue::error(format!(
                            "failed to resolve latest version of profile {id}: {e}"
                        ))),
                    ),
                },
            };
            let document = match resolve_failure {
                Some(issue) => Err(issue),
                None => registry
                    .fetch_content(ArtifactKind::Profile, &id.to_string(), Some(&version))
                    .map_err(|e| Issue::error(format!("failed to fetch profile {id}@{version}: {e}")))
                    .and_then(|text| {
                        ProfileDocument::parse(&text).map_err(|e| Issue::error(e.to_string()))
                    }),
            };
            ResolvedProfile {
                source: ProfileSource::Remote { version },
                document,
            }
        }
    }
}

pub(crate) fn resolve_map(
    binding: &ProfileProviderEntry,
    id: &ProfileId,
    provider: &str,
    variant: Option<&str>,
    pinned_version: Option<&str>,
    registry: &dyn Registry,
) -> ResolvedMap {
    match &binding.file {
        Some(path) => match read_artifact(path, "map") {
            Ok(text) => ResolvedMap {
                source: MapSource::Local {
                    path: path.clone(),
                    source: text.clone(),
                },
                document: MapDocument::parse(&text).map_err(|e| Issue::error(e.to_string())),
            },
            Err(issue) => ResolvedMap {
                source: MapSource::Local {
                    path: path.clone(),
                    source: String::new(),
                },
                document: Err(issue),
            },
        },
        None => {
            let map_id = match variant {
                Some(variant) => format!("{id}.{provider}.{variant}"),
                None => format!("{id}.{provider}"),
            };
            let (version, resolve_failure) = match pinned_version {
                Some(version) => (version.to_string(), None),
                None => match registry.resolve_latest_version(ArtifactKind::Map, &map_id) {
                    Ok(version) => (version, None),
                    Err(e) => (
                        UNRESOLVED_VERSION.to_string(),
                        Some(Issue::error(format!(
                            "failed to resolve latest version of map {map_id}: {e}"
                        ))),
                    ),
                },
            };
            let document = match resolve_failure {
                Some(issue) => Err(issue),
                None => registry
                    .fetch_content(ArtifactKind::Map, &map_id, Some(&version))
                    .map_err(|e| Issue::error(format!("failed to fetch map {map_id}@{version}: {e}")))
                    .and_then(|text| {
                        MapDocument::parse(&text).map_err(|e| Issue::error(e.to_string()))
                    }),
            };
            ResolvedMap {
                source: MapSource::Remote { version },
                document,
            }
        }
    }
}

pub(crate) fn resolve_provider(
    entry: Option<&ProviderEntry>,
    name: &str,
    registry: &dyn Registry,
) -> ResolvedProvider {
    match entry {
        None => ResolvedProvider {
            source: ProviderSource::Remote,
            document: Err(Issue::error(format!(
                "provider \"{name}\" is not configured in the document"
            ))),
        },
        Some(entry) => match &entry.file {
            Some(path) => ResolvedProvider {
                source: ProviderSource::Local { path: path.clone() },
                document: read_artifact(path, "provider").and_then(|text| {
                    ProviderDocument::parse(&text).map_err(|e| Issue::error(e.to_string()))
                }),
            },
            None => ResolvedProvider {
                source: ProviderSource::Remote,
                document: registry
                    .fetch_content(ArtifactKind::Provider, name, None)
                    .map_err(|e| Issue::error(format!("failed to fetch provider {name}: {e}")))
                    .and_then(|text| {
                        ProviderDocument::parse(&text).map_err(|e| Issue::error(e.to_string()))
                    }),
            },
        },
    }
}

fn read_artifact(path: &Path, label: &str) -> Result<String, Issue> {
    if !path.exists() {
        return Err(Issue::error(format!(
            "{label} file not found: {}",
            path.display()
        )));
    }
    fs::read_to_string(path).map_err(|e| {
        Issue::error(format!("failed to read {label} file {}: {e}", path.display()))
    })
}
