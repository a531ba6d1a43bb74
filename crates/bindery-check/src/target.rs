//! Check target enumeration from the configuration document.

use bindery_config::Document;
use bindery_def::{IdentifierError, ProfileId};

/// One provider binding to check under a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTarget {
    pub provider: String,
    pub variant: Option<String>,
}

/// The unit of work: a profile plus the maps configured under it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckTarget {
    pub id: ProfileId,
    /// Pinned version, only when the document declares one explicitly.
    pub version: Option<String>,
    pub maps: Vec<MapTarget>,
}

/// Errors from target enumeration.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("invalid profile id in document: {0}")]
    InvalidProfileId(#[from] IdentifierError),
}

/// Enumerates the profile/provider combinations to check.
///
/// With no filters, every profile entry contributes one target carrying all
/// of its configured providers in document order. A profile filter narrows
/// the list to that entry; adding a provider filter narrows the target's
/// map list to at most the matching binding. An unmatched provider filter
/// leaves the map list empty; deciding what that means is the caller's job.
pub fn prepare_targets(
    document: &Document,
    profile_filter: Option<&ProfileId>,
    provider_filter: Option<&str>,
) -> Result<Vec<CheckTarget>, TargetError> {
    let mut targets = Vec::new();
    for (raw_id, entry) in document.profiles() {
        let id = ProfileId::parse(raw_id)?;
        if let Some(filter) = profile_filter
            && &id != filter
        {
            continue;
        }

        let mut maps = Vec::new();
        for (provider, binding) in &entry.providers {
            if let Some(filter) = provider_filter
                && provider != filter
            {
                continue;
            }
            maps.push(MapTarget {
                provider: provider.clone(),
                variant: binding.map_variant.clone(),
            });
        }

        targets.push(CheckTarget {
            id,
            version: entry.version.clone(),
            maps,
        });
    }
    Ok(targets)
}
