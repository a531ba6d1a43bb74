//! Source provenance for checked artifacts.
//!
//! Locality is a document-level property: an artifact is local exactly when
//! its document entry declares a file path, never inferred from content.
//! Each artifact resolves to exactly one variant per check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a profile's authoritative content comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProfileSource {
    /// A file tracked in the project tree.
    Local { path: PathBuf },
    /// A versioned registry entry.
    Remote { version: String },
}

/// Where a map's authoritative content comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MapSource {
    /// A file tracked in the project tree, with its source text once read.
    Local { path: PathBuf, source: String },
    /// A versioned registry entry.
    Remote { version: String },
}

/// Where a provider description comes from.
///
/// Providers carry no version: either a local file or the registry's
/// current description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProviderSource {
    Local { path: PathBuf },
    Remote,
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path } => write!(f, "local at {}", path.display()),
            Self::Remote { version } => write!(f, "remote @ {version}"),
        }
    }
}

impl fmt::Display for MapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path, .. } => write!(f, "local at {}", path.display()),
            Self::Remote { version } => write!(f, "remote @ {version}"),
        }
    }
}

impl fmt::Display for ProviderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path } => write!(f, "local at {}", path.display()),
            Self::Remote => write!(f, "remote"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_serialize_with_kind_tags() {
        let profile = ProfileSource::Remote {
            version: "1.0.3".to_string(),
        };
        let encoded = serde_json::to_string(&profile).expect("source should serialize");
        assert_eq!(encoded, r#"{"kind":"remote","version":"1.0.3"}"#);

        let map = MapSource::Local {
            path: PathBuf::from("maps/swapi.map.json"),
            source: "{}".to_string(),
        };
        let encoded = serde_json::to_string(&map).expect("source should serialize");
        assert_eq!(
            encoded,
            r#"{"kind":"local","path":"maps/swapi.map.json","source":"{}"}"#
        );

        let provider = ProviderSource::Remote;
        let encoded = serde_json::to_string(&provider).expect("source should serialize");
        assert_eq!(encoded, r#"{"kind":"remote"}"#);
    }

    #[test]
    fn sources_render_for_report_headers() {
        let profile = ProfileSource::Local {
            path: PathBuf::from("profiles/character-information.profile.json"),
        };
        assert_eq!(
            profile.to_string(),
            "local at profiles/character-information.profile.json"
        );
        assert_eq!(
            ProfileSource::Remote {
                version: "1.0.3".to_string()
            }
            .to_string(),
            "remote @ 1.0.3"
        );
        assert_eq!(ProviderSource::Remote.to_string(), "remote");
    }
}
