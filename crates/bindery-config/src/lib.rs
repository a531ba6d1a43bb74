//! The bindery configuration document.
//!
//! `bindery.json` enumerates configured profiles, providers, and maps with
//! per-entry provenance: a local file path or a remote registry version.
//! The check engine only ever reads this document; other tooling owns
//! mutation.
//!
//! Entry order matters downstream (check results follow document order), so
//! normalization keeps profiles, providers, and per-profile bindings in the
//! order the document declares them.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name for the configuration document.
pub const DOCUMENT_FILE_NAME: &str = "bindery.json";

/// Errors from loading or normalizing the configuration document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("failed to read document: {0}")]
    Read(String),

    #[error("failed to parse document: {0}")]
    Parse(String),

    #[error("invalid document: {0}")]
    Invalid(String),
}

/// Per-provider binding under a profile entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileProviderEntry {
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub map_variant: Option<String>,
}

/// A configured profile: provenance plus its provider bindings in document
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileEntry {
    pub version: Option<String>,
    pub file: Option<PathBuf>,
    pub providers: Vec<(String, ProfileProviderEntry)>,
}

impl ProfileEntry {
    /// Looks up the binding for one provider.
    pub fn provider(&self, name: &str) -> Option<&ProfileProviderEntry> {
        self.providers
            .iter()
            .find(|(provider, _)| provider == name)
            .map(|(_, entry)| entry)
    }
}

/// A configured provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderEntry {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// The normalized configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    profiles: Vec<(String, ProfileEntry)>,
    providers: Vec<(String, ProviderEntry)>,
}

impl Document {
    /// Loads and normalizes a document from a file path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DocumentError::NotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| DocumentError::Read(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parses and normalizes document text.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        let root: Value =
            serde_json::from_str(text).map_err(|e| DocumentError::Parse(e.to_string()))?;
        let Some(root) = root.as_object() else {
            return Err(DocumentError::Invalid("top-level object required".to_string()));
        };

        let mut profiles = Vec::new();
        if let Some(raw) = root.get("profiles") {
            let Some(rows) = raw.as_object() else {
                return Err(DocumentError::Invalid("profiles: object required".to_string()));
            };
            for (id, row) in rows {
                profiles.push((id.clone(), parse_profile_entry(id, row)?));
            }
        }

        let mut providers = Vec::new();
        if let Some(raw) = root.get("providers") {
            let Some(rows) = raw.as_object() else {
                return Err(DocumentError::Invalid("providers: object required".to_string()));
            };
            for (name, row) in rows {
                let entry: ProviderEntry = serde_json::from_value(row.clone())
                    .map_err(|e| DocumentError::Invalid(format!("providers.{name}: {e}")))?;
                providers.push((name.clone(), entry));
            }
        }

        Ok(Self {
            profiles,
            providers,
        })
    }

    /// Profiles in document order.
    pub fn profiles(&self) -> &[(String, ProfileEntry)] {
        &self.profiles
    }

    /// Providers in document order.
    pub fn providers(&self) -> &[(String, ProviderEntry)] {
        &self.providers
    }

    /// Looks up a profile entry by its raw identifier.
    pub fn profile(&self, id: &str) -> Option<&ProfileEntry> {
        self.profiles
            .iter()
            .find(|(profile, _)| profile == id)
            .map(|(_, entry)| entry)
    }

    /// Looks up a top-level provider entry by name.
    pub fn provider(&self, name: &str) -> Option<&ProviderEntry> {
        self.providers
            .iter()
            .find(|(provider, _)| provider == name)
            .map(|(_, entry)| entry)
    }
}

fn parse_profile_entry(id: &str, value: &Value) -> Result<ProfileEntry, DocumentError> {
    let Some(row) = value.as_object() else {
        return Err(DocumentError::Invalid(format!(
            "profiles.{id}: object required"
        )));
    };

    let version = optional_string(row.get("version"), &format!("profiles.{id}.version"))?;
    let file = optional_string(row.get("file"), &format!("profiles.{id}.file"))?;

    let mut providers = Vec::new();
    if let Some(raw) = row.get("providers") {
        let Some(rows) = raw.as_object() else {
            return Err(DocumentError::Invalid(format!(
                "profiles.{id}.providers: object required"
            )));
        };
        for (name, row) in rows {
            let entry: ProfileProviderEntry = serde_json::from_value(row.clone())
                .map_err(|e| DocumentError::Invalid(format!("profiles.{id}.providers.{name}: {e}")))?;
            providers.push((name.clone(), entry));
        }
    }

    Ok(ProfileEntry {
        version,
        file: file.map(PathBuf::from),
        providers,
    })
}

fn optional_string(value: Option<&Value>, label: &str) -> Result<Option<String>, DocumentError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(DocumentError::Invalid(format!("{label}: string required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    const SAMPLE: &str = r#"{
        "profiles": {
            "starwars/character-information": {
                "version": "1.0.3",
                "providers": {
                    "swapi": {},
                    "swapi-local": {"file": "maps/swapi-local.map.json", "mapVariant": "edge"}
                }
            },
            "vcs/pull-request": {
                "file": "profiles/pull-request.profile.json",
                "providers": {}
            }
        },
        "providers": {
            "swapi": {},
            "swapi-local": {"file": "providers/swapi-local.provider.json"}
        }
    }"#;

    #[test]
    fn normalizes_profiles_and_providers_in_document_order() {
        let document = Document::from_json(SAMPLE).expect("document should parse");

        let profile_ids: Vec<&str> = document
            .profiles()
            .iter()
            .map(|(id, _)| id.as_str())
            .collect();
        assert_eq!(
            profile_ids,
            vec!["starwars/character-information", "vcs/pull-request"]
        );

        let entry = document
            .profile("starwars/character-information")
            .expect("profile should be present");
        assert_eq!(entry.version.as_deref(), Some("1.0.3"));
        assert_eq!(entry.file, None);

        let bindings: Vec<&str> = entry
            .providers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(bindings, vec!["swapi", "swapi-local"]);

        let binding = entry.provider("swapi-local").expect("binding should exist");
        assert_eq!(
            binding.file.as_deref(),
            Some(Path::new("maps/swapi-local.map.json"))
        );
        assert_eq!(binding.map_variant.as_deref(), Some("edge"));
    }

    #[test]
    fn provider_lookup_distinguishes_configured_and_unconfigured() {
        let document = Document::from_json(SAMPLE).expect("document should parse");
        assert!(document.provider("swapi").is_some());
        assert!(document.provider("missing").is_none());
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert!(matches!(
            Document::from_json("not json"),
            Err(DocumentError::Parse(_))
        ));
        assert!(matches!(
            Document::from_json("[]"),
            Err(DocumentError::Invalid(_))
        ));
        assert!(matches!(
            Document::from_json(r#"{"profiles": []}"#),
            Err(DocumentError::Invalid(_))
        ));
        assert!(matches!(
            Document::from_json(r#"{"profiles": {"a": {"version": 1}}}"#),
            Err(DocumentError::Invalid(_))
        ));
    }

    #[test]
    fn empty_document_normalizes_to_nothing() {
        let document = Document::from_json("{}").expect("document should parse");
        assert!(document.profiles().is_empty());
        assert!(document.providers().is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("bindery-config-missing-{unique}.json"));

        let result = Document::load(&path);
        match result {
            Err(DocumentError::NotFound(message)) => {
                assert!(message.contains("bindery-config-missing"));
            }
            other => panic!("expected not-found error, got {other:?}"),
        }
    }
}
