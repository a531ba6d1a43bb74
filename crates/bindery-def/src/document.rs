//! Artifact documents: profiles, maps, and provider descriptions.
//!
//! These are the parsed forms the validators compare. The check engine
//! treats parsing as opaque: it only learns that an artifact did or did not
//! parse, never why beyond the error message.

use serde::{Deserialize, Serialize};

/// Errors from artifact parsing.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("profile parse error: {0}")]
    Profile(String),

    #[error("map parse error: {0}")]
    Map(String),

    #[error("provider parse error: {0}")]
    Provider(String),
}

/// Safety classification of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCaseSafety {
    Safe,
    Unsafe,
    Idempotent,
}

/// A use case declared by a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUseCase {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<UseCaseSafety>,
}

/// A parsed profile: the contract side of a binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    pub name: String,
    pub version: String,
    pub usecases: Vec<ProfileUseCase>,
}

impl ProfileDocument {
    /// Parses profile source text.
    pub fn parse(source: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(source).map_err(|e| DefinitionError::Profile(e.to_string()))
    }
}

/// One HTTP call a map makes to implement a use case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapCall {
    pub service: String,
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<String>,
}

/// A use case implementation inside a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapUseCase {
    pub name: String,
    #[serde(default)]
    pub calls: Vec<MapCall>,
}

/// A parsed map: the binding between one profile and one provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDocument {
    pub profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_version: Option<String>,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub usecases: Vec<MapUseCase>,
}

impl MapDocument {
    /// Parses map source text.
    pub fn parse(source: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(source).map_err(|e| DefinitionError::Map(e.to_string()))
    }
}

/// One service endpoint a provider exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderService {
    pub id: String,
    pub base_url: String,
}

/// A security scheme a provider accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    pub id: String,
    #[serde(rename = "type")]
    pub scheme_type: String,
}

/// A parsed provider description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDocument {
    pub name: String,
    pub services: Vec<ProviderService>,
    pub default_service: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_schemes: Vec<SecurityScheme>,
}

impl ProviderDocument {
    /// Parses provider description text.
    pub fn parse(source: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(source).map_err(|e| DefinitionError::Provider(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_profile_document() {
        let profile = ProfileDocument::parse(
            r#"{
                "name": "starwars/character-information",
                "version": "1.0.3",
                "usecases": [
                    {"name": "RetrieveCharacterInformation", "safety": "safe"}
                ]
            }"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.name, "starwars/character-information");
        assert_eq!(profile.version, "1.0.3");
        assert_eq!(profile.usecases.len(), 1);
        assert_eq!(profile.usecases[0].safety, Some(UseCaseSafety::Safe));
    }

    #[test]
    fn parses_map_document_with_defaults() {
        let map = MapDocument::parse(
            r#"{
                "profile": "starwars/character-information",
                "provider": "swapi",
                "usecases": [
                    {
                        "name": "RetrieveCharacterInformation",
                        "calls": [
                            {"service": "default", "method": "GET", "path": "/people"}
                        ]
                    }
                ]
            }"#,
        )
        .expect("map should parse");

        assert_eq!(map.profile_version, None);
        assert_eq!(map.variant, None);
        assert!(map.usecases[0].calls[0].security.is_empty());
    }

    #[test]
    fn parses_provider_document() {
        let provider = ProviderDocument::parse(
            r#"{
                "name": "swapi",
                "services": [{"id": "default", "baseUrl": "https://swapi.dev/api"}],
                "defaultService": "default",
                "securitySchemes": [{"id": "api-key", "type": "apiKey"}]
            }"#,
        )
        .expect("provider should parse");

        assert_eq!(provider.name, "swapi");
        assert_eq!(provider.default_service, "default");
        assert_eq!(provider.security_schemes[0].scheme_type, "apiKey");
    }

    #[test]
    fn parse_failures_are_reported_per_kind() {
        let error = ProfileDocument::parse("not json").expect_err("profile should not parse");
        assert!(error.to_string().starts_with("profile parse error:"));

        let error = MapDocument::parse("{}").expect_err("map should not parse");
        assert!(error.to_string().starts_with("map parse error:"));

        let error = ProviderDocument::parse("[]").expect_err("provider should not parse");
        assert!(error.to_string().starts_with("provider parse error:"));
    }
}
