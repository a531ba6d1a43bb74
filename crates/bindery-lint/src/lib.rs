//! Structural compatibility validation between artifacts.
//!
//! The check engine treats validation as a black box behind the
//! [`Validator`] trait; this crate is the production implementation. Every
//! issue comes back pre-classified as an error or a warning, and the engine
//! renders the messages without interpreting them.

use bindery_check::Validator;
use bindery_def::{Issue, MapDocument, ProfileDocument, ProviderDocument};

/// The default validator: structural checks over parsed artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Linter;

impl Validator for Linter {
    fn validate_profile_map(&self, profile: &ProfileDocument, map: &MapDocument) -> Vec<Issue> {
        let mut issues = Vec::new();

        if map.profile != profile.name {
            issues.push(Issue::error(format!(
                "map is for profile \"{}\", expected \"{}\"",
                map.profile, profile.name
            )));
        }

        if let Some(wanted) = &map.profile_version
            && !version_compatible(wanted, &profile.version)
        {
            issues.push(Issue::error(format!(
                "map expects profile version {wanted}, profile is {}",
                profile.version
            )));
        }

        for usecase in &profile.usecases {
            if !map.usecases.iter().any(|u| u.name == usecase.name) {
                issues.push(Issue::error(format!(
                    "use case {} is not implemented by the map",
                    usecase.name
                )));
            }
        }
        for usecase in &map.usecases {
            if !profile.usecases.iter().any(|u| u.name == usecase.name) {
                issues.push(Issue::warn(format!(
                    "map implements {}, which the profile does not define",
                    usecase.name
                )));
            }
        }

        issues
    }

    fn validate_map_provider(&self, map: &MapDocument, provider: &ProviderDocument) -> Vec<Issue> {
        let mut issues = Vec::new();

        if map.provider != provider.name {
            issues.push(Issue::error(format!(
                "map is for provider \"{}\", expected \"{}\"",
                map.provider, provider.name
            )));
        }

        if !provider
            .services
            .iter()
            .any(|service| service.id == provider.default_service)
        {
            issues.push(Issue::error(format!(
                "default service \"{}\" is not defined by the provider",
                provider.default_service
            )));
        }

        for usecase in &map.usecases {
            if usecase.calls.is_empty() {
                issues.push(Issue::warn(format!(
                    "use case {} defines no calls",
                    usecase.name
                )));
            }
            for call in &usecase.calls {
                if !provider.services.iter().any(|service| service.id == call.service) {
                    issues.push(Issue::error(format!(
                        "use case {} calls unknown service \"{}\"",
                        usecase.name, call.service
                    )));
                }
                for scheme in &call.security {
                    if !provider
                        .security_schemes
                        .iter()
                        .any(|candidate| &candidate.id == scheme)
                    {
                        issues.push(Issue::error(format!(
                            "use case {} references unknown security scheme \"{}\"",
                            usecase.name, scheme
                        )));
                    }
                }
            }
        }

        issues
    }
}

/// A map's version pin may be a prefix of the profile's version: a map
/// pinned to `1.0` accepts profile `1.0.3`.
fn version_compatible(wanted: &str, actual: &str) -> bool {
    actual == wanted || actual.starts_with(&format!("{wanted}."))
}
