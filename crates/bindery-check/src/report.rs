//! Result records, aggregation, and the two stable report formats.

use crate::source::{MapSource, ProfileSource, ProviderSource};
use bindery_def::{Issue, IssueKind, ProfileId};
use serde::{Deserialize, Serialize};

/// One checked relationship.
///
/// Every map target produces two of these, `profileMap` then `mapProvider`,
/// reported independently even though they share the same map. The JSON
/// shape of this type is a contract external tooling depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CheckResult {
    #[serde(rename_all = "camelCase")]
    ProfileMap {
        profile_id: ProfileId,
        provider: String,
        profile_from: ProfileSource,
        map_from: MapSource,
        issues: Vec<Issue>,
    },
    #[serde(rename_all = "camelCase")]
    MapProvider {
        profile_id: ProfileId,
        provider: String,
        provider_from: ProviderSource,
        map_from: MapSource,
        issues: Vec<Issue>,
    },
}

impl CheckResult {
    /// The profile this result belongs to.
    pub fn profile_id(&self) -> &ProfileId {
        match self {
            Self::ProfileMap { profile_id, .. } | Self::MapProvider { profile_id, .. } => profile_id,
        }
    }

    /// The provider side of the checked map.
    pub fn provider(&self) -> &str {
        match self {
            Self::ProfileMap { provider, .. } | Self::MapProvider { provider, .. } => provider,
        }
    }

    /// Issues attached to this result.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::ProfileMap { issues, .. } | Self::MapProvider { issues, .. } => issues,
        }
    }
}

/// Flat issue counts across a result list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueCount {
    pub errors: usize,
    pub warnings: usize,
}

impl IssueCount {
    /// True when nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

/// Counts errors and warnings across all results.
pub fn count_issues(results: &[CheckResult]) -> IssueCount {
    let mut count = IssueCount::default();
    for result in results {
        for issue in result.issues() {
            match issue.kind {
                IssueKind::Error => count.errors += 1,
                IssueKind::Warn => count.warnings += 1,
            }
        }
    }
    count
}

/// Renders the human-readable report.
///
/// One header line per result, so a clean pair still shows it was checked.
/// Issue lines are indented under their header. Output order follows input
/// order exactly.
pub fn format_human(results: &[CheckResult]) -> String {
    let mut out = String::new();
    for result in results {
        match result {
            CheckResult::ProfileMap {
                profile_id,
                provider,
                profile_from,
                map_from,
                ..
            } => {
                out.push_str(&format!(
                    "profile {profile_id} ({profile_from}) against map for provider {provider} ({map_from})\n"
                ));
            }
            CheckResult::MapProvider {
                provider,
                provider_from,
                map_from,
                ..
            } => {
                out.push_str(&format!(
                    "map for provider {provider} ({map_from}) against provider {provider} ({provider_from})\n"
                ));
            }
        }
        for issue in result.issues() {
            let marker = match issue.kind {
                IssueKind::Error => "error",
                IssueKind::Warn => "warn",
            };
            out.push_str(&format!("  {marker}: {}\n", issue.message));
        }
    }
    out
}

/// Renders the machine-readable report.
///
/// Lossless with respect to the in-memory result list: parsing the output
/// back reconstructs the input by value.
pub fn format_json(results: &[CheckResult]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn id(raw: &str) -> ProfileId {
        ProfileId::parse(raw).expect("test id should parse")
    }

    /// The scenario fixture: two providers under one profile, four results.
    /// `swapi` checks remotely and its map/provider relationship reports two
    /// errors and one warning; `swapi-local` checks locally and is clean.
    fn scenario_results() -> Vec<CheckResult> {
        let profile_id = id("starwars/character-information");
        vec![
            CheckResult::ProfileMap {
                profile_id: profile_id.clone(),
                provider: "swapi".to_string(),
                profile_from: ProfileSource::Remote {
                    version: "1.0.3".to_string(),
                },
                map_from: MapSource::Remote {
                    version: "1.0.3".to_string(),
                },
                issues: Vec::new(),
            },
            CheckResult::MapProvider {
                profile_id: profile_id.clone(),
                provider: "swapi".to_string(),
                provider_from: ProviderSource::Remote,
                map_from: MapSource::Remote {
                    version: "1.0.3".to_string(),
                },
                issues: vec![
                    Issue::error("first-error"),
                    Issue::error("second-error"),
                    Issue::warn("first-warn"),
                ],
            },
            CheckResult::ProfileMap {
                profile_id: profile_id.clone(),
                provider: "swapi-local".to_string(),
                profile_from: ProfileSource::Remote {
                    version: "1.0.3".to_string(),
                },
                map_from: MapSource::Local {
                    path: PathBuf::from("maps/swapi-local.map.json"),
                    source: "{}".to_string(),
                },
                issues: Vec::new(),
            },
            CheckResult::MapProvider {
                profile_id,
                provider: "swapi-local".to_string(),
                provider_from: ProviderSource::Local {
                    path: PathBuf::from("providers/swapi-local.provider.json"),
                },
                map_from: MapSource::Local {
                    path: PathBuf::from("maps/swapi-local.map.json"),
                    source: "{}".to_string(),
                },
                issues: Vec::new(),
            },
        ]
    }

    #[test]
    fn counts_are_flat_sums() {
        let results = scenario_results();
        let count = count_issues(&results);
        assert_eq!(
            count,
            IssueCount {
                errors: 2,
                warnings: 1
            }
        );
        assert!(!count.is_clean());
        assert!(count_issues(&[]).is_clean());
    }

    #[test]
    fn counts_are_order_independent() {
        let mut results = scenario_results();
        let baseline = count_issues(&results);
        results.reverse();
        assert_eq!(count_issues(&results), baseline);
        results.swap(0, 2);
        assert_eq!(count_issues(&results), baseline);
    }

    #[test]
    fn human_report_is_stable() {
        let expected = "\
profile starwars/character-information (remote @ 1.0.3) against map for provider swapi (remote @ 1.0.3)
map for provider swapi (remote @ 1.0.3) against provider swapi (remote)
  error: first-error
  error: second-error
  warn: first-warn
profile starwars/character-information (remote @ 1.0.3) against map for provider swapi-local (local at maps/swapi-local.map.json)
map for provider swapi-local (local at maps/swapi-local.map.json) against provider swapi-local (local at providers/swapi-local.provider.json)
";
        assert_eq!(format_human(&scenario_results()), expected);
    }

    #[test]
    fn clean_results_still_render_headers() {
        let results = scenario_results();
        let rendered = format_human(&results);
        assert_eq!(rendered.lines().count(), results.len() + 3);
    }

    #[test]
    fn json_report_round_trips() {
        let results = scenario_results();
        let rendered = format_json(&results).expect("report should serialize");
        let decoded: Vec<CheckResult> =
            serde_json::from_str(&rendered).expect("report should deserialize");
        assert_eq!(decoded, results);
    }

    #[test]
    fn json_report_field_names_are_stable() {
        let results = scenario_results();
        let rendered = format_json(&results).expect("report should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("report should parse");

        assert_eq!(value[0]["kind"], "profileMap");
        assert_eq!(value[0]["profileId"], "starwars/character-information");
        assert_eq!(value[0]["profileFrom"]["kind"], "remote");
        assert_eq!(value[0]["profileFrom"]["version"], "1.0.3");
        assert_eq!(value[1]["kind"], "mapProvider");
        assert_eq!(value[1]["providerFrom"]["kind"], "remote");
        assert_eq!(value[1]["issues"][0]["kind"], "error");
        assert_eq!(value[1]["issues"][0]["message"], "first-error");
        assert_eq!(value[3]["mapFrom"]["path"], "maps/swapi-local.map.json");
    }
}
