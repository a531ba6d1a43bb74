//! Check orchestration: resolution and validation per target.

use crate::boundary::{Registry, Validator};
use crate::report::CheckResult;
use crate::resolve::{resolve_map, resolve_profile, resolve_provider};
use crate::target::CheckTarget;
use bindery_config::Document;
use bindery_def::Issue;

/// Runs every check for the prepared targets.
///
/// Each map target yields exactly two results, `profileMap` immediately
/// followed by `mapProvider`, and targets are processed in list order; the
/// report formats rely on this ordering. A failure scoped to one artifact
/// becomes an error issue on the affected result(s) and the remaining
/// targets still run.
pub fn run_checks(
    document: &Document,
    targets: &[CheckTarget],
    registry: &dyn Registry,
    validator: &dyn Validator,
) -> Vec<CheckResult> {
    let mut results = Vec::new();
    for target in targets {
        let Some(entry) = document.profile(&target.id.to_string()) else {
            continue;
        };
        let profile = resolve_profile(entry, &target.id, registry);

        for map_target in &target.maps {
            let Some(binding) = entry.provider(&map_target.provider) else {
                continue;
            };
            let map = resolve_map(
                binding,
                &target.id,
                &map_target.provider,
                map_target.variant.as_deref(),
                target.version.as_deref(),
                registry,
            );
            let provider = resolve_provider(
                document.provider(&map_target.provider),
                &map_target.provider,
                registry,
            );

            let profile_map_issues = pairwise_issues(&profile.document, &map.document, |p, m| {
                validator.validate_profile_map(p, m)
            });
            results.push(CheckResult::ProfileMap {
                profile_id: target.id.clone(),
                provider: map_target.provider.clone(),
                profile_from: profile.source.clone(),
                map_from: map.source.clone(),
                issues: profile_map_issues,
            });

            let map_provider_issues =
                pairwise_issues(&map.document, &provider.document, |m, p| {
                    validator.validate_map_provider(m, p)
                });
            results.push(CheckResult::MapProvider {
                profile_id: target.id.clone(),
                provider: map_target.provider.clone(),
                provider_from: provider.source.clone(),
                map_from: map.source.clone(),
                issues: map_provider_issues,
            });
        }
    }
    results
}

/// Validates a pair when both sides resolved; otherwise collects the
/// resolution failures of whichever sides did not.
fn pairwise_issues<A, B>(
    left: &Result<A, Issue>,
    right: &Result<B, Issue>,
    validate: impl FnOnce(&A, &B) -> Vec<Issue>,
) -> Vec<Issue> {
    match (left, right) {
        (Ok(left), Ok(right)) => validate(left, right),
        (left, right) => [left.as_ref().err(), right.as_ref().err()]
            .into_iter()
            .flatten()
            .cloned()
            .collect(),
    }
}
