use crate::support::{fail, info};
use bindery_check::{count_issues, format_human, format_json, prepare_targets, run_checks};
use bindery_config::Document;
use bindery_def::{ProfileId, is_valid_provider_name};
use bindery_lint::Linter;
use bindery_registry::{DEFAULT_REGISTRY_URL, RegistryClient};

pub struct Args {
    pub profile: Option<String>,
    pub provider: Option<String>,
    pub document: String,
    pub registry: Option<String>,
    pub json: bool,
    pub quiet: bool,
}

pub fn run(args: Args) {
    if args.provider.is_some() && args.profile.is_none() {
        fail("--provider requires a profile argument");
    }

    // Identifier format checks come first: a malformed argument never
    // touches the document.
    let profile_filter = args.profile.as_deref().map(|raw| {
        ProfileId::parse(raw).unwrap_or_else(|e| fail(format!("invalid profile id: {e}")))
    });
    if let Some(name) = args.provider.as_deref()
        && !is_valid_provider_name(name)
    {
        fail(format!("invalid provider name: \"{name}\""));
    }

    let document =
        Document::load(&args.document).unwrap_or_else(|e| fail(format!("unable to check: {e}")));

    if let Some(id) = &profile_filter {
        let Some(entry) = document.profile(&id.to_string()) else {
            fail(format!(
                "unable to check, profile \"{id}\" not found in {}",
                args.document
            ));
        };
        if let Some(name) = args.provider.as_deref() {
            if entry.provider(name).is_none() {
                fail(format!(
                    "unable to check, provider \"{name}\" not configured for profile \"{id}\""
                ));
            }
            if document.provider(name).is_none() {
                fail(format!(
                    "unable to check, provider \"{name}\" not found in {}",
                    args.document
                ));
            }
        }
    }

    let targets = prepare_targets(&document, profile_filter.as_ref(), args.provider.as_deref())
        .unwrap_or_else(|e| fail(format!("unable to check: {e}")));
    if targets.is_empty() {
        fail(format!(
            "unable to check, no profiles configured in {}",
            args.document
        ));
    }

    let map_count: usize = targets.iter().map(|target| target.maps.len()).sum();
    info(
        args.quiet,
        format!("checking {} profile(s), {} map(s)", targets.len(), map_count),
    );

    let registry_url = args
        .registry
        .or_else(|| std::env::var("BINDERY_REGISTRY_URL").ok())
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
    let registry = RegistryClient::new(registry_url).unwrap_or_else(|e| fail(e.to_string()));

    let results = run_checks(&document, &targets, &registry, &Linter);

    // The report always prints, pass or fail.
    if args.json {
        let report = format_json(&results)
            .unwrap_or_else(|e| fail(format!("failed to render json report: {e}")));
        println!("{report}");
    } else {
        print!("{}", format_human(&results));
    }

    let count = count_issues(&results);
    if !count.is_clean() {
        fail(format!(
            "check found {} errors and {} warnings",
            count.errors, count.warnings
        ));
    }
    info(
        args.quiet,
        format!("check found no issues in {} result(s)", results.len()),
    );
}
