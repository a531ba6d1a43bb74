//! The bindery compatibility-check engine.
//!
//! Enumerates profile/provider/map combinations from the configuration
//! document, resolves where each artifact's authoritative content comes
//! from (a local file or a versioned registry entry), invokes the
//! validators over both relationships of every map, and aggregates the
//! resulting issues into the two stable report formats.
//!
//! The remote registry and the validators are trait boundaries so the
//! engine runs against fixtures in tests and the real implementations in
//! the CLI.

mod boundary;
mod report;
mod resolve;
mod run;
mod source;
mod target;

pub use boundary::{ArtifactKind, Registry, RegistryError, Validator};
pub use report::{CheckResult, IssueCount, count_issues, format_human, format_json};
pub use run::run_checks;
pub use source::{MapSource, ProfileSource, ProviderSource};
pub use target::{CheckTarget, MapTarget, TargetError, prepare_targets};
