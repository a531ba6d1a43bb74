use bindery_config::DOCUMENT_FILE_NAME;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bindery",
    about = "Bindery: compatibility checks for profile/provider map bindings",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check configured profiles, providers, and maps for compatibility
    Check {
        /// Profile to check (all configured profiles when omitted)
        profile: Option<String>,

        /// Provider to check (requires a profile)
        #[arg(long)]
        provider: Option<String>,

        /// Path to the configuration document
        #[arg(long, default_value = DOCUMENT_FILE_NAME)]
        document: String,

        /// Registry base URL (falls back to $BINDERY_REGISTRY_URL, then the
        /// production registry)
        #[arg(long)]
        registry: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Suppress informational output
        #[arg(long, short)]
        quiet: bool,
    },
}
