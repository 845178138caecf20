//! CLI definition, tracing setup, and the run entry point.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use verso_enrich_core::run_placeholder;
use verso_enrich_shared::{AppConfig, LogFormat, resolve_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// verso-enrich — enrich the Verso travel dataset.
#[derive(Debug, Parser)]
#[command(
    name = "verso-enrich",
    version,
    about = "Placeholder for Verso dataset enrichment; updates are applied manually for now.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text or json. Overrides the config file.
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML config file. Nothing is read from disk without it.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Settings and tracing
// ---------------------------------------------------------------------------

/// Resolve the config file (if any) named on the command line.
pub(crate) fn load_settings(cli: &Cli) -> Result<AppConfig> {
    Ok(resolve_config(cli.config.as_deref())?)
}

/// Build the default filter directive: `-v` flags win over the config level.
fn filter_directive(verbose: u8, config: &AppConfig) -> String {
    let level = match verbose {
        0 => config.logging.level.to_ascii_lowercase(),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    };
    format!("verso_enrich={level}")
}

/// Initialize the tracing subscriber. Diagnostics go to stderr so stdout
/// carries only the notices.
pub(crate) fn init_tracing(cli: &Cli, config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(cli.verbose, config)));

    match cli.log_format.unwrap_or(config.logging.format) {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Run the placeholder against stdout.
pub(crate) fn run(cli: &Cli) -> Result<()> {
    info!(config = ?cli.config, "starting enrichment run");

    let mut out = std::io::stdout().lock();
    let dataset = run_placeholder(&mut out)?;

    info!(countries = dataset.country_count(), "run complete, nothing written");
    Ok(())
}
