//! verso-enrich CLI — placeholder for the travel dataset enrichment step.
//!
//! Prints the current enrichment notices; dataset updates are made by hand.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = commands::load_settings(&cli)?;
    commands::init_tracing(&cli, &config);
    commands::run(&cli)
}
