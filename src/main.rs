//! Gitto - a minimal personal blog builder.

mod cli;
mod config;
mod embed;
mod generator;
mod logger;
mod page;
mod seo;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{BaseUrl, SiteConfig};
use site::Site;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    cli::serve::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Composition root: config and base URL are resolved once, then lent out.
    let config = SiteConfig::load(&cli)?;
    let base_url = BaseUrl::resolve(&config)?;
    let site = Site::load(&config, base_url)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&site),
        Commands::Serve { .. } => cli::serve::serve_site(&site),
        Commands::Query { pretty, .. } => cli::query::run_query(&site, *pretty),
    }
}
