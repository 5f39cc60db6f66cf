//! sitecfg - site and theme configuration provider for a static blog.

mod cli;
mod config;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let load = || SiteConfig::load(&cli).map(init_config);

    match &cli.command {
        Commands::Init { dry } => cli::init::new_config(&cli, *dry),
        Commands::Export { args } => cli::export::export_config(load()?, args),
        Commands::Check { args } => cli::check::check_config(load()?, args),
    }
}
