//! Config initialization module.
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{cli::Cli, config::CONFIG_FILE, log};
use anyhow::{Context, Result};

/// Write a new `sitecfg.toml` holding the built-in values
///
/// If `dry_run` is true, only prints the config to stdout
pub fn new_config(cli: &Cli, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template()?);
        return Ok(());
    }

    let path = match &cli.config {
        Some(path) => path.clone(),
        None => std::env::current_dir()
            .context("Failed to get current working directory")?
            .join(CONFIG_FILE),
    };

    validate::validate_target(&path)?;
    config::write_config(&path)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
