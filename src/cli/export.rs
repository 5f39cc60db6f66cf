//! `sitecfg export`: hand the configuration to the host framework.

use crate::{
    cli::ExportArgs,
    config::SiteConfig,
    generator::HostConfig,
    log,
    utils::path::expand_tilde,
};
use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Validate, render and write the host-facing configuration.
///
/// Invalid configurations are never exported.
pub fn export_config(config: &SiteConfig, args: &ExportArgs) -> Result<()> {
    config.validate()?;

    let rendered = HostConfig::from(config).render(args.format, !args.compact)?;

    match &args.output {
        Some(path) => {
            let path = write_output(path, &rendered)?;
            log!("export"; "wrote {} from {}", path.display(), config.source_label());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Write `content` to `path` (tilde expanded), creating parent directories.
fn write_output(path: &Path, content: &str) -> Result<PathBuf> {
    let path = expand_tilde(path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, content)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path)
}
