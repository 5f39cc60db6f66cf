//! Configuration file generation.
//!
//! Renders the built-in preset as a commented `sitecfg.toml`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

use crate::config::{SiteConfig, SiteInfoConfig, SocialIcon, ThemeSectionConfig};

/// Generate sitecfg.toml content with comments
pub fn generate_config_template() -> Result<String> {
    let preset = SiteConfig::preset();
    let mut out = String::new();

    out.push_str(&format!(
        "# sitecfg configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Lists keep the order they are written in.\n");
    let icons: Vec<_> = SocialIcon::ALL.iter().map(SocialIcon::as_str).collect();
    out.push_str(&format!("# Social icons: {}\n\n", icons.join(", ")));

    // [site] section
    push_section(
        &mut out,
        SiteInfoConfig::TEMPLATE_DOC,
        SiteInfoConfig::TEMPLATE_SECTION,
        &preset.site,
    )?;
    out.push('\n');

    // [[theme.*]] sections
    push_section(
        &mut out,
        ThemeSectionConfig::TEMPLATE_DOC,
        ThemeSectionConfig::TEMPLATE_SECTION,
        &preset.theme,
    )?;

    Ok(out)
}

/// Append `value` under `[section]`, preceded by its doc comment.
fn push_section<T: Serialize>(out: &mut String, doc: &str, section: &str, value: &T) -> Result<()> {
    for line in doc.lines() {
        out.push_str("# ");
        out.push_str(line.trim());
        out.push('\n');
    }

    let mut table = toml::Table::new();
    table.insert(section.to_string(), toml::Value::try_from(value)?);
    out.push_str(&toml::to_string(&table)?);
    Ok(())
}

/// Write the default configuration to `path`
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template()?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
