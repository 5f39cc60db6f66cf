//! Site configuration management for `sitecfg.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── theme/     # [theme] nav, sidebar, social links, footer
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── preset.rs      # Built-in authored values
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section                | Purpose                                  |
//! |------------------------|------------------------------------------|
//! | `[site]`               | Title, description, language, base path  |
//! | `[[theme.nav]]`        | Top navigation bar links                 |
//! | `[[theme.sidebar]]`    | Sidebar groups and their links           |
//! | `[[theme.social_links]]` | Social profile icons                   |
//! | `[theme.footer]`       | Footer message and copyright             |

mod preset;
pub mod section;
pub mod types;
mod util;

pub use section::{
    FooterConfig, NavItem, SidebarGroup, SiteInfoConfig, SocialIcon, SocialLink,
    ThemeSectionConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, init_config};
pub use util::LinkKind;

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use util::find_config_file;

/// Default config filename, searched upward from the working directory.
pub const CONFIG_FILE: &str = "sitecfg.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitecfg.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Config file the values came from; `None` for the built-in preset
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Navigation, sidebar and social links
    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// An explicit `--config` must exist. Without one, `sitecfg.toml` is
    /// searched upward from cwd and the built-in preset is used if none is
    /// found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = Self::resolve_config_path(cli)? else {
            debug!("config"; "no {} found, using built-in preset", CONFIG_FILE);
            return Ok(Self::preset());
        };

        debug!("config"; "loading {}", config_path.display());
        let mut config = Self::from_path(&config_path)?;
        config.config_path = Some(crate::utils::path::normalize_path(&config_path));
        Ok(config)
    }

    /// Resolve config file path: `Some` if a file was found.
    fn resolve_config_path(cli: &Cli) -> Result<Option<PathBuf>> {
        match &cli.config {
            Some(path) => find_config_file(path).map(Some).ok_or_else(|| {
                ConfigError::Io(
                    path.clone(),
                    std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                )
                .into()
            }),
            None => Ok(find_config_file(Path::new(CONFIG_FILE))),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse '{}'", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Where the values came from, for messages.
    pub fn source_label(&self) -> String {
        match &self.config_path {
            Some(path) => path.display().to_string(),
            None => "built-in preset".to_string(),
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every validation problem without failing.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        diag
    }

    /// Validate configuration, returning all errors at once.
    ///
    /// Warnings are printed and do not fail validation.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    /// Parse configuration from a TOML string (unknown fields are ignored).
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

// ============================================================================
// tests
// ============================================================================
