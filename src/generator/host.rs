//! Host-facing view of the site configuration.
//!
//! The host framework reads one object:
//!
//! ```text
//! { title, description, [lang], [base],
//!   themeConfig: { nav, sidebar, socialLinks, [footer] } }
//! ```
//!
//! `HostConfig` borrows from [`SiteConfig`] and serializes to exactly that
//! shape. Key order follows field order (`serde_json/preserve_order`).

use crate::config::{FooterConfig, NavItem, SidebarGroup, SiteConfig, SocialLink};
use anyhow::Result;
use serde::Serialize;

/// Output format for `sitecfg export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Plain JSON object
    #[default]
    Json,
    /// ES module: `export default { ... };`
    Esm,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostConfig<'a> {
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<&'a str>,
    pub theme_config: HostThemeConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostThemeConfig<'a> {
    pub nav: &'a [NavItem],
    pub sidebar: &'a [SidebarGroup],
    pub social_links: &'a [SocialLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<&'a FooterConfig>,
}

impl<'a> From<&'a SiteConfig> for HostConfig<'a> {
    fn from(config: &'a SiteConfig) -> Self {
        Self {
            title: &config.site.title,
            description: &config.site.description,
            lang: config.site.lang.as_deref(),
            base: config.site.base.as_deref(),
            theme_config: HostThemeConfig {
                nav: &config.theme.nav,
                sidebar: &config.theme.sidebar,
                social_links: &config.theme.social_links,
                footer: config.theme.footer.as_ref(),
            },
        }
    }
}

impl HostConfig<'_> {
    /// Render in `format`; output always ends with a newline.
    pub fn render(&self, format: ExportFormat, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        Ok(match format {
            ExportFormat::Json => format!("{json}\n"),
            ExportFormat::Esm => format!("export default {json};\n"),
        })
    }
}
