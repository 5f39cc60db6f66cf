//! `[theme]` section configuration.
//!
//! Everything the host renders around page content: nav bar, sidebar,
//! social icons and footer. Lists keep the order they are written in.
//!
//! # Example
//!
//! ```toml
//! [[theme.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Articles"
//! items = [{ text = "iOS Cache Handler", link = "/ios-cache-handler" }]
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/amitpdev"
//!
//! [theme.footer]
//! copyright = "Copyright © 2024 Amit"
//! ```

mod footer;
mod nav;
mod sidebar;
mod social;

pub use footer::FooterConfig;
pub use nav::NavItem;
pub use sidebar::SidebarGroup;
pub use social::{SocialIcon, SocialLink};

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Navigation, sidebar and social links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Top navigation bar links, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar groups, in display order.
    pub sidebar: Vec<SidebarGroup>,

    /// Social profile links, rendered as icons.
    pub social_links: Vec<SocialLink>,

    /// Footer shown below every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
}

impl ThemeSectionConfig {
    /// Validate every nav item, sidebar group and social link.
    ///
    /// Entries are reported by position, e.g. `theme.sidebar[0].items[1].link`.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let nav = Self::FIELDS.nav;
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&nav.index(i), diag);
        }

        let sidebar = Self::FIELDS.sidebar;
        for (i, group) in self.sidebar.iter().enumerate() {
            group.validate(&sidebar.index(i), diag);
        }

        let social = Self::FIELDS.social_links;
        let mut seen = FxHashSet::default();
        for (i, link) in self.social_links.iter().enumerate() {
            let path = social.index(i);
            link.validate(&path, diag);
            if !seen.insert(link.icon) {
                diag.warn(
                    path.field("icon"),
                    format!("icon '{}' is used more than once", link.icon),
                );
            }
        }

        if self.footer.as_ref().is_some_and(FooterConfig::is_empty) {
            diag.warn(
                Self::FIELDS.footer,
                "footer has neither a message nor a copyright line",
            );
        }
    }
}
