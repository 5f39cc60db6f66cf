//! Built-in authored site values.
//!
//! Used whenever no `sitecfg.toml` is found, and as the content `sitecfg init`
//! writes out.

use super::{
    NavItem, SidebarGroup, SiteConfig, SiteInfoConfig, SocialIcon, SocialLink,
    ThemeSectionConfig,
};

pub const SITE_TITLE: &str = "Amit's Blog";
pub const SITE_DESCRIPTION: &str = "A place where I blog about writing code and building cool stuff.";
pub const GITHUB_PROFILE: &str = "https://github.com/amitpdev";

impl SiteConfig {
    /// The authored configuration. Cannot fail: no I/O, no parsing.
    pub fn preset() -> Self {
        Self {
            config_path: None,
            site: SiteInfoConfig {
                title: SITE_TITLE.into(),
                description: SITE_DESCRIPTION.into(),
                ..Default::default()
            },
            theme: ThemeSectionConfig {
                nav: vec![NavItem::new("Home", "/")],
                sidebar: vec![SidebarGroup::new(
                    "Articles",
                    vec![NavItem::new("iOS Cache Handler", "/ios-cache-handler")],
                )],
                social_links: vec![SocialLink::new(SocialIcon::Github, GITHUB_PROFILE)],
                footer: None,
            },
        }
    }
}
