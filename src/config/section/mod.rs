//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitecfg.toml`:
//!
//! | Module  | TOML Section | Purpose                                    |
//! |---------|--------------|--------------------------------------------|
//! | `site`  | `[site]`     | Title, description, language, base path    |
//! | `theme` | `[theme]`    | Nav bar, sidebar, social links, footer     |

mod site;
pub mod theme;

pub use site::SiteInfoConfig;
pub use theme::{FooterConfig, NavItem, SidebarGroup, SocialIcon, SocialLink, ThemeSectionConfig};
