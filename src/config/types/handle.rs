//! Global, write-once config handle.
//!
//! The configuration is produced once at startup and read-only afterwards,
//! so a `OnceLock` is all the synchronization it needs.

use crate::config::SiteConfig;
use std::sync::OnceLock;

/// Global config storage.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Install the configuration for the rest of the process.
///
/// The first installed value wins; later calls return it unchanged.
#[inline]
pub fn init_config(config: SiteConfig) -> &'static SiteConfig {
    let mut config = Some(config);
    let installed = CONFIG.get_or_init(|| config.take().unwrap_or_default());
    if config.is_some() {
        crate::debug!("config"; "config already initialized, keeping the first one");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_write_once() {
        let first = init_config(SiteConfig::preset());
        let mut other = SiteConfig::preset();
        other.site.title = "Another Blog".into();
        let second = init_config(other);

        assert!(std::ptr::eq(first, second));
        assert_eq!(second.site.title, "Amit's Blog");
    }
}
