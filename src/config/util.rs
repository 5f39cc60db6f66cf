//! Configuration utility functions.

use crate::utils::path::route::is_external_link;
use std::path::{Path, PathBuf};

/// What a configured link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Route inside the site, e.g. `/ios-cache-handler`.
    Route,
    /// Absolute URL, e.g. `https://github.com/amitpdev`.
    External,
}

/// URL schemes a nav/sidebar link may use.
const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Classify a nav/sidebar link, or explain why it is malformed.
///
/// Accepted forms:
/// - internal routes starting with a single `/`
/// - absolute `http`, `https` or `mailto` URLs; `http` and `https` URLs
///   must also carry a host
///
/// # Examples
/// ```ignore
/// classify_link("/")                       -> Ok(LinkKind::Route)
/// classify_link("https://github.com/x")    -> Ok(LinkKind::External)
/// classify_link("about")                   -> Err(..)
/// classify_link("//cdn.example.com")       -> Err(..)
/// ```
pub fn classify_link(link: &str) -> Result<LinkKind, String> {
    if link.trim().is_empty() {
        return Err("link is empty".into());
    }
    if link.trim() != link {
        return Err("link has leading or trailing whitespace".into());
    }
    if link.starts_with("//") {
        return Err("protocol-relative links are not supported".into());
    }
    if link.starts_with('/') {
        return Ok(LinkKind::Route);
    }
    if is_external_link(link) {
        let parsed = url::Url::parse(link).map_err(|e| format!("invalid URL: {e}"))?;
        if !LINK_SCHEMES.contains(&parsed.scheme()) {
            return Err(format!(
                "scheme '{}' not supported, must be one of {}",
                parsed.scheme(),
                LINK_SCHEMES.join(", ")
            ));
        }
        if matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_none_or(str::is_empty)
        {
            return Err("URL must have a valid host".into());
        }
        return Ok(LinkKind::External);
    }
    Err(format!(
        "`{link}` is neither an internal route nor an absolute URL"
    ))
}

/// Check that `link` is an absolute `http`/`https` URL with a host.
pub fn check_web_url(link: &str) -> Result<(), String> {
    match classify_link(link)? {
        LinkKind::Route => Err("expected an absolute URL, found a site route".into()),
        LinkKind::External => {
            let parsed = url::Url::parse(link).map_err(|e| format!("invalid URL: {e}"))?;
            if matches!(parsed.scheme(), "http" | "https") {
                Ok(())
            } else {
                Err(format!(
                    "scheme '{}' not supported, must be http or https",
                    parsed.scheme()
                ))
            }
        }
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/docs/posts/   ← cwd
/// /home/user/blog/sitecfg.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_routes() {
        assert_eq!(classify_link("/"), Ok(LinkKind::Route));
        assert_eq!(classify_link("/ios-cache-handler"), Ok(LinkKind::Route));
        assert_eq!(classify_link("/posts/a#intro"), Ok(LinkKind::Route));
    }

    #[test]
    fn test_classify_external() {
        assert_eq!(
            classify_link("https://github.com/amitpdev"),
            Ok(LinkKind::External)
        );
        assert_eq!(
            classify_link("mailto:amit@example.com"),
            Ok(LinkKind::External)
        );
    }

    #[test]
    fn test_classify_malformed() {
        assert!(classify_link("").is_err());
        assert!(classify_link("   ").is_err());
        assert!(classify_link(" /about").is_err());
        assert!(classify_link("about").is_err());
        assert!(classify_link("./about").is_err());
        assert!(classify_link("//cdn.example.com/x").is_err());
        // http URL without a host
        assert!(classify_link("https://").is_err());
    }

    #[test]
    fn test_classify_rejects_unlisted_schemes() {
        assert!(classify_link("javascript:alert(1)").is_err());
        assert!(classify_link("data:text/html,hi").is_err());
        assert!(classify_link("ftp://example.com/file").is_err());
        let err = classify_link("javascript:void(0)").unwrap_err();
        assert!(err.contains("http, https, mailto"), "{err}");
    }

    #[test]
    fn test_check_web_url() {
        assert!(check_web_url("https://github.com/amitpdev").is_ok());
        assert!(check_web_url("http://example.com").is_ok());
        assert!(check_web_url("/github").is_err());
        assert!(check_web_url("mailto:amit@example.com").is_err());
        assert!(check_web_url("github.com/amitpdev").is_err());
    }

    #[test]
    fn test_find_config_file_absolute_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("sitecfg.toml");
        assert_eq!(find_config_file(&missing), None);

        std::fs::write(&missing, "").unwrap();
        assert_eq!(find_config_file(&missing), Some(missing));
    }
}
