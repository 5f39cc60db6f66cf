//! URL and route utilities.
//!
//! - Link type detection (external vs internal)
//! - Mapping site routes to the source files that would serve them

use std::path::{Component, Path, PathBuf};

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// # Examples
/// ```ignore
/// assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// Source files (relative to the content dir) that can serve `route`.
///
/// Fragment and query are ignored, a trailing `.html` is tolerated.
/// Routes with a `..` segment have no candidates: they cannot name a file
/// inside the content dir.
///
/// | route                 | candidates                        |
/// |-----------------------|-----------------------------------|
/// | `/`                   | `index.md`                        |
/// | `/posts/`             | `posts/index.md`                  |
/// | `/ios-cache-handler`  | `ios-cache-handler.md`, `ios-cache-handler/index.md` |
pub fn route_candidates(route: &str) -> Vec<PathBuf> {
    let (path, _) = split_path_fragment(route);
    let path = path.split_once('?').map_or(path, |(p, _)| p);
    let path = path.trim_start_matches('/');

    if Path::new(path)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Vec::new();
    }

    if path.is_empty() || path.ends_with('/') {
        return vec![PathBuf::from(format!("{path}index.md"))];
    }

    let stem = path.strip_suffix(".html").unwrap_or(path);
    vec![
        PathBuf::from(format!("{stem}.md")),
        PathBuf::from(stem).join("index.md"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("http://example.com"));
        assert!(is_external_link("mailto:user@example.com"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
        assert!(!is_external_link("#section"));
        assert!(!is_external_link(":nothing"));
    }

    #[test]
    fn test_split_path_fragment() {
        assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
        assert_eq!(split_path_fragment("/about"), ("/about", ""));
    }

    #[test]
    fn test_route_candidates_root() {
        assert_eq!(route_candidates("/"), [PathBuf::from("index.md")]);
        assert_eq!(route_candidates("/#top"), [PathBuf::from("index.md")]);
    }

    #[test]
    fn test_route_candidates_page() {
        let expected = [
            PathBuf::from("ios-cache-handler.md"),
            PathBuf::from("ios-cache-handler/index.md"),
        ];
        assert_eq!(route_candidates("/ios-cache-handler"), expected);
        assert_eq!(route_candidates("/ios-cache-handler.html"), expected);
        assert_eq!(route_candidates("/ios-cache-handler?ref=nav#usage"), expected);
    }

    #[test]
    fn test_route_candidates_parent_segments() {
        assert!(route_candidates("/../secret").is_empty());
        assert!(route_candidates("/posts/../../secret").is_empty());
        assert!(route_candidates("/../").is_empty());
        // dots inside a segment are fine
        assert_eq!(route_candidates("/v1..2").len(), 2);
    }

    #[test]
    fn test_route_candidates_directory() {
        assert_eq!(
            route_candidates("/posts/"),
            [PathBuf::from("posts/index.md")]
        );
    }
}
