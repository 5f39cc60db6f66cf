//! Labeled links used by the nav bar and inside sidebar groups.

use crate::config::util::{LinkKind, classify_link};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A labeled link. `link` is a site route (`/about`) or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Link kind, or `None` if the link is malformed.
    pub fn kind(&self) -> Option<LinkKind> {
        classify_link(&self.link).ok()
    }

    /// Validate label and link, reporting under `path` (e.g. `theme.nav[0]`).
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(path.field("text"), "link text is empty");
        }
        if let Err(reason) = classify_link(&self.link) {
            diag.error_with_hint(
                path.field("link"),
                reason,
                "use a site route like \"/about\" or an absolute URL like \"https://example.com\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(NavItem::new("Home", "/").kind(), Some(LinkKind::Route));
        assert_eq!(
            NavItem::new("GitHub", "https://github.com").kind(),
            Some(LinkKind::External)
        );
        assert_eq!(NavItem::new("Broken", "home").kind(), None);
    }

    #[test]
    fn test_validate_reports_both_fields() {
        let mut diag = ConfigDiagnostics::new();
        NavItem::new("", "").validate(&FieldPath::new("theme.nav").index(2), &mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["theme.nav[2].text", "theme.nav[2].link"]);
    }

    #[test]
    fn test_missing_link_is_parse_error() {
        let result: Result<NavItem, _> = toml::from_str("text = \"Home\"");
        assert!(result.is_err());
    }
}
