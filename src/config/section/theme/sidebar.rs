//! Sidebar groups: a heading plus an ordered list of links.

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// A labeled, ordered cluster of links in the side navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    pub items: Vec<NavItem>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
        }
    }

    /// Validate heading and every item; an empty group is an error.
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(path.field("text"), "sidebar group title is empty");
        }

        let items = path.field("items");
        if self.items.is_empty() {
            diag.error_with_hint(
                items.clone(),
                format!("sidebar group '{}' has no items", self.text),
                "add at least one { text, link } entry or remove the group",
            );
        }
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&items.index(i), diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> FieldPath {
        FieldPath::new("theme.sidebar").index(0)
    }

    #[test]
    fn test_empty_group() {
        let mut diag = ConfigDiagnostics::new();
        SidebarGroup::new("Articles", vec![]).validate(&path(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.sidebar[0].items");
    }

    #[test]
    fn test_bad_item_link() {
        let mut diag = ConfigDiagnostics::new();
        let group = SidebarGroup::new(
            "Articles",
            vec![
                NavItem::new("iOS Cache Handler", "/ios-cache-handler"),
                NavItem::new("Draft", "draft"),
            ],
        );
        group.validate(&path(), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "theme.sidebar[0].items[1].link"
        );
    }

    #[test]
    fn test_items_keep_authored_order() {
        let group: SidebarGroup = toml::from_str(
            r#"
text = "Articles"
items = [
    { text = "Zeta", link = "/zeta" },
    { text = "Alpha", link = "/alpha" },
    { text = "Mu", link = "/mu" },
]
"#,
        )
        .unwrap();
        let texts: Vec<_> = group.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["Zeta", "Alpha", "Mu"]);
    }
}
