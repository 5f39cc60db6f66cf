//! Type-safe config field path.

use crate::logger::paint;
use owo_colors::Style;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Static paths come from `#[derive(Config)]`; paths into list entries are
/// built from them with [`FieldPath::index`] and [`FieldPath::field`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "theme")]
/// pub struct ThemeSectionConfig {
///     pub nav: Vec<NavItem>,
/// }
///
/// // theme.nav[0].link
/// let path = ThemeSectionConfig::FIELDS.nav.index(0).field("link");
/// diag.error(path, "link is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path of the `idx`-th entry of a list field (`theme.nav[2]`).
    pub fn index(&self, idx: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, idx)))
    }

    /// Path of a key below this one (`theme.nav[2].link`).
    pub fn field(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, key)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", paint(format_args!("`{}`", self.0), Style::new().bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
