//! `[site]` configuration.
//!
//! Site metadata handed to the host as top-level `title`, `description`,
//! `lang` and `base`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Amit's Blog"
//! description = "A place where I blog about writing code and building cool stuff."
//! lang = "en-US"
//! base = "/"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata shown in the browser tab and in search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Language code (e.g., "en-US").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Public base path when served from a subdirectory (e.g., "/blog/").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `lang`, if set, must not be empty
    /// - `base`, if set, must start and end with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is empty",
                format!("set {}, e.g.: \"My Blog\"", Self::FIELDS.title),
            );
        }

        if self.description.trim().is_empty() {
            diag.warn(Self::FIELDS.description, "site description is empty");
        }

        if let Some(lang) = &self.lang
            && lang.trim().is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.lang,
                "language code is empty",
                "remove the field or use a code like \"en-US\"",
            );
        }

        if let Some(base) = &self.base
            && !(base.starts_with('/') && base.ends_with('/'))
        {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base path '{base}' must start and end with '/'"),
                "use format like \"/blog/\"",
            );
        }
    }
}
