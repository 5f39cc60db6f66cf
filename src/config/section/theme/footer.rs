//! `[theme.footer]` configuration.

use serde::{Deserialize, Serialize};

/// Footer text shown below every page. Both lines are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl FooterConfig {
    pub fn is_empty(&self) -> bool {
        self.message.is_none() && self.copyright.is_none()
    }
}
