//! @acp:module "Rule Types"
//! @acp:summary "Rule document model with per-field defaults"
//! @acp:domain cli
//! @acp:layer types

use serde::{Deserialize, Serialize};

fn default_category() -> String {
    "General".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_status() -> String {
    "Active".to_string()
}

/// @acp:summary "A declarative rule document"
///
/// The identifier a rule was loaded from is not part of the document; it is
/// implied by where the document lives in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Compared case-insensitively against "active"
    #[serde(default = "default_status")]
    pub status: String,

    /// Rules that must be listed before this one
    #[serde(default)]
    pub requires: Vec<String>,

    /// Informational links, never resolved
    #[serde(default)]
    pub relevant: Vec<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            category: default_category(),
            version: default_version(),
            status: default_status(),
            requires: vec![],
            relevant: vec![],
            title: String::new(),
            content: String::new(),
        }
    }
}

impl Rule {
    /// Create an active rule with the given title and content
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rule('{}', {}, v{}, {})",
            self.title, self.category, self.version, self.status
        )
    }
}
