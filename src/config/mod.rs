//! @acp:module "Configuration"
//! @acp:summary "rules.yaml loading: options, direct sections and named rule sets"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, RulesError};

/// Name of the configuration document inside the base directory
pub const CONFIG_FILE: &str = "rules.yaml";

fn default_true() -> bool {
    true
}

/// @acp:summary "Top-level rules.yaml document"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub options: RuleOptions,

    /// Named rule sets, used by `run <rule_set>`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rule_sets: BTreeMap<String, Option<RuleSection>>,

    /// Direct sections such as `startup` and `shutdown`
    #[serde(flatten)]
    pub sections: BTreeMap<String, serde_yaml::Value>,
}

/// @acp:summary "Global options block"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    /// Expand `requires` before execution
    #[serde(default = "default_true")]
    pub resolve_dependencies: bool,

    /// Print the resolved order before execution
    #[serde(default)]
    pub show_dependency_info: bool,

    /// Rules directory, relative to the base directory unless absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_directory: Option<String>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            resolve_dependencies: true,
            show_dependency_info: false,
            rules_directory: None,
        }
    }
}

/// @acp:summary "One section: an entrypoint plus additional rules"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<String>,
}

impl RuleSection {
    /// `[entrypoint] + additional`, entrypoint only when present and non-empty
    pub fn requested(&self) -> Vec<String> {
        self.entrypoint
            .iter()
            .filter(|e| !e.is_empty())
            .cloned()
            .chain(self.additional.iter().cloned())
            .collect()
    }
}

impl RulesConfig {
    /// Load rules.yaml. A missing file is `Ok(None)`; an empty document is
    /// the default configuration.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let to_config_err = |source| RulesError::Config {
            path: path.to_path_buf(),
            source,
        };

        let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(to_config_err)?;
        if value.is_null() {
            return Ok(Some(Self::default()));
        }
        serde_yaml::from_value(value)
            .map(Some)
            .map_err(to_config_err)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(|source| RulesError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// A direct top-level section. Absent, null or malformed sections are `None`.
    pub fn section(&self, name: &str) -> Option<RuleSection> {
        let value = self.sections.get(name)?;
        if value.is_null() {
            return None;
        }
        match serde_yaml::from_value(value.clone()) {
            Ok(section) => Some(section),
            Err(e) => {
                tracing::warn!("Ignoring malformed section '{}': {}", name, e);
                None
            }
        }
    }

    pub fn has_rule_set(&self, name: &str) -> bool {
        self.rule_sets.contains_key(name)
    }

    /// A named rule set. Declared-but-empty rule sets are `None`.
    pub fn rule_set(&self, name: &str) -> Option<&RuleSection> {
        self.rule_sets.get(name)?.as_ref()
    }

    pub fn rule_set_names(&self) -> Vec<&str> {
        self.rule_sets.keys().map(String::as_str).collect()
    }
}
