//! @acp:module "Errors"
//! @acp:summary "Error types shared across the rules library"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

/// @acp:summary "Every failure the rules library can report"
#[derive(Debug, Error)]
pub enum RulesError {
    /// A rule identifier has no backing document
    #[error("Rule file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A rule document exists but is not valid JSON for a rule
    #[error("Malformed rule file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The rules.yaml configuration could not be parsed
    #[error("Malformed configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize rule: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("--{argument} parameter required for {command} action")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("No rule set specified. Use 'prules run <rule_set>'")]
    NoRuleSet,

    #[error("{} already exists. Use --force to overwrite.", path.display())]
    AlreadyInitialized { path: PathBuf },
}

impl RulesError {
    /// Usage errors end the process with a non-zero status; everything else
    /// is reported and processing continues. Refusing to overwrite an
    /// existing rules.yaml counts as usage (`init` without `--force`).
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            RulesError::UnknownCommand(_)
                | RulesError::MissingArgument { .. }
                | RulesError::NoRuleSet
                | RulesError::AlreadyInitialized { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
