//! @acp:module "Workspace"
//! @acp:summary "Locate the base directory, rules.yaml and the rules directory"
//! @acp:domain cli
//! @acp:layer io
//!
//! The base directory is chosen in priority order:
//! 1. An explicit root (`--root` / `PRULES_ROOT`)
//! 2. The executable's own directory, when it holds rules.yaml
//! 3. The nearest ancestor of the working directory holding rules.yaml
//! 4. The working directory itself

use std::path::{Path, PathBuf};

use crate::config::{RulesConfig, CONFIG_FILE};
use crate::rule::RuleStore;

/// Default rules directory name under the base directory
pub const RULES_DIR: &str = "rules";

/// @acp:summary "Resolved locations for one invocation"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub base: PathBuf,
}

impl Workspace {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve the base directory using the priority order above
    pub fn discover(root: Option<&Path>) -> Self {
        if let Some(root) = root {
            tracing::debug!("Using explicit rules root {}", root.display());
            return Self::new(root);
        }

        let colocated = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self::search(colocated.as_deref(), &cwd)
    }

    fn search(colocated: Option<&Path>, cwd: &Path) -> Self {
        if let Some(dir) = colocated.filter(|d| d.join(CONFIG_FILE).is_file()) {
            tracing::debug!("Using co-located rules root {}", dir.display());
            return Self::new(dir);
        }

        match cwd.ancestors().find(|d| d.join(CONFIG_FILE).is_file()) {
            Some(dir) => {
                tracing::debug!("Using project rules root {}", dir.display());
                Self::new(dir)
            }
            None => Self::new(cwd),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }

    /// `options.rules_directory` when configured, else `<base>/rules`
    pub fn rules_dir(&self, config: Option<&RulesConfig>) -> PathBuf {
        match config.and_then(|c| c.options.rules_directory.as_deref()) {
            Some(dir) => self.base.join(dir),
            None => self.base.join(RULES_DIR),
        }
    }

    pub fn store(&self, config: Option<&RulesConfig>) -> RuleStore {
        RuleStore::new(&self.base, self.rules_dir(config))
    }
}
