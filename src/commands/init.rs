//! @acp:module "Init Command"
//! @acp:summary "Scaffold rules.yaml and the starter rules"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Implements `prules init`: writes rules.yaml into the base directory and
//! the starter rules into `rules/base_rules/`.

use std::io::Write;
use std::path::PathBuf;

use console::style;

use super::{CommandContext, RuleCommand};
use crate::error::{Result, RulesError};
use crate::rule::Rule;

const STARTER_CONFIG: &str = include_str!("../../starter/rules.yaml");

/// Starter rules compiled into the binary: (file name, document)
const STARTER_RULES: &[(&str, &str)] = &[
    (
        "core_principles.json",
        include_str!("../../starter/core_principles.json"),
    ),
    (
        "code_quality.json",
        include_str!("../../starter/code_quality.json"),
    ),
    (
        "session_wrapup.json",
        include_str!("../../starter/session_wrapup.json"),
    ),
];

const STARTER_DIR: &str = "rules/base_rules";

pub struct InitCommand {
    /// Overwrite an existing rules.yaml
    pub force: bool,
}

impl RuleCommand for InitCommand {
    fn name(&self) -> &'static str {
        "init"
    }

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let config_path = ctx.workspace.config_path();
        if config_path.exists() && !self.force {
            return Err(RulesError::AlreadyInitialized { path: config_path });
        }

        std::fs::create_dir_all(&ctx.workspace.base)?;
        std::fs::write(&config_path, STARTER_CONFIG)?;
        writeln!(out, "{} Created {}", style("✓").green(), config_path.display())?;

        let store = ctx.workspace.store(None);
        for (file, json) in STARTER_RULES {
            let rule: Rule = serde_json::from_str(json).map_err(|source| RulesError::Parse {
                path: PathBuf::from("starter").join(file),
                source,
            })?;
            store.save(&rule, &format!("{}/{}", STARTER_DIR, file))?;
            writeln!(out, "{} Copied {}", style("✓").green(), file)?;
        }

        writeln!(out, "\n{}", style("Next steps:").bold())?;
        writeln!(out, "  1. Run {} to apply the startup rules", style("prules startup").cyan())?;
        writeln!(out, "  2. Add your own rules under {}/", ctx.workspace.rules_dir(None).display())?;
        Ok(())
    }
}
