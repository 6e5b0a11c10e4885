//! @acp:module "List Command"
//! @acp:summary "Display every rule file with status information"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use console::style;

use super::{CommandContext, RuleCommand};
use crate::error::Result;
use crate::present::{write_footer, write_header};

pub struct ListCommand;

impl RuleCommand for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let config = ctx.load_config(out)?;
        let store = ctx.workspace.store(config.as_ref());

        if !store.has_rules_dir() {
            writeln!(out, "Rules directory not found.")?;
        }

        let files = store.list();
        if files.is_empty() {
            writeln!(out, "No rule files found.")?;
            return Ok(());
        }

        write_header(out, "AVAILABLE RULES:")?;

        for file in &files {
            match store.load_path(&store.rules_dir().join(file)) {
                Ok(rule) => {
                    let indicator = if rule.is_active() {
                        style("✓").green()
                    } else {
                        style("✗").red()
                    };
                    writeln!(out, "{} {}: {} ({})", indicator, file, rule.title, rule.status)?;
                    writeln!(out, "  Category: {}, Version: {}", rule.category, rule.version)?;
                    if !rule.requires.is_empty() {
                        writeln!(out, "  Requires: {}", rule.requires.join(", "))?;
                    }
                }
                Err(e) => {
                    writeln!(out, "{} {}: ERROR - {}", style("✗").red(), file, e)?;
                }
            }
        }

        write_footer(out)
    }
}
