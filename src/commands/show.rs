//! @acp:module "Show Command"
//! @acp:summary "Display comprehensive information about one rule"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use super::{CommandContext, RuleCommand};
use crate::error::Result;
use crate::present::{write_error, write_footer, write_header, write_separator};

pub struct ShowCommand {
    rule: String,
}

impl ShowCommand {
    pub fn new(rule: impl Into<String>) -> Self {
        Self { rule: rule.into() }
    }
}

fn or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        format!("{:?}", items)
    }
}

impl RuleCommand for ShowCommand {
    fn name(&self) -> &'static str {
        "show"
    }

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let config = ctx.load_config(out)?;
        let store = ctx.workspace.store(config.as_ref());

        let Some(path) = store.find(&self.rule) else {
            let wanted = if self.rule.ends_with(".json") {
                self.rule.clone()
            } else {
                format!("{}.json", self.rule)
            };
            writeln!(out, "Rule file not found: {}", wanted)?;
            writeln!(out, "Available rules: {}", store.list().join(", "))?;
            return Ok(());
        };

        let rule = match store.load_path(&path) {
            Ok(rule) => rule,
            Err(e) => return write_error(out, "loading rule", &e),
        };

        write_header(out, "RULE DETAILS:")?;
        writeln!(out, "Title: {}", rule.title)?;
        writeln!(out, "Category: {}", rule.category)?;
        writeln!(out, "Version: {}", rule.version)?;
        writeln!(out, "Status: {}", rule.status)?;
        writeln!(out, "Requires: {}", or_none(&rule.requires))?;
        writeln!(out, "Relevant: {}", or_none(&rule.relevant))?;
        writeln!(out, "File: {}", path.display())?;
        write_separator(out)?;
        writeln!(out, "Content:")?;
        writeln!(out, "{}", rule.content)?;
        write_footer(out)
    }
}
