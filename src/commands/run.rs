//! @acp:module "Run Command"
//! @acp:summary "Apply the rules of a named rule set"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use super::{execute_rule_list, CommandContext, RuleCommand};
use crate::error::Result;
use crate::present::{write_error, PresentStyle};
use crate::resolve::SectionRef;

pub struct RunCommand {
    rule_set: String,
}

impl RunCommand {
    pub fn new(rule_set: impl Into<String>) -> Self {
        Self {
            rule_set: rule_set.into(),
        }
    }

    pub fn header(&self) -> String {
        format!("EXECUTING {} RULES:", self.rule_set.to_uppercase())
    }
}

impl RuleCommand for RunCommand {
    fn name(&self) -> &'static str {
        "run"
    }

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let config = ctx.load_config(out)?;

        let known = config
            .as_ref()
            .map(|c| c.has_rule_set(&self.rule_set))
            .unwrap_or(false);
        if !known {
            write_error(
                out,
                "",
                format!("Rule set '{}' not found in rules.yaml", self.rule_set),
            )?;
            let available = config
                .as_ref()
                .map(|c| c.rule_set_names())
                .unwrap_or_default();
            writeln!(out, "Available rule sets: {:?}", available)?;
            return Ok(());
        }

        execute_rule_list(
            ctx,
            config.as_ref(),
            &SectionRef::RuleSet(self.rule_set.clone()),
            &self.header(),
            PresentStyle::Apply,
            out,
        )?;
        Ok(())
    }
}
