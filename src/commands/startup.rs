//! @acp:module "Startup Command"
//! @acp:summary "Apply the rules configured under `startup`"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use super::{execute_rule_list, CommandContext, RuleCommand};
use crate::error::Result;
use crate::present::PresentStyle;
use crate::resolve::SectionRef;

pub struct StartupCommand;

impl RuleCommand for StartupCommand {
    fn name(&self) -> &'static str {
        "startup"
    }

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let config = ctx.load_config(out)?;
        execute_rule_list(
            ctx,
            config.as_ref(),
            &SectionRef::Direct("startup".to_string()),
            "APPLYING STARTUP RULES:",
            PresentStyle::Apply,
            out,
        )?;
        Ok(())
    }
}
