//! @acp:module "Shutdown Command"
//! @acp:summary "Emit the `shutdown` rules as instructions to the model"
//! @acp:domain cli
//! @acp:layer handler

use std::io::Write;

use super::{execute_rule_list, CommandContext, RuleCommand};
use crate::error::Result;
use crate::present::PresentStyle;
use crate::resolve::SectionRef;

pub struct ShutdownCommand;

impl RuleCommand for ShutdownCommand {
    fn name(&self) -> &'static str {
        "shutdown"
    }

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
        let config = ctx.load_config(out)?;
        execute_rule_list(
            ctx,
            config.as_ref(),
            &SectionRef::Direct("shutdown".to_string()),
            "EXECUTING SHUTDOWN RULES:",
            PresentStyle::Instruct,
            out,
        )?;
        Ok(())
    }
}
