//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule. Commands write to the output
//! channel they are given and only return errors for usage problems or
//! broken output; rule load failures are reported inline.

pub mod init;
pub mod list;
pub mod registry;
pub mod rule_list;
pub mod run;
pub mod show;
pub mod shutdown;
pub mod startup;

use std::io::Write;

pub use init::InitCommand;
pub use list::ListCommand;
pub use registry::{CommandArgs, CommandFactory, CommandRegistry};
pub use rule_list::execute_rule_list;
pub use run::RunCommand;
pub use show::ShowCommand;
pub use shutdown::ShutdownCommand;
pub use startup::StartupCommand;

use crate::config::RulesConfig;
use crate::error::Result;
use crate::present::write_error;
use crate::workspace::Workspace;

/// Shared state handed to every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub workspace: Workspace,
}

impl CommandContext {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    /// Load rules.yaml, reporting a malformed file and treating it as missing
    pub fn load_config(&self, out: &mut dyn Write) -> Result<Option<RulesConfig>> {
        match RulesConfig::load(&self.workspace.config_path()) {
            Ok(config) => Ok(config),
            Err(e) => {
                write_error(out, "loading rules.yaml config", &e)?;
                Ok(None)
            }
        }
    }
}

/// @acp:summary "A runnable command"
pub trait RuleCommand {
    fn name(&self) -> &'static str;

    fn execute(&self, ctx: &CommandContext, out: &mut dyn Write) -> Result<()>;
}
