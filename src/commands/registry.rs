//! @acp:module "Command Registry"
//! @acp:summary "Map command names to factories"
//! @acp:domain cli
//! @acp:layer handler

use std::collections::BTreeMap;

use super::{
    InitCommand, ListCommand, RuleCommand, RunCommand, ShowCommand, ShutdownCommand,
    StartupCommand,
};
use crate::error::{Result, RulesError};

/// Arguments a command factory may need
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    /// Rule set name for `run`
    pub rule_set: Option<String>,
    /// Rule name for `show`
    pub rule: Option<String>,
    /// Overwrite for `init`
    pub force: bool,
}

pub type CommandFactory = fn(&CommandArgs) -> Result<Box<dyn RuleCommand>>;

struct Entry {
    description: &'static str,
    factory: CommandFactory,
}

/// @acp:summary "Registry of available commands, populated at startup"
#[derive(Default)]
pub struct CommandRegistry {
    entries: BTreeMap<&'static str, Entry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in command
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(
            "startup",
            "Load and apply rules from the startup section",
            |_| Ok(Box::new(StartupCommand)),
        );
        registry.register(
            "shutdown",
            "Execute shutdown instructions for the model",
            |_| Ok(Box::new(ShutdownCommand)),
        );
        registry.register(
            "run",
            "Load and apply rules from a named rule set",
            |args| {
                let rule_set = args.rule_set.clone().ok_or(RulesError::NoRuleSet)?;
                Ok(Box::new(RunCommand::new(rule_set)))
            },
        );
        registry.register(
            "list",
            "Display all available rule files with status information",
            |_| Ok(Box::new(ListCommand)),
        );
        registry.register(
            "show",
            "Display comprehensive information about a specific rule",
            |args| {
                let rule = args.rule.clone().ok_or(RulesError::MissingArgument {
                    command: "show",
                    argument: "rule",
                })?;
                Ok(Box::new(ShowCommand::new(rule)))
            },
        );
        registry.register(
            "init",
            "Scaffold rules.yaml and starter rules",
            |args| Ok(Box::new(InitCommand { force: args.force })),
        );
        registry
    }

    pub fn register(&mut self, name: &'static str, description: &'static str, factory: CommandFactory) {
        self.entries.insert(name, Entry { description, factory });
    }

    /// Build the command registered under `name`
    pub fn create(&self, name: &str, args: &CommandArgs) -> Result<Box<dyn RuleCommand>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| RulesError::UnknownCommand(name.to_string()))?;
        (entry.factory)(args)
    }

    /// `(name, description)` pairs in name order
    pub fn describe(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(name, e)| (*name, e.description))
    }
}
