#![forbid(unsafe_code)]
//! Programmatic Rules Command Line Interface

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prules::commands::{CommandArgs, CommandContext, CommandRegistry};
use prules::Workspace;

#[derive(Parser)]
#[command(name = "prules")]
#[command(about = "Manage programmatic rules for AI interactions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding rules.yaml (skips discovery)
    #[arg(long, global = true, env = "PRULES_ROOT")]
    root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and apply rules from the startup section
    Startup,

    /// Execute shutdown instructions for the model
    Shutdown,

    /// Load and apply rules from a named rule set
    Run {
        /// Name of the rule set to execute (e.g., review)
        rule_set: Option<String>,
    },

    /// Display all available rule files with status information
    List,

    /// Display comprehensive information about a specific rule
    Show {
        /// Rule name to show details for
        #[arg(long)]
        rule: Option<String>,
    },

    /// Scaffold rules.yaml and starter rules
    Init {
        /// Overwrite an existing rules.yaml
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Registry name plus the arguments its factory needs
    fn into_invocation(self) -> (&'static str, CommandArgs) {
        match self {
            Commands::Startup => ("startup", CommandArgs::default()),
            Commands::Shutdown => ("shutdown", CommandArgs::default()),
            Commands::Run { rule_set } => (
                "run",
                CommandArgs {
                    rule_set,
                    ..Default::default()
                },
            ),
            Commands::List => ("list", CommandArgs::default()),
            Commands::Show { rule } => (
                "show",
                CommandArgs {
                    rule,
                    ..Default::default()
                },
            ),
            Commands::Init { force } => (
                "init",
                CommandArgs {
                    force,
                    ..Default::default()
                },
            ),
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("prules=debug")
        } else {
            EnvFilter::new("prules=error")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = CommandContext::new(Workspace::discover(cli.root.as_deref()));
    let (name, args) = cli.command.into_invocation();
    let registry = CommandRegistry::standard();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = registry
        .create(name, &args)
        .and_then(|command| command.execute(&ctx, &mut out));
    out.flush().context("Failed to flush output")?;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_usage() => {
            eprintln!("{} {}", style("✗").red(), e);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            // Reported, not fatal
            writeln!(out, "ERROR executing command '{}': {}", name, e)
                .context("Failed to write output")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
