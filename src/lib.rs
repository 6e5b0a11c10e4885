#![forbid(unsafe_code)]

//! @acp:module "Programmatic Rules Library"
//! @acp:summary "Declarative rule documents resolved into dependency order for AI sessions"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Programmatic Rules
//!
//! Small JSON rule documents (title, category, status, `requires`, content)
//! are selected through `rules.yaml`, expanded so that every rule's
//! requirements come first, and rendered for an AI assistant session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use prules::{resolve, RuleStore};
//!
//! let store = RuleStore::new(".", "rules");
//! let requested = vec!["rules/base_rules/code_quality.json".to_string()];
//!
//! let resolution = resolve(&store, &requested);
//! for identifier in &resolution.order {
//!     println!("{}", identifier);
//! }
//! for failure in &resolution.failures {
//!     eprintln!("{}: {}", failure.identifier, failure.error);
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod present;
pub mod resolve;
pub mod rule;
pub mod workspace;

// Re-exports
pub use commands::{CommandArgs, CommandContext, CommandRegistry, RuleCommand};
pub use config::{RuleOptions, RuleSection, RulesConfig, CONFIG_FILE};
pub use error::{Result, RulesError};
pub use present::{execute_rules, ExecutionReport, PresentStyle};
pub use resolve::{
    resolve, resolve_into, select_rules, LoadFailure, Resolution, SectionRef, Selection,
};
pub use rule::{Rule, RuleSource, RuleStore};
pub use workspace::Workspace;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
