//! @acp:module "Rules"
//! @acp:summary "Rule documents and their on-disk store"
//! @acp:domain cli
//! @acp:layer feature

pub mod store;
pub mod types;

pub use store::{RuleSource, RuleStore};
pub use types::Rule;
