//! @acp:module "Resolve"
//! @acp:summary "Dependency resolution and section selection"
//! @acp:domain cli
//! @acp:layer feature

pub mod resolver;
pub mod selector;

pub use resolver::{resolve, resolve_into, LoadFailure, Resolution};
pub use selector::{select_rules, SectionRef, Selection};
