//! @acp:module "Rule Set Selector"
//! @acp:summary "Turn a configured section into an execution order"
//! @acp:domain cli
//! @acp:layer logic

use super::resolver::{resolve, Resolution};
use crate::config::RulesConfig;
use crate::rule::RuleSource;

/// Where a section lives in rules.yaml
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRef {
    /// A top-level key such as `startup`
    Direct(String),
    /// An entry under `rule_sets`
    RuleSet(String),
}

impl SectionRef {
    pub fn name(&self) -> &str {
        match self {
            SectionRef::Direct(name) | SectionRef::RuleSet(name) => name,
        }
    }
}

/// Selected rules for one section
#[derive(Debug, Default)]
pub struct Selection {
    /// `[entrypoint] + additional` as configured
    pub requested: Vec<String>,
    /// Final order plus load failures met while resolving
    pub resolution: Resolution,
    /// Set when `show_dependency_info` asks for the order to be printed
    pub show_order: bool,
}

impl Selection {
    pub fn order(&self) -> &[String] {
        &self.resolution.order
    }

    /// Nothing to execute; not an error
    pub fn is_empty(&self) -> bool {
        self.resolution.is_empty()
    }
}

/// Build the requested list for `section` and resolve it when enabled.
///
/// A missing configuration, a missing section and an empty section all give
/// an empty selection.
pub fn select_rules<S>(config: Option<&RulesConfig>, section: &SectionRef, source: &S) -> Selection
where
    S: RuleSource + ?Sized,
{
    let Some(config) = config else {
        tracing::debug!("No configuration loaded, nothing selected");
        return Selection::default();
    };

    let requested = match section {
        SectionRef::Direct(name) => config.section(name).map(|s| s.requested()),
        SectionRef::RuleSet(name) => config.rule_set(name).map(|s| s.requested()),
    }
    .unwrap_or_default();

    if !config.options.resolve_dependencies {
        return Selection {
            resolution: Resolution {
                order: requested.clone(),
                failures: vec![],
            },
            requested,
            show_order: false,
        };
    }

    let resolution = resolve(source, &requested);
    tracing::debug!(
        "Section '{}' resolved to {} rules",
        section.name(),
        resolution.order.len()
    );

    Selection {
        requested,
        resolution,
        show_order: config.options.show_dependency_info,
    }
}
