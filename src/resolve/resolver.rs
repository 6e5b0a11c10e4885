//! @acp:module "Dependency Resolver"
//! @acp:summary "Depth-first, first-seen-wins flattening of rule requirements"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Expands a requested list of rule identifiers into an execution order in
//! which every rule's `requires` come before it. A single `visited` set is
//! threaded through the whole traversal and doubles as the cycle guard, so
//! the output is a valid topological order only for acyclic graphs. On a
//! cycle the traversal stops at the repeated node and still terminates.

use std::collections::HashSet;

use crate::error::RulesError;
use crate::rule::RuleSource;

/// A rule that could not be loaded during resolution
#[derive(Debug)]
pub struct LoadFailure {
    pub identifier: String,
    pub error: RulesError,
}

/// Outcome of one resolution: the order plus every identifier that was skipped
#[derive(Debug, Default)]
pub struct Resolution {
    pub order: Vec<String>,
    pub failures: Vec<LoadFailure>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Resolve `requested` with a fresh visited set.
///
/// Never fails: identifiers that cannot be loaded are left out of the order
/// and recorded in [`Resolution::failures`], and their siblings are still
/// processed.
pub fn resolve<S>(source: &S, requested: &[String]) -> Resolution
where
    S: RuleSource + ?Sized,
{
    let mut visited = HashSet::new();
    let mut failures = Vec::new();
    let order = resolve_into(source, requested, &mut visited, &mut failures);
    Resolution { order, failures }
}

/// Resolve `requested` against a caller-owned `visited` set.
///
/// `visited` is shared by every recursive frame and only ever grows, which
/// bounds recursion depth by the number of distinct identifiers.
pub fn resolve_into<S>(
    source: &S,
    requested: &[String],
    visited: &mut HashSet<String>,
    failures: &mut Vec<LoadFailure>,
) -> Vec<String>
where
    S: RuleSource + ?Sized,
{
    let mut resolved: Vec<String> = Vec::new();

    for identifier in requested {
        // Marked before descending so a cycle ends at the repeated node
        if !visited.insert(identifier.clone()) {
            tracing::debug!("Already visited {}, skipping", identifier);
            continue;
        }

        let rule = match source.load(identifier) {
            Ok(rule) => rule,
            Err(error) => {
                tracing::warn!("Skipping {}: {}", identifier, error);
                failures.push(LoadFailure {
                    identifier: identifier.clone(),
                    error,
                });
                continue;
            }
        };

        if !rule.requires.is_empty() {
            tracing::debug!("{} requires {:?}", identifier, rule.requires);
            let dependencies = resolve_into(source, &rule.requires, visited, failures);
            resolved.extend(dependencies);
        }

        if !resolved.contains(identifier) {
            resolved.push(identifier.clone());
        }
    }

    resolved
}
