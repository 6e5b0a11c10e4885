//! Property tests for the dependency resolver over generated rule graphs.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;

use proptest::prelude::*;

use prules::{resolve, Result, Rule, RuleSource, RulesError};

/// Generated rule graph plus the identifiers requested from it
#[derive(Debug, Clone)]
struct GenGraph {
    /// Loadable rules and their `requires`
    rules: HashMap<String, Vec<String>>,
    /// Identifiers referenced somewhere but with no document
    missing: HashSet<String>,
    requested: Vec<String>,
}

impl RuleSource for GenGraph {
    fn load(&self, identifier: &str) -> Result<Rule> {
        self.rules
            .get(identifier)
            .map(|req| Rule::new(identifier, "").with_requires(req.iter().cloned()))
            .ok_or_else(|| RulesError::NotFound {
                path: PathBuf::from(identifier),
            })
    }
}

impl GenGraph {
    /// Every identifier reachable from `requested`, expanding loadable rules only
    fn reachable(&self) -> HashSet<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = self.requested.iter().cloned().collect();
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(requires) = self.rules.get(&id) {
                queue.extend(requires.iter().cloned());
            }
        }
        seen
    }
}

fn name(i: usize) -> String {
    format!("rules/r{i}.json")
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// `forward_only` keeps edges i -> j with j > i, which makes the graph acyclic
fn arb_graph(forward_only: bool, allow_missing: bool) -> impl Strategy<Value = GenGraph> {
    (1usize..12)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(prop::collection::vec(0..n, 0..4), n),
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(0..n, 1..6),
            )
        })
        .prop_map(move |(n, edges, present, requested)| {
            let mut rules = HashMap::new();
            let mut missing = HashSet::new();
            for i in 0..n {
                if allow_missing && !present[i] {
                    missing.insert(name(i));
                    continue;
                }
                let requires: Vec<String> = edges[i]
                    .iter()
                    .filter(|&&j| !forward_only || j > i)
                    .map(|&j| name(j))
                    .collect();
                rules.insert(name(i), requires);
            }
            GenGraph {
                rules,
                missing,
                requested: requested.into_iter().map(name).collect(),
            }
        })
}

// ---------------------------------------------------------------------------
// Invariant 1: Acyclic graphs give a full topological order
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn dependencies_precede_dependents(graph in arb_graph(true, false)) {
        let order = resolve(&graph, &graph.requested).order;
        let position: HashMap<&str, usize> =
            order.iter().enumerate().map(|(i, id)| (id.as_str(), i)).collect();

        for id in &order {
            for dep in &graph.rules[id] {
                prop_assert!(
                    position[dep.as_str()] < position[id.as_str()],
                    "{} listed before its dependency {}", id, dep
                );
            }
        }
    }

    #[test]
    fn output_is_exactly_the_transitive_closure(graph in arb_graph(true, false)) {
        let order = resolve(&graph, &graph.requested).order;
        let listed: HashSet<String> = order.iter().cloned().collect();
        prop_assert_eq!(listed, graph.reachable());
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: Cycles terminate with a duplicate-free result
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn cyclic_graphs_terminate_without_duplicates(graph in arb_graph(false, false)) {
        let order = resolve(&graph, &graph.requested).order;
        let unique: HashSet<&String> = order.iter().collect();
        prop_assert_eq!(unique.len(), order.len());

        let listed: HashSet<String> = order.iter().cloned().collect();
        prop_assert_eq!(listed, graph.reachable());
    }

    #[test]
    fn resolution_is_deterministic(graph in arb_graph(false, true)) {
        let first = resolve(&graph, &graph.requested).order;
        let second = resolve(&graph, &graph.requested).order;
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Missing documents are skipped, reported once, and nothing else is lost
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn missing_documents_are_reported_not_listed(graph in arb_graph(false, true)) {
        let result = resolve(&graph, &graph.requested);
        let reachable = graph.reachable();

        let expected_listed: HashSet<String> =
            reachable.iter().filter(|id| graph.rules.contains_key(*id)).cloned().collect();
        let expected_failed: HashSet<String> =
            reachable.iter().filter(|id| graph.missing.contains(*id)).cloned().collect();

        let listed: HashSet<String> = result.order.iter().cloned().collect();
        prop_assert_eq!(listed, expected_listed);

        let failed: Vec<&String> = result.failures.iter().map(|f| &f.identifier).collect();
        let failed_set: HashSet<String> = failed.iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(failed.len(), failed_set.len(), "an identifier was reported twice");
        prop_assert_eq!(failed_set, expected_failed);
    }
}
