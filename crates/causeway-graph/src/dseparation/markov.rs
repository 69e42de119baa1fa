//! Testable implications of a DAG via the local Markov property.

use std::fmt;

use petgraph::Direction;

use crate::graph::stable_graph::{CausalGraph, NodeSet, VariableSet};
use crate::reachability::ancestry::walk;

/// A conditional independence statement `x ⊥ y | given`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Independence {
    pub x: VariableSet,
    pub y: VariableSet,
    pub given: VariableSet,
}

impl fmt::Display for Independence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &VariableSet| set.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ");
        write!(f, "{} ⊥ {}", join(&self.x), join(&self.y))?;
        if !self.given.is_empty() {
            write!(f, " | {}", join(&self.given))?;
        }
        Ok(())
    }
}

/// For each variable `v`: `v ⊥ nondescendants(v) \ parents(v) | parents(v)`.
///
/// Variables whose non-descendants are all parents imply nothing and are skipped.
pub fn local_markov_statements(graph: &CausalGraph) -> Vec<Independence> {
    let mut statements = Vec::new();

    for idx in graph.node_indices() {
        let descendants = walk(graph, [idx], Direction::Outgoing);
        let parents: NodeSet = graph.parents_of(idx).collect();
        let others: NodeSet = graph
            .node_indices()
            .filter(|n| *n != idx && !descendants.contains(n) && !parents.contains(n))
            .collect();

        if others.is_empty() {
            continue;
        }

        statements.push(Independence {
            x: graph.names([idx]),
            y: graph.names(others),
            given: graph.names(parents),
        });
    }

    statements
}
