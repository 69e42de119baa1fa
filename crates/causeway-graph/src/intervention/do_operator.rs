//! do(X = x): delete every edge into X. The assigned value travels with the
//! graph for structural-equation evaluators; it never changes topology.

use std::collections::BTreeMap;

use causeway_core::errors::GraphResult;

use crate::graph::stable_graph::{CausalGraph, Variable, VariableSet};

/// A graph produced by one or more interventions, with the forced values.
#[derive(Debug, Clone, PartialEq)]
pub struct MutilatedGraph<V> {
    graph: CausalGraph,
    assignments: BTreeMap<Variable, V>,
}

/// Mutilate `graph` for `do(target = value)`. The input graph is untouched.
///
/// Fails with `UnknownVariable` if `target` is absent.
pub fn intervene<V>(graph: &CausalGraph, target: &str, value: V) -> GraphResult<MutilatedGraph<V>> {
    MutilatedGraph {
        graph: graph.clone(),
        assignments: BTreeMap::new(),
    }
    .and_intervene(target, value)
}

impl<V> MutilatedGraph<V> {
    /// Add a further intervention. Intervening again on the same variable
    /// replaces its value; the topology is unchanged by the repeat.
    pub fn and_intervene(mut self, target: &str, value: V) -> GraphResult<Self> {
        let idx = self.graph.index_of(target)?;
        self.graph = self.graph.without_incoming(&[idx].into());
        self.assignments
            .insert(self.graph.variable(idx).clone(), value);
        Ok(self)
    }

    pub fn graph(&self) -> &CausalGraph {
        &self.graph
    }

    pub fn into_graph(self) -> CausalGraph {
        self.graph
    }

    /// Forced values keyed by intervened variable.
    pub fn assignments(&self) -> &BTreeMap<Variable, V> {
        &self.assignments
    }

    pub fn value(&self, target: &str) -> Option<&V> {
        self.assignments.get(target)
    }

    pub fn targets(&self) -> VariableSet {
        self.assignments.keys().cloned().collect()
    }
}

impl<V> AsRef<CausalGraph> for MutilatedGraph<V> {
    fn as_ref(&self) -> &CausalGraph {
        &self.graph
    }
}
