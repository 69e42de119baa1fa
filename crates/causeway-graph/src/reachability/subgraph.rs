//! Ancestral subgraphs, the first step of d-separation by moralization.

use petgraph::Direction;

use causeway_core::errors::GraphResult;

use crate::graph::stable_graph::{CausalGraph, NodeSet};

use super::ancestry::walk;

/// Induced subgraph on `variables` together with all of their ancestors.
pub fn ancestral_subgraph<S: AsRef<str>>(
    graph: &CausalGraph,
    variables: &[S],
) -> GraphResult<CausalGraph> {
    let seeds = graph.resolve(variables)?;
    Ok(graph.induced(&ancestral_set(graph, &seeds)))
}

/// `seeds ∪ ancestors(seeds)`. Closed under taking parents.
pub(crate) fn ancestral_set(graph: &CausalGraph, seeds: &NodeSet) -> NodeSet {
    let mut closure = walk(graph, seeds.iter().copied(), Direction::Incoming);
    closure.extend(seeds.iter().copied());
    closure
}
