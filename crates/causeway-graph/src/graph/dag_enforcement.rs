//! Acyclicity enforcement: an ancestor check before every edge insertion.
//! Rejects any edge that would close a directed cycle.

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;
use petgraph::visit::Dfs;

use causeway_core::errors::GraphResult;

use super::stable_graph::{CausalGraph, DagStableGraph, Variable};

/// Check whether adding `from -> to` would create a cycle,
/// i.e. whether `to` is already an ancestor of `from`.
///
/// Returns `true` if a cycle would be created (edge should be rejected).
pub fn would_create_cycle(graph: &CausalGraph, from: &str, to: &str) -> GraphResult<bool> {
    let source = graph.index_of(from)?;
    let target = graph.index_of(to)?;
    Ok(closes_cycle(graph, source, target))
}

pub(crate) fn closes_cycle(graph: &CausalGraph, source: NodeIndex, target: NodeIndex) -> bool {
    // Self-loops are always cycles.
    if source == target {
        return true;
    }
    has_path(&graph.graph, target, source)
}

/// DFS-based reachability check: can we reach `to` from `from`?
fn has_path(graph: &DagStableGraph, from: NodeIndex, to: NodeIndex) -> bool {
    let mut dfs = Dfs::new(graph, from);
    while let Some(node) = dfs.next(graph) {
        if node == to {
            return true;
        }
    }
    false
}

/// Validate the entire graph is a DAG.
/// Returns every strongly connected component with more than one node.
pub fn find_cycles(graph: &CausalGraph) -> Vec<Vec<Variable>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| scc.into_iter().map(|idx| graph.variable(idx).clone()).collect())
        .collect()
}
