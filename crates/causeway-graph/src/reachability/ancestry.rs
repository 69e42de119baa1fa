//! Ancestors (reverse-edge walk) and descendants (forward-edge walk).

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use causeway_core::errors::GraphResult;

use crate::graph::stable_graph::{CausalGraph, NodeSet, VariableSet};

/// Every variable with a directed path to `variable`, excluding itself.
pub fn ancestors(graph: &CausalGraph, variable: &str) -> GraphResult<VariableSet> {
    let idx = graph.index_of(variable)?;
    Ok(graph.names(walk(graph, [idx], Direction::Incoming)))
}

/// Every variable reachable from `variable` along directed edges, excluding itself.
pub fn descendants(graph: &CausalGraph, variable: &str) -> GraphResult<VariableSet> {
    let idx = graph.index_of(variable)?;
    Ok(graph.names(walk(graph, [idx], Direction::Outgoing)))
}

/// Whether a directed path `from -> ... -> to` of length >= 1 exists.
pub fn has_directed_path(graph: &CausalGraph, from: &str, to: &str) -> GraphResult<bool> {
    let source = graph.index_of(from)?;
    let target = graph.index_of(to)?;
    Ok(walk(graph, [source], Direction::Outgoing).contains(&target))
}

/// Variables lying strictly inside some directed path from `treatment` to `outcome`.
pub fn mediators(graph: &CausalGraph, treatment: &str, outcome: &str) -> GraphResult<VariableSet> {
    let x = graph.index_of(treatment)?;
    let y = graph.index_of(outcome)?;
    Ok(graph.names(mediator_indices(graph, &[x].into(), &[y].into())))
}

/// Nodes reachable from any start node in `direction`.
///
/// A start node is included only when another start node reaches it.
pub(crate) fn walk<I>(graph: &CausalGraph, starts: I, direction: Direction) -> NodeSet
where
    I: IntoIterator<Item = NodeIndex>,
{
    let mut visited = NodeSet::new();
    let mut queue: VecDeque<NodeIndex> = starts.into_iter().collect();

    while let Some(current) = queue.pop_front() {
        for next in graph.graph.neighbors_directed(current, direction) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}

/// Nodes strictly between `xs` and `ys` on directed paths, latent included.
pub(crate) fn mediator_indices(graph: &CausalGraph, xs: &NodeSet, ys: &NodeSet) -> NodeSet {
    let downstream = walk(graph, xs.iter().copied(), Direction::Outgoing);
    let upstream = walk(graph, ys.iter().copied(), Direction::Incoming);
    downstream
        .intersection(&upstream)
        .filter(|idx| !xs.contains(idx) && !ys.contains(idx))
        .copied()
        .collect()
}

/// Whether some directed path leads from `sources` into `targets` without
/// passing through `blocked`.
pub(crate) fn reaches_avoiding(
    graph: &CausalGraph,
    sources: &NodeSet,
    targets: &NodeSet,
    blocked: &NodeSet,
) -> bool {
    let mut visited = NodeSet::new();
    let mut queue: VecDeque<NodeIndex> = sources.iter().copied().collect();

    while let Some(current) = queue.pop_front() {
        for next in graph.children_of(current) {
            if targets.contains(&next) {
                return true;
            }
            if blocked.contains(&next) || !visited.insert(next) {
                continue;
            }
            queue.push_back(next);
        }
    }

    false
}
