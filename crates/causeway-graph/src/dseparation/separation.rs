use causeway_core::errors::{GraphError, GraphResult};

use crate::graph::stable_graph::{CausalGraph, NodeSet};
use crate::reachability::subgraph::ancestral_set;

use super::moral::MoralGraph;

/// Whether `x` is d-separated from `y` given `z`, i.e. the graph entails `X ⊥ Y | Z`.
///
/// Fails with `UnknownVariable` for absent names and with
/// `OverlappingVariableSets` unless the three sets are pairwise disjoint.
/// An empty `x` or `y` is trivially separated.
pub fn d_separated(graph: &CausalGraph, x: &[&str], y: &[&str], z: &[&str]) -> GraphResult<bool> {
    let (xs, ys, zs) = resolve_disjoint(graph, x, y, z)?;
    Ok(separated(graph, &xs, &ys, &zs))
}

/// Negation of [`d_separated`].
pub fn d_connected(graph: &CausalGraph, x: &[&str], y: &[&str], z: &[&str]) -> GraphResult<bool> {
    d_separated(graph, x, y, z).map(|sep| !sep)
}

pub(crate) fn separated(graph: &CausalGraph, xs: &NodeSet, ys: &NodeSet, zs: &NodeSet) -> bool {
    if xs.is_empty() || ys.is_empty() {
        return true;
    }

    let mut seeds = xs.clone();
    seeds.extend(ys.iter().copied());
    seeds.extend(zs.iter().copied());

    let relevant = ancestral_set(graph, &seeds);
    MoralGraph::build(graph, &relevant).separates(xs, ys, zs)
}

/// Resolve three name lists and check they are pairwise disjoint.
pub(crate) fn resolve_disjoint<S: AsRef<str>>(
    graph: &CausalGraph,
    x: &[S],
    y: &[S],
    z: &[S],
) -> GraphResult<(NodeSet, NodeSet, NodeSet)> {
    let xs = graph.resolve(x)?;
    let ys = graph.resolve(y)?;
    let zs = graph.resolve(z)?;
    ensure_disjoint(graph, &xs, &ys, &zs)?;
    Ok((xs, ys, zs))
}

pub(crate) fn ensure_disjoint(
    graph: &CausalGraph,
    xs: &NodeSet,
    ys: &NodeSet,
    zs: &NodeSet,
) -> GraphResult<()> {
    let overlap = xs
        .intersection(ys)
        .chain(xs.intersection(zs))
        .chain(ys.intersection(zs))
        .next();

    match overlap {
        Some(&idx) => Err(GraphError::OverlappingVariableSets {
            variable: graph.variable(idx).to_string(),
        }),
        None => Ok(()),
    }
}
