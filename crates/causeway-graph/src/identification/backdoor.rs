//! Backdoor criterion.
//!
//! `Z` is a valid adjustment set for the effect of `X` on `Y` iff
//! (a) no node of `Z` is a descendant of `X`, and
//! (b) `X ⊥ Y | Z` in the graph with every edge out of `X` removed.

use petgraph::Direction;

use causeway_core::errors::GraphResult;

use crate::dseparation::separation::{ensure_disjoint, resolve_disjoint, separated};
use crate::graph::stable_graph::{CausalGraph, NodeSet};
use crate::reachability::ancestry::walk;

/// Whether `z` satisfies the backdoor criterion relative to `(x, y)`.
pub fn backdoor_criterion(
    graph: &CausalGraph,
    x: &[&str],
    y: &[&str],
    z: &[&str],
) -> GraphResult<bool> {
    let (xs, ys, zs) = resolve_disjoint(graph, x, y, z)?;
    Ok(BackdoorCheck::new(graph, xs, ys).admits(&zs))
}

/// Precomputed state for checking many candidate sets against one `(X, Y)` pair.
pub(crate) struct BackdoorCheck {
    xs: NodeSet,
    ys: NodeSet,
    descendants: NodeSet,
    /// `G` with the edges out of `X` deleted.
    pruned: CausalGraph,
}

impl BackdoorCheck {
    pub(crate) fn new(graph: &CausalGraph, xs: NodeSet, ys: NodeSet) -> Self {
        let descendants = walk(graph, xs.iter().copied(), Direction::Outgoing);
        let pruned = graph.without_outgoing(&xs);
        Self {
            xs,
            ys,
            descendants,
            pruned,
        }
    }

    /// Candidates overlapping `X` or `Y` are rejected rather than reported.
    pub(crate) fn admits(&self, zs: &NodeSet) -> bool {
        if ensure_disjoint(&self.pruned, &self.xs, &self.ys, zs).is_err() {
            return false;
        }
        if zs.iter().any(|z| self.descendants.contains(z)) {
            return false;
        }
        separated(&self.pruned, &self.xs, &self.ys, zs)
    }
}
