use causeway_core::config::IdentificationConfig;
use causeway_core::errors::GraphResult;

use crate::dseparation::separation::resolve_disjoint;
use crate::graph::stable_graph::{CausalGraph, VariableSet};
use crate::identification::search::backdoor_search;
use crate::identification::SizeBound;

/// Smallest observed set satisfying the backdoor criterion for `(x, y)`,
/// searching subsets of non-descendants of `x` up to `bound`.
///
/// `Ok(None)` means no set within the bound works.
pub fn find_adjustment_set(
    graph: &CausalGraph,
    x: &[&str],
    y: &[&str],
    bound: SizeBound,
    config: &IdentificationConfig,
) -> GraphResult<Option<VariableSet>> {
    let (xs, ys, _) = resolve_disjoint(graph, x, y, &[])?;
    Ok(backdoor_search(graph, &xs, &ys, bound, config).map(|set| graph.names(set)))
}
