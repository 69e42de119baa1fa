use causeway_core::errors::GraphResult;

use crate::graph::stable_graph::{CausalGraph, NodeSet, VariableSet};

/// Parents, children, and co-parents of `variable`, excluding itself.
pub fn markov_blanket(graph: &CausalGraph, variable: &str) -> GraphResult<VariableSet> {
    let idx = graph.index_of(variable)?;

    let mut blanket: NodeSet = graph.parents_of(idx).collect();
    for child in graph.children_of(idx) {
        blanket.insert(child);
        blanket.extend(graph.parents_of(child));
    }
    blanket.remove(&idx);

    Ok(graph.names(blanket))
}
