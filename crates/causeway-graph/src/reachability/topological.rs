use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use petgraph::stable_graph::NodeIndex;

use crate::graph::stable_graph::{CausalGraph, Variable};

/// Kahn's algorithm. Among ready variables the earliest-declared goes first,
/// so the order is reproducible. Parents always precede their children.
pub fn topological_order(graph: &CausalGraph) -> Vec<Variable> {
    let mut in_degree: HashMap<NodeIndex, usize> = graph
        .node_indices()
        .map(|idx| (idx, graph.parents_of(idx).count()))
        .collect();

    let mut ready: BinaryHeap<Reverse<NodeIndex>> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(&idx, _)| Reverse(idx))
        .collect();

    let mut order = Vec::with_capacity(graph.node_count());
    while let Some(Reverse(idx)) = ready.pop() {
        order.push(graph.variable(idx).clone());
        for child in graph.children_of(idx) {
            if let Some(degree) = in_degree.get_mut(&child) {
                *degree -= 1;
                if *degree == 0 {
                    ready.push(Reverse(child));
                }
            }
        }
    }

    order
}
