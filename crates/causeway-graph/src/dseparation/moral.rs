use std::collections::VecDeque;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use petgraph::stable_graph::NodeIndex;

use causeway_core::errors::GraphResult;

use crate::graph::stable_graph::{CausalGraph, NodeSet};

/// Undirected moral graph over a subset of a [`CausalGraph`]'s variables.
pub struct MoralGraph<'g> {
    source: &'g CausalGraph,
    graph: UnGraphMap<NodeIndex, ()>,
}

/// Moralize the whole graph.
pub fn moralize(graph: &CausalGraph) -> MoralGraph<'_> {
    let all: NodeSet = graph.node_indices().collect();
    MoralGraph::build(graph, &all)
}

impl<'g> MoralGraph<'g> {
    /// Moralize the subgraph induced by `nodes`. `nodes` should be closed
    /// under parents (an ancestral set); parents outside it are ignored.
    pub(crate) fn build(source: &'g CausalGraph, nodes: &NodeSet) -> Self {
        let mut graph = UnGraphMap::with_capacity(nodes.len(), nodes.len() * 2);
        for &node in nodes {
            graph.add_node(node);
        }

        for &child in nodes {
            let parents: Vec<NodeIndex> = source
                .parents_of(child)
                .filter(|p| nodes.contains(p))
                .collect();
            for &parent in &parents {
                graph.add_edge(parent, child, ());
            }
            for (&a, &b) in parents.iter().tuple_combinations() {
                graph.add_edge(a, b, ());
            }
        }

        Self { source, graph }
    }

    /// Whether `a` and `b` are adjacent in the moral graph.
    pub fn has_edge(&self, a: &str, b: &str) -> GraphResult<bool> {
        let a = self.source.index_of(a)?;
        let b = self.source.index_of(b)?;
        Ok(self.graph.contains_edge(a, b))
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Classical separation: every path from `xs` to `ys` meets `zs`.
    pub(crate) fn separates(&self, xs: &NodeSet, ys: &NodeSet, zs: &NodeSet) -> bool {
        let mut visited: NodeSet = xs.clone();
        let mut queue: VecDeque<NodeIndex> = xs.iter().copied().collect();

        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors(current) {
                if ys.contains(&next) {
                    return false;
                }
                if zs.contains(&next) || !visited.insert(next) {
                    continue;
                }
                queue.push_back(next);
            }
        }

        true
    }
}
