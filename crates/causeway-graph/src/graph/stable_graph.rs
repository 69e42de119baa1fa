//! petgraph::StableGraph wrapper holding a fixed, ordered set of named variables.
//!
//! Variables are added once at construction and never removed, so the node
//! index of a variable equals its position in [`CausalGraph::variables`].
//! Edge mutations return a new graph; the receiver is never modified.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use causeway_core::errors::{GraphError, GraphResult};

use super::dag_enforcement;
use super::loader::GraphSpec;

/// An immutable variable name, unique within a graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(String);

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Variable {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Variable {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A set of variables. Ordered by name so iteration is reproducible.
pub type VariableSet = BTreeSet<Variable>;

/// Node-index set used by the query kernels.
pub(crate) type NodeSet = BTreeSet<NodeIndex>;

/// The underlying directed graph type.
pub(crate) type DagStableGraph = StableGraph<Variable, (), Directed>;

/// A directed acyclic graph over named variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphSpec", into = "GraphSpec")]
pub struct CausalGraph {
    /// The petgraph stable graph.
    pub(crate) graph: DagStableGraph,
    /// Variables in declaration order; position == node index.
    variables: Vec<Variable>,
    /// Map from variable name to NodeIndex for O(1) lookup.
    index: HashMap<Variable, NodeIndex>,
    /// Unobserved variables. Never proposed as adjustment candidates.
    latent: HashSet<NodeIndex>,
}

impl CausalGraph {
    /// Create an edgeless graph over `variables`.
    ///
    /// Fails with `DuplicateVariable` if a name repeats.
    pub fn new<I, S>(variables: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = DagStableGraph::default();
        let mut ordered = Vec::new();
        let mut index = HashMap::new();

        for name in variables {
            let variable = Variable::new(name.as_ref());
            if index.contains_key(&variable) {
                return Err(GraphError::DuplicateVariable {
                    name: variable.to_string(),
                });
            }
            let idx = graph.add_node(variable.clone());
            index.insert(variable.clone(), idx);
            ordered.push(variable);
        }

        Ok(Self {
            graph,
            variables: ordered,
            index,
            latent: HashSet::new(),
        })
    }

    /// Create a graph and insert `edges` in order. Stops at the first failing edge.
    pub fn from_edges<I, S, E, A, B>(variables: I, edges: E) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new(variables)?;
        for (from, to) in edges {
            graph.insert_edge(from.as_ref(), to.as_ref())?;
        }
        Ok(graph)
    }

    /// Return a copy of this graph with `from -> to` added.
    ///
    /// Fails with `UnknownVariable` if an endpoint is absent and with
    /// `CycleViolation` if `to` already reaches `from`. Adding an edge that
    /// already exists returns an identical graph.
    pub fn add_edge(&self, from: &str, to: &str) -> GraphResult<Self> {
        let mut next = self.clone();
        next.insert_edge(from, to)?;
        Ok(next)
    }

    /// Return a copy of this graph without `from -> to`.
    /// Removing an absent edge is a no-op; unknown endpoints are still errors.
    pub fn remove_edge(&self, from: &str, to: &str) -> GraphResult<Self> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        let mut next = self.clone();
        if let Some(edge) = next.graph.find_edge(source, target) {
            next.graph.remove_edge(edge);
        }
        Ok(next)
    }

    /// Return a copy of this graph with `names` marked as unobserved.
    pub fn with_latent<I, S>(&self, names: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.clone();
        for name in names {
            let idx = next.index_of(name.as_ref())?;
            next.latent.insert(idx);
        }
        Ok(next)
    }

    /// Insert in place. Only used while a graph is still being built.
    pub(crate) fn insert_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        if self.graph.find_edge(source, target).is_some() {
            return Ok(());
        }
        if dag_enforcement::closes_cycle(self, source, target) {
            return Err(GraphError::CycleViolation {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.graph.add_edge(source, target, ());
        Ok(())
    }

    // --- Queries ---

    /// Variables in declaration order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.variables.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> GraphResult<bool> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        Ok(self.graph.find_edge(source, target).is_some())
    }

    /// All edges, ordered by (source, target) declaration index.
    pub fn edges(&self) -> Vec<(Variable, Variable)> {
        let mut pairs: Vec<(NodeIndex, NodeIndex)> = self
            .graph
            .edge_references()
            .map(|e| (e.source(), e.target()))
            .collect();
        pairs.sort();
        pairs
            .into_iter()
            .map(|(s, t)| (self.variable(s).clone(), self.variable(t).clone()))
            .collect()
    }

    pub fn parents(&self, name: &str) -> GraphResult<VariableSet> {
        let idx = self.index_of(name)?;
        Ok(self.names(self.parents_of(idx)))
    }

    pub fn children(&self, name: &str) -> GraphResult<VariableSet> {
        let idx = self.index_of(name)?;
        Ok(self.names(self.children_of(idx)))
    }

    pub fn is_latent(&self, name: &str) -> GraphResult<bool> {
        let idx = self.index_of(name)?;
        Ok(self.latent.contains(&idx))
    }

    pub fn latent_variables(&self) -> VariableSet {
        self.names(self.latent.iter().copied())
    }

    /// The same variables with every edge flipped.
    pub fn reversed(&self) -> Self {
        let mut next = self.clone();
        let existing: Vec<_> = next.graph.edge_indices().collect();
        for edge in existing {
            next.graph.remove_edge(edge);
        }
        for edge in self.graph.edge_references() {
            next.graph.add_edge(edge.target(), edge.source(), ());
        }
        next
    }

    // --- Index-level helpers for the query kernels ---

    pub(crate) fn index_of(&self, name: &str) -> GraphResult<NodeIndex> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::unknown(name))
    }

    /// Resolve names to a node set, failing on the first unknown name.
    pub(crate) fn resolve<S: AsRef<str>>(&self, names: &[S]) -> GraphResult<NodeSet> {
        names.iter().map(|n| self.index_of(n.as_ref())).collect()
    }

    pub(crate) fn variable(&self, idx: NodeIndex) -> &Variable {
        &self.variables[idx.index()]
    }

    pub(crate) fn names<I>(&self, indices: I) -> VariableSet
    where
        I: IntoIterator<Item = NodeIndex>,
    {
        indices
            .into_iter()
            .map(|idx| self.variable(idx).clone())
            .collect()
    }

    pub(crate) fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub(crate) fn parents_of(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Incoming)
    }

    pub(crate) fn children_of(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    pub(crate) fn is_latent_index(&self, idx: NodeIndex) -> bool {
        self.latent.contains(&idx)
    }

    /// Copy with every edge into a node of `targets` removed.
    pub(crate) fn without_incoming(&self, targets: &NodeSet) -> Self {
        self.without_edges(targets, Direction::Incoming)
    }

    /// Copy with every edge out of a node of `sources` removed.
    pub(crate) fn without_outgoing(&self, sources: &NodeSet) -> Self {
        self.without_edges(sources, Direction::Outgoing)
    }

    fn without_edges(&self, nodes: &NodeSet, direction: Direction) -> Self {
        let mut next = self.clone();
        let doomed: Vec<_> = nodes
            .iter()
            .flat_map(|&idx| self.graph.edges_directed(idx, direction).map(|e| e.id()))
            .collect();
        for edge in doomed {
            next.graph.remove_edge(edge);
        }
        next
    }

    /// Induced subgraph on `keep`, preserving declaration order and latent flags.
    pub(crate) fn induced(&self, keep: &NodeSet) -> Self {
        let mut sub = DagStableGraph::default();
        let mut variables = Vec::with_capacity(keep.len());
        let mut index = HashMap::with_capacity(keep.len());
        let mut remap = HashMap::with_capacity(keep.len());
        let mut latent = HashSet::new();

        for &old in keep {
            let variable = self.variable(old).clone();
            let new = sub.add_node(variable.clone());
            remap.insert(old, new);
            index.insert(variable.clone(), new);
            variables.push(variable);
            if self.latent.contains(&old) {
                latent.insert(new);
            }
        }
        for edge in self.graph.edge_references() {
            if let (Some(&s), Some(&t)) = (remap.get(&edge.source()), remap.get(&edge.target())) {
                sub.add_edge(s, t, ());
            }
        }

        Self {
            graph: sub,
            variables,
            index,
            latent,
        }
    }
}

impl PartialEq for CausalGraph {
    /// Same variables in the same order, same edge set, same latent set.
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
            && self.latent_variables() == other.latent_variables()
            && self.edges() == other.edges()
    }
}

impl Eq for CausalGraph {}

impl fmt::Display for CausalGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to) in self.edges() {
            writeln!(f, "{from} -> {to}")?;
        }
        Ok(())
    }
}
