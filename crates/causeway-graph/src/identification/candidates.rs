//! Candidate adjustment and mediator sets, grouped into tiers of equal size
//! so the search always reports a smallest valid set.

use std::collections::BTreeMap;

use itertools::Itertools;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use causeway_core::config::IdentificationConfig;
use causeway_core::errors::GraphResult;

use crate::graph::stable_graph::{CausalGraph, NodeSet};
use crate::reachability::ancestry::{mediator_indices, walk};

/// Upper bound on the size of enumerated candidate sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBound {
    AtMost(usize),
    /// Every subset of the pool. Exponential in the pool size.
    Unbounded,
}

impl SizeBound {
    pub fn from_limit(limit: Option<usize>) -> Self {
        limit.map_or(Self::Unbounded, Self::AtMost)
    }

    fn limit(self, pool: usize) -> usize {
        match self {
            Self::AtMost(n) => n.min(pool),
            Self::Unbounded => pool,
        }
    }
}

/// Where the identification search takes its candidate sets from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// Caller-supplied sets, tried smallest first (input order within a size).
    Explicit {
        adjustment: Vec<Vec<String>>,
        mediators: Vec<Vec<String>>,
    },
    /// Subsets of the observed non-descendants of `X` (backdoor) and of the
    /// observed variables on directed `X -> Y` paths (frontdoor).
    Enumerate {
        adjustment: SizeBound,
        mediators: SizeBound,
    },
}

impl CandidateSource {
    /// Enumerate both kinds of sets up to `max_size` variables.
    pub fn bounded(max_size: usize) -> Self {
        Self::Enumerate {
            adjustment: SizeBound::AtMost(max_size),
            mediators: SizeBound::AtMost(max_size),
        }
    }

    /// Enumerate every subset. Must be asked for explicitly.
    pub fn unbounded() -> Self {
        Self::Enumerate {
            adjustment: SizeBound::Unbounded,
            mediators: SizeBound::Unbounded,
        }
    }

    pub fn explicit(adjustment: Vec<Vec<String>>, mediators: Vec<Vec<String>>) -> Self {
        Self::Explicit {
            adjustment,
            mediators,
        }
    }

    /// Bounds taken from the `[identification]` config section.
    pub fn from_config(config: &IdentificationConfig) -> Self {
        Self::Enumerate {
            adjustment: SizeBound::from_limit(config.effective_adjustment_bound()),
            mediators: SizeBound::AtMost(config.max_mediator_size),
        }
    }
}

/// Candidate sets of one size.
pub(crate) type Tier = Vec<NodeSet>;

pub(crate) type Tiers<'a> = Box<dyn Iterator<Item = Tier> + 'a>;

/// Observed variables outside `X ∪ Y` that are not descendants of `X`.
pub(crate) fn adjustment_pool(graph: &CausalGraph, xs: &NodeSet, ys: &NodeSet) -> Vec<NodeIndex> {
    let descendants = walk(graph, xs.iter().copied(), Direction::Outgoing);
    graph
        .node_indices()
        .filter(|idx| {
            !graph.is_latent_index(*idx)
                && !xs.contains(idx)
                && !ys.contains(idx)
                && !descendants.contains(idx)
        })
        .collect()
}

/// Observed variables strictly inside directed `X -> Y` paths.
pub(crate) fn mediator_pool(graph: &CausalGraph, xs: &NodeSet, ys: &NodeSet) -> Vec<NodeIndex> {
    mediator_indices(graph, xs, ys)
        .into_iter()
        .filter(|idx| !graph.is_latent_index(*idx))
        .collect()
}

/// All subsets of `pool` with `min_size..=bound` members, one tier per size.
pub(crate) fn enumerate(pool: Vec<NodeIndex>, bound: SizeBound, min_size: usize) -> Tiers<'static> {
    let max_size = bound.limit(pool.len());
    Box::new((min_size..=max_size).map(move |size| {
        if size == 0 {
            return vec![NodeSet::new()];
        }
        pool.iter()
            .copied()
            .combinations(size)
            .map(|combo| combo.into_iter().collect())
            .collect()
    }))
}

/// Resolve caller-supplied sets into tiers. Sets naming a latent variable
/// cannot be adjusted for and are dropped; unknown names are errors.
pub(crate) fn explicit(graph: &CausalGraph, sets: &[Vec<String>]) -> GraphResult<Tiers<'static>> {
    let mut by_size: BTreeMap<usize, Tier> = BTreeMap::new();

    for names in sets {
        let set = graph.resolve(names.as_slice())?;
        if set.iter().any(|idx| graph.is_latent_index(*idx)) {
            tracing::debug!(?names, "skipping candidate containing a latent variable");
            continue;
        }
        by_size.entry(set.len()).or_default().push(set);
    }

    Ok(Box::new(by_size.into_values()))
}
