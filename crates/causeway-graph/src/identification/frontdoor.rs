//! Frontdoor criterion.
//!
//! `M` is a valid mediator set for the effect of `X` on `Y` iff
//! (a) every directed path from `X` to `Y` passes through `M`,
//! (b) `∅` satisfies the backdoor criterion for `(X, M)`, and
//! (c) `X` satisfies the backdoor criterion for `(M, Y)`.

use causeway_core::errors::GraphResult;

use crate::dseparation::separation::{ensure_disjoint, resolve_disjoint};
use crate::graph::stable_graph::{CausalGraph, NodeSet};
use crate::reachability::ancestry::reaches_avoiding;

use super::backdoor::BackdoorCheck;

/// Whether `m` satisfies the frontdoor criterion relative to `(x, y)`.
pub fn frontdoor_criterion(
    graph: &CausalGraph,
    x: &[&str],
    y: &[&str],
    m: &[&str],
) -> GraphResult<bool> {
    let (xs, ys, ms) = resolve_disjoint(graph, x, y, m)?;
    Ok(FrontdoorCheck::new(graph, xs, ys).admits(&ms))
}

pub(crate) struct FrontdoorCheck<'g> {
    graph: &'g CausalGraph,
    xs: NodeSet,
    ys: NodeSet,
}

impl<'g> FrontdoorCheck<'g> {
    pub(crate) fn new(graph: &'g CausalGraph, xs: NodeSet, ys: NodeSet) -> Self {
        Self { graph, xs, ys }
    }

    pub(crate) fn admits(&self, ms: &NodeSet) -> bool {
        if ensure_disjoint(self.graph, &self.xs, &self.ys, ms).is_err() {
            return false;
        }

        // (a) M intercepts all directed X -> Y paths.
        if reaches_avoiding(self.graph, &self.xs, &self.ys, ms) {
            return false;
        }

        // (b) No unblocked backdoor path from X to M.
        let x_to_m = BackdoorCheck::new(self.graph, self.xs.clone(), ms.clone());
        if !x_to_m.admits(&NodeSet::new()) {
            return false;
        }

        // (c) X blocks every backdoor path from M to Y.
        let m_to_y = BackdoorCheck::new(self.graph, ms.clone(), self.ys.clone());
        m_to_y.admits(&self.xs)
    }
}
