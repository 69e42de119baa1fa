//! Identification search: backdoor candidates first, then frontdoor
//! candidates, each in increasing size order.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use causeway_core::config::IdentificationConfig;
use causeway_core::errors::GraphResult;

use crate::dseparation::separation::resolve_disjoint;
use crate::graph::stable_graph::{CausalGraph, NodeSet};

use super::backdoor::BackdoorCheck;
use super::candidates::{self, CandidateSource, SizeBound, Tiers};
use super::frontdoor::FrontdoorCheck;
use super::result::IdentificationResult;

/// Decide whether the effect of `x` on `y` is identifiable, using default
/// search settings.
///
/// Only malformed input is an error (unknown names, overlapping `x`/`y`);
/// "nothing worked" is [`IdentificationResult::Unidentifiable`].
pub fn identify_effect(
    graph: &CausalGraph,
    x: &[&str],
    y: &[&str],
    source: &CandidateSource,
) -> GraphResult<IdentificationResult> {
    identify_effect_with(graph, x, y, source, &IdentificationConfig::default())
}

/// [`identify_effect`] with explicit search settings.
pub fn identify_effect_with(
    graph: &CausalGraph,
    x: &[&str],
    y: &[&str],
    source: &CandidateSource,
    config: &IdentificationConfig,
) -> GraphResult<IdentificationResult> {
    let (xs, ys, _) = resolve_disjoint(graph, x, y, &[])?;
    let treatment = graph.names(xs.iter().copied());
    let outcome = graph.names(ys.iter().copied());

    let (adjustment, mediators) = match source {
        CandidateSource::Explicit {
            adjustment,
            mediators,
        } => (
            candidates::explicit(graph, adjustment)?,
            candidates::explicit(graph, mediators)?,
        ),
        CandidateSource::Enumerate {
            adjustment,
            mediators,
        } => (
            adjustment_tiers(graph, &xs, &ys, *adjustment),
            mediator_tiers(graph, &xs, &ys, *mediators),
        ),
    };

    let backdoor = BackdoorCheck::new(graph, xs.clone(), ys.clone());
    if let Some(found) = first_admitted(adjustment, config, |z| backdoor.admits(z)) {
        let adjustment_set = graph.names(found);
        info!(?treatment, ?outcome, ?adjustment_set, "identified by backdoor adjustment");
        return Ok(IdentificationResult::Backdoor {
            treatment,
            outcome,
            adjustment_set,
        });
    }

    if config.try_frontdoor {
        let frontdoor = FrontdoorCheck::new(graph, xs, ys);
        if let Some(found) = first_admitted(mediators, config, |m| frontdoor.admits(m)) {
            let mediator_set = graph.names(found);
            info!(?treatment, ?outcome, ?mediator_set, "identified by frontdoor adjustment");
            return Ok(IdentificationResult::Frontdoor {
                treatment,
                outcome,
                mediator_set,
            });
        }
    }

    info!(?treatment, ?outcome, "effect not identifiable");
    Ok(IdentificationResult::Unidentifiable { treatment, outcome })
}

/// Smallest valid backdoor set from enumerated candidates, if any.
pub(crate) fn backdoor_search(
    graph: &CausalGraph,
    xs: &NodeSet,
    ys: &NodeSet,
    bound: SizeBound,
    config: &IdentificationConfig,
) -> Option<NodeSet> {
    let check = BackdoorCheck::new(graph, xs.clone(), ys.clone());
    first_admitted(adjustment_tiers(graph, xs, ys, bound), config, |z| {
        check.admits(z)
    })
}

fn adjustment_tiers(
    graph: &CausalGraph,
    xs: &NodeSet,
    ys: &NodeSet,
    bound: SizeBound,
) -> Tiers<'static> {
    let pool = candidates::adjustment_pool(graph, xs, ys);
    if bound == SizeBound::Unbounded {
        warn!(pool = pool.len(), "unbounded adjustment-set enumeration; search is exponential");
    }
    candidates::enumerate(pool, bound, 0)
}

fn mediator_tiers(
    graph: &CausalGraph,
    xs: &NodeSet,
    ys: &NodeSet,
    bound: SizeBound,
) -> Tiers<'static> {
    let pool = candidates::mediator_pool(graph, xs, ys);
    if bound == SizeBound::Unbounded {
        warn!(pool = pool.len(), "unbounded mediator-set enumeration; search is exponential");
    }
    candidates::enumerate(pool, bound, 1)
}

/// First admitted set in tier order. Within a tier, large tiers are checked on
/// the rayon pool; `find_first` keeps the answer identical to the serial scan.
fn first_admitted<F>(tiers: Tiers<'_>, config: &IdentificationConfig, check: F) -> Option<NodeSet>
where
    F: Fn(&NodeSet) -> bool + Sync,
{
    for tier in tiers {
        let size = tier.first().map_or(0, NodeSet::len);
        debug!(size, candidates = tier.len(), "checking candidate tier");

        let found = if config.use_parallel(tier.len()) {
            tier.into_par_iter().find_first(|set| check(set))
        } else {
            tier.into_iter().find(|set| check(set))
        };

        if found.is_some() {
            return found;
        }
    }
    None
}
