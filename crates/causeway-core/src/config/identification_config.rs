use serde::{Deserialize, Serialize};

use super::defaults;

/// Adjustment-set search configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentificationConfig {
    /// Largest backdoor adjustment set enumerated when the caller gives no candidates.
    pub max_adjustment_size: usize,
    /// Ignore `max_adjustment_size` and enumerate every subset. Exponential.
    pub allow_unbounded: bool,
    /// Fall back to frontdoor candidates when no backdoor set is valid.
    pub try_frontdoor: bool,
    /// Largest mediator set enumerated for the frontdoor search.
    pub max_mediator_size: usize,
    /// Check candidate sets of one size tier on the rayon pool.
    pub parallel_search: bool,
    /// Minimum number of candidates in a tier before the pool is used.
    pub parallel_threshold: usize,
}

impl Default for IdentificationConfig {
    fn default() -> Self {
        Self {
            max_adjustment_size: defaults::DEFAULT_MAX_ADJUSTMENT_SIZE,
            allow_unbounded: defaults::DEFAULT_ALLOW_UNBOUNDED,
            try_frontdoor: defaults::DEFAULT_TRY_FRONTDOOR,
            max_mediator_size: defaults::DEFAULT_MAX_MEDIATOR_SIZE,
            parallel_search: defaults::DEFAULT_PARALLEL_SEARCH,
            parallel_threshold: defaults::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl IdentificationConfig {
    /// Effective adjustment-set size bound; `None` means unbounded.
    pub fn effective_adjustment_bound(&self) -> Option<usize> {
        if self.allow_unbounded {
            None
        } else {
            Some(self.max_adjustment_size)
        }
    }

    /// Whether a tier of `candidates` sets should be checked in parallel.
    pub fn use_parallel(&self, candidates: usize) -> bool {
        self.parallel_search && candidates >= self.parallel_threshold
    }
}
