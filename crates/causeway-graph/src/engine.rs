//! CausalEngine: shares one immutable graph and the identification settings
//! across every query. Cheap to clone; `Send + Sync`.

use std::sync::Arc;

use tracing::instrument;

use causeway_core::config::{CausewayConfig, IdentificationConfig};
use causeway_core::errors::GraphResult;

use crate::dseparation::{self, Independence};
use crate::graph::{CausalGraph, Variable, VariableSet};
use crate::identification::{self, CandidateSource, IdentificationResult, SizeBound};
use crate::intervention::{self, MutilatedGraph};
use crate::reachability;

/// The main causal identification engine.
#[derive(Debug, Clone)]
pub struct CausalEngine {
    graph: Arc<CausalGraph>,
    config: IdentificationConfig,
}

impl CausalEngine {
    /// Create an engine with default identification settings.
    pub fn new(graph: CausalGraph) -> Self {
        Self::with_config(graph, IdentificationConfig::default())
    }

    pub fn with_config(graph: CausalGraph, config: IdentificationConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config,
        }
    }

    /// Create from a full [`CausewayConfig`].
    pub fn from_config(graph: CausalGraph, config: &CausewayConfig) -> Self {
        Self::with_config(graph, config.identification.clone())
    }

    /// Same settings, different graph.
    pub fn with_graph(&self, graph: CausalGraph) -> Self {
        Self::with_config(graph, self.config.clone())
    }

    pub fn graph(&self) -> &Arc<CausalGraph> {
        &self.graph
    }

    pub fn config(&self) -> &IdentificationConfig {
        &self.config
    }

    // --- Reachability ---

    pub fn ancestors(&self, variable: &str) -> GraphResult<VariableSet> {
        reachability::ancestors(&self.graph, variable)
    }

    pub fn descendants(&self, variable: &str) -> GraphResult<VariableSet> {
        reachability::descendants(&self.graph, variable)
    }

    pub fn markov_blanket(&self, variable: &str) -> GraphResult<VariableSet> {
        reachability::markov_blanket(&self.graph, variable)
    }

    pub fn ancestral_subgraph(&self, variables: &[&str]) -> GraphResult<CausalGraph> {
        reachability::ancestral_subgraph(&self.graph, variables)
    }

    pub fn has_directed_path(&self, from: &str, to: &str) -> GraphResult<bool> {
        reachability::has_directed_path(&self.graph, from, to)
    }

    pub fn mediators(&self, treatment: &str, outcome: &str) -> GraphResult<VariableSet> {
        reachability::mediators(&self.graph, treatment, outcome)
    }

    /// Evaluation order for structural equations.
    pub fn topological_order(&self) -> Vec<Variable> {
        reachability::topological_order(&self.graph)
    }

    // --- D-separation ---

    #[instrument(skip(self))]
    pub fn d_separated(&self, x: &[&str], y: &[&str], z: &[&str]) -> GraphResult<bool> {
        dseparation::d_separated(&self.graph, x, y, z)
    }

    #[instrument(skip(self))]
    pub fn d_connected(&self, x: &[&str], y: &[&str], z: &[&str]) -> GraphResult<bool> {
        dseparation::d_connected(&self.graph, x, y, z)
    }

    /// Independences implied by the local Markov property.
    pub fn local_markov_statements(&self) -> Vec<Independence> {
        dseparation::local_markov_statements(&self.graph)
    }

    // --- Identification ---

    #[instrument(skip(self))]
    pub fn backdoor_criterion(&self, x: &[&str], y: &[&str], z: &[&str]) -> GraphResult<bool> {
        identification::backdoor_criterion(&self.graph, x, y, z)
    }

    #[instrument(skip(self))]
    pub fn frontdoor_criterion(&self, x: &[&str], y: &[&str], m: &[&str]) -> GraphResult<bool> {
        identification::frontdoor_criterion(&self.graph, x, y, m)
    }

    /// Identify with candidate bounds taken from the engine's config.
    #[instrument(skip(self))]
    pub fn identify_effect(&self, x: &[&str], y: &[&str]) -> GraphResult<IdentificationResult> {
        let source = CandidateSource::from_config(&self.config);
        identification::identify_effect_with(&self.graph, x, y, &source, &self.config)
    }

    /// Identify with caller-chosen candidates.
    #[instrument(skip(self, source))]
    pub fn identify_effect_from(
        &self,
        x: &[&str],
        y: &[&str],
        source: &CandidateSource,
    ) -> GraphResult<IdentificationResult> {
        identification::identify_effect_with(&self.graph, x, y, source, &self.config)
    }

    // --- Intervention ---

    #[instrument(skip(self, value))]
    pub fn intervene<V>(&self, target: &str, value: V) -> GraphResult<MutilatedGraph<V>> {
        intervention::intervene(&self.graph, target, value)
    }

    /// Smallest backdoor adjustment set within the configured size bound.
    #[instrument(skip(self))]
    pub fn find_adjustment_set(&self, x: &[&str], y: &[&str]) -> GraphResult<Option<VariableSet>> {
        let bound = SizeBound::from_limit(self.config.effective_adjustment_bound());
        intervention::find_adjustment_set(&self.graph, x, y, bound, &self.config)
    }
}
