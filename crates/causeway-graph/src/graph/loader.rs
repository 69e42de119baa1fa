//! Building graphs from caller-supplied descriptions: a serde spec (JSON)
//! and a plain-text edge list.
//!
//! Edge-list format, one statement per line:
//!
//! ```text
//! # comments run to end of line
//! smoking -> tar -> cancer     # chains expand to consecutive edges
//! genotype -> smoking
//! genotype -> cancer
//! age                          # a bare name declares an isolated variable
//! latent: genotype             # mark variables as unobserved
//! ```
//!
//! Variables are declared in order of first appearance.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use causeway_core::errors::{GraphError, GraphResult};

use super::stable_graph::CausalGraph;

/// Serializable description of a graph: variables, edges, and latent variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub variables: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub latent: Vec<String>,
}

impl TryFrom<GraphSpec> for CausalGraph {
    type Error = GraphError;

    fn try_from(spec: GraphSpec) -> GraphResult<Self> {
        let edges = spec.edges.iter().map(|(from, to)| (from, to));
        CausalGraph::from_edges(&spec.variables, edges)?.with_latent(&spec.latent)
    }
}

impl From<CausalGraph> for GraphSpec {
    fn from(graph: CausalGraph) -> Self {
        Self {
            variables: graph.variables().iter().map(|v| v.to_string()).collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            latent: graph
                .latent_variables()
                .into_iter()
                .map(|v| v.to_string())
                .collect(),
        }
    }
}

impl CausalGraph {
    /// Parse a JSON [`GraphSpec`].
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let spec: GraphSpec =
            serde_json::from_str(json).map_err(|e| GraphError::InvalidGraphSpec {
                message: e.to_string(),
            })?;
        Self::try_from(spec)
    }

    /// Serialize to a pretty-printed JSON [`GraphSpec`].
    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(&GraphSpec::from(self.clone())).map_err(|e| {
            GraphError::InvalidGraphSpec {
                message: e.to_string(),
            }
        })
    }

    /// Parse the plain-text edge-list format described in the module docs.
    pub fn from_edge_list(text: &str) -> GraphResult<Self> {
        let mut variables: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut edges: Vec<(String, String)> = Vec::new();
        let mut latent: Vec<String> = Vec::new();

        for (line_no, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("latent:") {
                for name in rest.split(',').map(str::trim) {
                    check_name(name, line_no + 1)?;
                    latent.push(name.to_string());
                }
                continue;
            }

            let names: Vec<&str> = line.split("->").map(str::trim).collect();
            for name in &names {
                check_name(name, line_no + 1)?;
                if seen.insert(name.to_string()) {
                    variables.push(name.to_string());
                }
            }
            for pair in names.windows(2) {
                edges.push((pair[0].to_string(), pair[1].to_string()));
            }
        }

        // Latent names must also appear in some statement.
        for name in &latent {
            if !seen.contains(name) {
                return Err(GraphError::unknown(name.as_str()));
            }
        }

        let pairs = edges.iter().map(|(from, to)| (from, to));
        CausalGraph::from_edges(&variables, pairs)?.with_latent(&latent)
    }
}

fn check_name(name: &str, line: usize) -> GraphResult<()> {
    if name.is_empty() {
        return Err(GraphError::InvalidEdgeList {
            line,
            message: "empty variable name".to_string(),
        });
    }
    if name.chars().any(char::is_whitespace) {
        return Err(GraphError::InvalidEdgeList {
            line,
            message: format!("variable name `{name}` contains whitespace"),
        });
    }
    Ok(())
}
