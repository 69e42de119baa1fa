use std::fmt;

use serde::Serialize;

use crate::graph::stable_graph::VariableSet;

/// Outcome of [`identify_effect`](super::identify_effect).
///
/// `Unidentifiable` is a normal verdict, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentificationResult {
    /// Adjusting for `adjustment_set` removes confounding.
    Backdoor {
        treatment: VariableSet,
        outcome: VariableSet,
        adjustment_set: VariableSet,
    },
    /// The effect is recovered through the fully observed `mediator_set`.
    Frontdoor {
        treatment: VariableSet,
        outcome: VariableSet,
        mediator_set: VariableSet,
    },
    /// No candidate set satisfied either criterion.
    Unidentifiable {
        treatment: VariableSet,
        outcome: VariableSet,
    },
}

impl IdentificationResult {
    pub fn is_identified(&self) -> bool {
        !matches!(self, Self::Unidentifiable { .. })
    }

    /// "backdoor", "frontdoor", or "unidentifiable".
    pub fn method(&self) -> &'static str {
        match self {
            Self::Backdoor { .. } => "backdoor",
            Self::Frontdoor { .. } => "frontdoor",
            Self::Unidentifiable { .. } => "unidentifiable",
        }
    }

    /// The backdoor adjustment set, if that is how the effect was identified.
    pub fn adjustment_set(&self) -> Option<&VariableSet> {
        match self {
            Self::Backdoor { adjustment_set, .. } => Some(adjustment_set),
            _ => None,
        }
    }

    /// The frontdoor mediator set, if that is how the effect was identified.
    pub fn mediator_set(&self) -> Option<&VariableSet> {
        match self {
            Self::Frontdoor { mediator_set, .. } => Some(mediator_set),
            _ => None,
        }
    }
}

fn join(set: &VariableSet) -> String {
    set.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ")
}

fn primed(set: &VariableSet) -> String {
    set.iter()
        .map(|v| format!("{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for IdentificationResult {
    /// Renders the estimand, e.g. `P(Y | do(X)) = Σ_{Z} P(Y | X, Z) P(Z)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backdoor {
                treatment,
                outcome,
                adjustment_set,
            } => {
                let (x, y) = (join(treatment), join(outcome));
                if adjustment_set.is_empty() {
                    write!(f, "P({y} | do({x})) = P({y} | {x})")
                } else {
                    let z = join(adjustment_set);
                    write!(f, "P({y} | do({x})) = Σ_{{{z}}} P({y} | {x}, {z}) P({z})")
                }
            }
            Self::Frontdoor {
                treatment,
                outcome,
                mediator_set,
            } => {
                let (x, y, m) = (join(treatment), join(outcome), join(mediator_set));
                let xp = primed(treatment);
                write!(
                    f,
                    "P({y} | do({x})) = Σ_{{{m}}} P({m} | {x}) Σ_{{{xp}}} P({y} | {xp}, {m}) P({xp})"
                )
            }
            Self::Unidentifiable { treatment, outcome } => write!(
                f,
                "P({} | do({})) is not identifiable by backdoor or frontdoor adjustment",
                join(outcome),
                join(treatment)
            ),
        }
    }
}
