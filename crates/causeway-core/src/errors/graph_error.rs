//! Causal graph errors.

use super::error_code::{self, CausewayErrorCode};

/// Errors raised by graph construction, mutation, and queries.
///
/// All of them are deterministic for a given input: none is retried and
/// no partial result accompanies them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("duplicate variable: {name}")]
    DuplicateVariable { name: String },

    #[error("edge {from} -> {to} would create a directed cycle")]
    CycleViolation { from: String, to: String },

    #[error("variable {variable} appears in more than one of the X, Y, Z sets")]
    OverlappingVariableSets { variable: String },

    #[error("invalid edge list at line {line}: {message}")]
    InvalidEdgeList { line: usize, message: String },

    #[error("invalid graph spec: {message}")]
    InvalidGraphSpec { message: String },
}

impl CausewayErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownVariable { .. } => error_code::UNKNOWN_VARIABLE,
            Self::DuplicateVariable { .. } => error_code::DUPLICATE_VARIABLE,
            Self::CycleViolation { .. } => error_code::CYCLE_VIOLATION,
            Self::OverlappingVariableSets { .. } => error_code::OVERLAPPING_VARIABLE_SETS,
            Self::InvalidEdgeList { .. } | Self::InvalidGraphSpec { .. } => {
                error_code::GRAPH_SPEC_ERROR
            }
        }
    }
}

impl GraphError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownVariable { name: name.into() }
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
