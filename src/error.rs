//! Errors raised by the value-level graph API.

use thiserror::Error;

use crate::edge::Weight;

/// Every failure of an operation on a graph.
///
/// All errors are raised before the graph is mutated, so a failed call leaves the graph unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} is already contained in the graph")]
    DuplicateNode(String),

    #[error("node {0} is not contained in the graph")]
    NodeNotFound(String),

    #[error("negative edge weight {0} is not supported")]
    NegativeWeight(Weight),

    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid matrix: {0}")]
    InvalidMatrix(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn duplicate<T: std::fmt::Debug>(value: &T) -> Self {
        Self::DuplicateNode(format!("{value:?}"))
    }

    pub(crate) fn not_found<T: std::fmt::Debug>(value: &T) -> Self {
        Self::NodeNotFound(format!("{value:?}"))
    }
}
