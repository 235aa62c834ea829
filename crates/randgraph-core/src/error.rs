//! Error types for graph generation and validation.

use thiserror::Error;

use crate::Edge;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Generation parameters were rejected before any sampling happened.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An edge references a node index that does not exist.
    #[error("edge {edge} references a node outside 0..{node_count}")]
    NodeOutOfRange { edge: Edge, node_count: usize },

    /// An edge connects a node to itself.
    #[error("self-loop on node {node}")]
    SelfLoop { node: usize },

    /// The same unordered pair appears more than once.
    #[error("duplicate edge between {a} and {b}")]
    DuplicateEdge { a: usize, b: usize },

    /// Graph file could not be parsed.
    #[error("graph file parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GraphError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
