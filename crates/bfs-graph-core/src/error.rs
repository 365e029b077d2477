//! Error types for graph construction, lookup and pathfinding.

use thiserror::Error;

use crate::types::NodeId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or querying a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A precondition on the input was violated (duplicate node, dangling edge, bad topology).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A node referenced by identity is not registered in the graph.
    #[error("node not found: {node}")]
    NotFound { node: NodeId },

    /// The end node cannot be reached from the start node.
    #[error("no path exists between {start} and {end}")]
    NoPathFound { start: NodeId, end: NodeId },

    /// Topology JSON could not be parsed or written.
    #[error("topology serialization error: {0}")]
    Topology(#[from] serde_json::Error),

    /// I/O error while reading or writing a topology file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not-found error for the given node.
    pub fn not_found(node: &NodeId) -> Self {
        Self::NotFound { node: node.clone() }
    }

    /// Whether this error is a recoverable runtime condition rather than a configuration bug.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GraphError::NoPathFound { .. })
    }
}
