use thiserror::Error;

/// Errors raised when querying a [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The key never appeared in the edge list the graph was built from.
    #[error("vertex {0} not present in graph")]
    UnknownVertex(String),

    /// Weight requested for two vertices that share no edge.
    #[error("no edge between {0} and {1}")]
    UndefinedEdge(String, String),
}
