use std::fmt::Debug;

/// Errors reported by graph queries and traversals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The named vertex has never been added to the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
}

impl GraphError {
    pub(crate) fn vertex_not_found<T: Debug>(vertex: &T) -> Self {
        GraphError::VertexNotFound(format!("{vertex:?}"))
    }
}
