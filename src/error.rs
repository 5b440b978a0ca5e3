use crate::graph::VertexId;

/// Errors produced by invalid use of the graph API.
///
/// A path search that exhausts the graph without reaching its destination is
/// not an error; it reports `Ok(None)` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<V: VertexId> {
    /// An endpoint passed to [`add_edge`](crate::DiGraph::add_edge) is not a
    /// vertex of the graph.
    #[error("edge endpoint is not a vertex: {0:?}")]
    MissingVertex(V),

    /// A vertex passed to a query or traversal does not exist.
    #[error("unknown vertex: {0:?}")]
    UnknownVertex(V),
}
