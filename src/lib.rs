//! A directed graph stored as a mapping from each vertex to the set of its
//! out-neighbors, with lazy breadth-first and depth-first traversal and
//! path search.

pub mod error;
pub mod graph;
pub mod search;

pub use error::GraphError;
pub use graph::{DiGraph, VertexId};
