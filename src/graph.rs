use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    error::GraphError,
    search::{Bft, BftPaths, Dft, DftPaths},
};

/// A trait representing a vertex identifier in a graph.
///
/// This is a capability alias: any type that is hashable, comparable for
/// equality, cloneable, and debug-printable can identify a vertex, so the
/// trait is blanket-implemented rather than opted into.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// A directed graph storing, for each vertex, the set of its out-neighbors.
///
/// Edges carry no data and there is no parallel-edge concept; adding an edge
/// that already exists is a no-op. Self-loops are allowed. Iteration order
/// over a vertex's neighbors is unspecified, so traversals only promise a
/// *strategy* (breadth-first or depth-first), never a particular total order
/// among siblings.
#[derive(Debug, Clone)]
pub struct DiGraph<V: VertexId> {
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> Default for DiGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> DiGraph<V> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    // Mutation

    /// Adds a vertex with no outgoing edges.
    ///
    /// Re-adding an existing vertex resets its successor set to empty, as if
    /// it had been inserted fresh. Edges *into* the vertex from elsewhere
    /// are unaffected.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.insert(id, HashSet::new());
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Both endpoints must already be vertices; otherwise this fails with
    /// [`GraphError::MissingVertex`] naming the absent endpoint and mutates
    /// nothing. Adding an edge that is already present is a no-op.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<(), GraphError<V>> {
        if !self.vertices.contains_key(to) {
            #[cfg(feature = "tracing")]
            tracing::debug!(endpoint = ?to, "add_edge: target is not a vertex");
            return Err(GraphError::MissingVertex(to.clone()));
        }
        match self.vertices.get_mut(from) {
            Some(successors) => {
                successors.insert(to.clone());
                Ok(())
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(endpoint = ?from, "add_edge: source is not a vertex");
                Err(GraphError::MissingVertex(from.clone()))
            }
        }
    }

    // Queries

    /// Gets the successor set of a vertex, or [`GraphError::UnknownVertex`]
    /// if it does not exist. The set is borrowed from the graph and cannot
    /// be mutated through the returned reference.
    pub fn neighbors(&self, id: &V) -> Result<&HashSet<V>, GraphError<V>> {
        self.vertices.get(id).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(vertex = ?id, "neighbors: unknown vertex");
            GraphError::UnknownVertex(id.clone())
        })
    }

    /// Checks whether the given id is a vertex of the graph.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Checks whether the edge `from -> to` is present.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|successors| successors.contains(to))
    }

    /// Gets an iterator over all vertex ids, in unspecified order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Gets the number of vertices in the graph.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Gets the number of edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.vertices.values().map(HashSet::len).sum()
    }

    /// Checks whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Successors of a vertex that is known to exist. Yields nothing for an
    /// unknown vertex, which traversals never pass in: every edge target is
    /// itself a vertex.
    pub(crate) fn successors_of<'g>(&'g self, id: &V) -> impl Iterator<Item = &'g V> {
        self.vertices.get(id).into_iter().flatten()
    }

    // Traversal

    /// Performs a breadth-first traversal from `start`, yielding each
    /// reachable vertex exactly once, layer by layer.
    pub fn bft(&self, start: &V) -> Result<Bft<'_, V>, GraphError<V>> {
        self.check_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = ?start, "bft");
        Ok(Bft::new(self, start.clone()))
    }

    /// Performs a depth-first traversal from `start`, yielding each
    /// reachable vertex exactly once using an explicit stack.
    pub fn dft(&self, start: &V) -> Result<Dft<'_, V>, GraphError<V>> {
        self.check_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = ?start, "dft");
        Ok(Dft::new(self, start.clone()))
    }

    /// Performs a depth-first traversal from `start` using call-stack
    /// recursion, returning the vertices in visitation order.
    ///
    /// Visits the same set of vertices as [`dft`](Self::dft). Recursion
    /// depth is bounded by the number of vertices, so prefer `dft` for very
    /// deep graphs.
    pub fn dft_recursive(&self, start: &V) -> Result<Vec<V>, GraphError<V>> {
        self.check_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = ?start, "dft_recursive");
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        self.dft_visit(start, &mut visited, &mut order);
        Ok(order)
    }

    fn dft_visit(&self, at: &V, visited: &mut HashSet<V>, order: &mut Vec<V>) {
        if !visited.insert(at.clone()) {
            return;
        }
        order.push(at.clone());
        for next in self.successors_of(at) {
            self.dft_visit(next, visited, order);
        }
    }

    // Path search

    /// Finds a shortest path (by edge count) from `start` to `dest`.
    ///
    /// Returns `Ok(None)` when `dest` is unreachable from `start`; this is
    /// an ordinary outcome, not an error. A `dest` that is not a vertex is
    /// simply unreachable. An unknown `start` fails with
    /// [`GraphError::UnknownVertex`].
    pub fn bfs(&self, start: &V, dest: &V) -> Result<Option<Vec<V>>, GraphError<V>> {
        self.check_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = ?start, dest = ?dest, "bfs");
        Ok(BftPaths::new(self, start.clone()).find(|path| path.last() == Some(dest)))
    }

    /// Finds a path from `start` to `dest` by depth-first exploration.
    ///
    /// The returned path is valid but not necessarily shortest. Same
    /// not-found and error behavior as [`bfs`](Self::bfs).
    pub fn dfs(&self, start: &V, dest: &V) -> Result<Option<Vec<V>>, GraphError<V>> {
        self.check_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = ?start, dest = ?dest, "dfs");
        Ok(DftPaths::new(self, start.clone()).find(|path| path.last() == Some(dest)))
    }

    /// Finds a path from `start` to `dest` by recursive depth-first
    /// exploration with a single visited set shared across sibling branches.
    ///
    /// The shared set doubles as reachability bookkeeping: a vertex entered
    /// while unsuccessfully exploring one branch has had its whole unvisited
    /// out-neighborhood explored, so the search still finds a path whenever
    /// one exists. The path returned is the recursion path and is not
    /// necessarily shortest. Same not-found and error behavior as
    /// [`bfs`](Self::bfs).
    pub fn dfs_recursive(&self, start: &V, dest: &V) -> Result<Option<Vec<V>>, GraphError<V>> {
        self.check_vertex(start)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(start = ?start, dest = ?dest, "dfs_recursive");
        let mut visited = HashSet::new();
        Ok(self.dfs_visit(start, dest, &mut visited))
    }

    fn dfs_visit(&self, at: &V, dest: &V, visited: &mut HashSet<V>) -> Option<Vec<V>> {
        if !visited.insert(at.clone()) {
            return None;
        }
        if at == dest {
            return Some(vec![at.clone()]);
        }
        for next in self.successors_of(at) {
            if let Some(mut path) = self.dfs_visit(next, dest, visited) {
                path.insert(0, at.clone());
                return Some(path);
            }
        }
        None
    }

    fn check_vertex(&self, id: &V) -> Result<(), GraphError<V>> {
        if self.vertices.contains_key(id) {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(vertex = ?id, "operation on unknown vertex");
            Err(GraphError::UnknownVertex(id.clone()))
        }
    }
}
