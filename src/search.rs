use std::collections::{HashSet, VecDeque};

use crate::graph::{DiGraph, VertexId};

/// Lazy breadth-first traversal over a borrowed graph.
///
/// A vertex may sit in the queue more than once; the visited check happens
/// when it is popped, so each reachable vertex is yielded exactly once.
pub struct Bft<'g, V: VertexId> {
    graph: &'g DiGraph<V>,
    visited: HashSet<V>,
    queue: VecDeque<V>,
}

impl<'g, V: VertexId> Bft<'g, V> {
    pub(crate) fn new(graph: &'g DiGraph<V>, start: V) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            queue: VecDeque::from([start]),
        }
    }
}

impl<V: VertexId> Iterator for Bft<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            if self.visited.insert(id.clone()) {
                for next in self.graph.successors_of(&id) {
                    if !self.visited.contains(next) {
                        self.queue.push_back(next.clone());
                    }
                }
                return Some(id);
            }
        }
        None
    }
}

/// Lazy depth-first traversal over a borrowed graph, driven by an explicit
/// stack instead of recursion.
pub struct Dft<'g, V: VertexId> {
    graph: &'g DiGraph<V>,
    visited: HashSet<V>,
    stack: Vec<V>,
}

impl<'g, V: VertexId> Dft<'g, V> {
    pub(crate) fn new(graph: &'g DiGraph<V>, start: V) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![start],
        }
    }
}

impl<V: VertexId> Iterator for Dft<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if self.visited.insert(id.clone()) {
                for next in self.graph.successors_of(&id) {
                    if !self.visited.contains(next) {
                        self.stack.push(next.clone());
                    }
                }
                return Some(id);
            }
        }
        None
    }
}

/// Breadth-first traversal yielding, for each newly visited vertex, the
/// partial path that first reached it.
///
/// Partial paths leave the queue in non-decreasing length order, so the
/// first yielded path ending at a given vertex is a shortest path to it.
pub struct BftPaths<'g, V: VertexId> {
    graph: &'g DiGraph<V>,
    visited: HashSet<V>,
    queue: VecDeque<Vec<V>>,
}

impl<'g, V: VertexId> BftPaths<'g, V> {
    pub(crate) fn new(graph: &'g DiGraph<V>, start: V) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            queue: VecDeque::from([vec![start]]),
        }
    }
}

impl<V: VertexId> Iterator for BftPaths<'_, V> {
    type Item = Vec<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.queue.pop_front() {
            let Some(last) = path.last().cloned() else {
                continue;
            };
            if !self.visited.insert(last.clone()) {
                continue;
            }
            for next in self.graph.successors_of(&last) {
                if !self.visited.contains(next) {
                    let mut extended = path.clone();
                    extended.push(next.clone());
                    self.queue.push_back(extended);
                }
            }
            return Some(path);
        }
        None
    }
}

/// Depth-first counterpart of [`BftPaths`]: yields the partial path that
/// first reached each visited vertex, in depth-first exploration order.
/// Yielded paths are valid but carry no shortest-length promise.
pub struct DftPaths<'g, V: VertexId> {
    graph: &'g DiGraph<V>,
    visited: HashSet<V>,
    stack: Vec<Vec<V>>,
}

impl<'g, V: VertexId> DftPaths<'g, V> {
    pub(crate) fn new(graph: &'g DiGraph<V>, start: V) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            stack: vec![vec![start]],
        }
    }
}

impl<V: VertexId> Iterator for DftPaths<'_, V> {
    type Item = Vec<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.stack.pop() {
            let Some(last) = path.last().cloned() else {
                continue;
            };
            if !self.visited.insert(last.clone()) {
                continue;
            }
            for next in self.graph.successors_of(&last) {
                if !self.visited.contains(next) {
                    let mut extended = path.clone();
                    extended.push(next.clone());
                    self.stack.push(extended);
                }
            }
            return Some(path);
        }
        None
    }
}
