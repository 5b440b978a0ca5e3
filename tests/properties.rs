//! Property tests over arbitrary graphs.

use std::collections::HashSet;

use digraph::{DiGraph, GraphError};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A small arbitrary directed graph with at least one vertex.
#[derive(Debug, Clone)]
struct ArbGraph {
    graph: DiGraph<u8>,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 12 + 1;
        let num_edges = usize::arbitrary(g) % 30;
        let num_self_loops = usize::arbitrary(g) % 3;

        let mut graph = DiGraph::new();
        let vertices: Vec<u8> = (0..num_vertices as u8).collect();
        for &v in &vertices {
            graph.add_vertex(v);
        }
        for i in 0..num_edges {
            let from = vertices[usize::arbitrary(g) % vertices.len()];
            let to = vertices[usize::arbitrary(g) % vertices.len()];
            graph.add_edge(&from, &to).unwrap();
            if i < num_self_loops {
                graph.add_edge(&from, &from).unwrap();
            }
        }
        ArbGraph { graph }
    }
}

/// Maps an arbitrary index onto one of the graph's vertices.
fn pick_vertex(graph: &DiGraph<u8>, index: usize) -> u8 {
    let mut ids: Vec<_> = graph.vertex_ids().copied().collect();
    ids.sort_unstable();
    ids[index % ids.len()]
}

fn is_valid_path(graph: &DiGraph<u8>, path: &[u8], start: u8, dest: u8) -> bool {
    path.first() == Some(&start)
        && path.last() == Some(&dest)
        && path.windows(2).all(|pair| graph.has_edge(&pair[0], &pair[1]))
}

#[quickcheck]
fn prop_traversals_visit_the_same_set(arb: ArbGraph, start: usize) -> bool {
    let start = pick_vertex(&arb.graph, start);
    let bft: HashSet<_> = arb.graph.bft(&start).unwrap().collect();
    let dft: HashSet<_> = arb.graph.dft(&start).unwrap().collect();
    let recursive: HashSet<_> = arb
        .graph
        .dft_recursive(&start)
        .unwrap()
        .into_iter()
        .collect();
    bft == dft && dft == recursive
}

#[quickcheck]
fn prop_traversal_yields_each_vertex_once(arb: ArbGraph, start: usize) -> bool {
    let start = pick_vertex(&arb.graph, start);
    let order: Vec<_> = arb.graph.bft(&start).unwrap().collect();
    let distinct: HashSet<_> = order.iter().copied().collect();
    order.len() == distinct.len() && order.first() == Some(&start)
}

#[quickcheck]
fn prop_bfs_finds_a_path_exactly_when_dest_is_reachable(
    arb: ArbGraph,
    start: usize,
    dest: usize,
) -> bool {
    let start = pick_vertex(&arb.graph, start);
    let dest = pick_vertex(&arb.graph, dest);
    let reachable: HashSet<_> = arb.graph.bft(&start).unwrap().collect();
    match arb.graph.bfs(&start, &dest).unwrap() {
        Some(path) => reachable.contains(&dest) && is_valid_path(&arb.graph, &path, start, dest),
        None => !reachable.contains(&dest),
    }
}

#[quickcheck]
fn prop_dfs_agrees_with_bfs_on_reachability(arb: ArbGraph, start: usize, dest: usize) -> bool {
    let start = pick_vertex(&arb.graph, start);
    let dest = pick_vertex(&arb.graph, dest);
    let by_bfs = arb.graph.bfs(&start, &dest).unwrap();
    let by_dfs = arb.graph.dfs(&start, &dest).unwrap();
    let by_dfs_recursive = arb.graph.dfs_recursive(&start, &dest).unwrap();
    by_bfs.is_some() == by_dfs.is_some() && by_bfs.is_some() == by_dfs_recursive.is_some()
}

#[quickcheck]
fn prop_bfs_path_is_never_longer_than_dfs_path(arb: ArbGraph, start: usize, dest: usize) -> bool {
    let start = pick_vertex(&arb.graph, start);
    let dest = pick_vertex(&arb.graph, dest);
    match (
        arb.graph.bfs(&start, &dest).unwrap(),
        arb.graph.dfs(&start, &dest).unwrap(),
    ) {
        (Some(bfs_path), Some(dfs_path)) => bfs_path.len() <= dfs_path.len(),
        (None, None) => true,
        _ => false,
    }
}

#[quickcheck]
fn prop_dfs_paths_are_valid(arb: ArbGraph, start: usize, dest: usize) -> bool {
    let start = pick_vertex(&arb.graph, start);
    let dest = pick_vertex(&arb.graph, dest);
    let valid = |path: Option<Vec<u8>>| match path {
        Some(path) => is_valid_path(&arb.graph, &path, start, dest),
        None => true,
    };
    valid(arb.graph.dfs(&start, &dest).unwrap())
        && valid(arb.graph.dfs_recursive(&start, &dest).unwrap())
}

#[quickcheck]
fn prop_search_to_self_is_the_trivial_path(arb: ArbGraph, start: usize) -> bool {
    let start = pick_vertex(&arb.graph, start);
    arb.graph.bfs(&start, &start).unwrap() == Some(vec![start])
}

#[quickcheck]
fn prop_add_edge_rejects_missing_endpoints(arb: ArbGraph, from: usize, outsider: u8) -> bool {
    let mut graph = arb.graph;
    let from = pick_vertex(&graph, from);
    // Vertices are always drawn from a low range, so this id is never one.
    let outsider = outsider.saturating_add(100);
    let edges_before = graph.num_edges();
    graph.add_edge(&from, &outsider) == Err(GraphError::MissingVertex(outsider))
        && graph.add_edge(&outsider, &from) == Err(GraphError::MissingVertex(outsider))
        && graph.num_edges() == edges_before
}

#[quickcheck]
fn prop_add_edge_makes_target_a_neighbor(arb: ArbGraph, from: usize, to: usize) -> bool {
    let mut graph = arb.graph;
    let from = pick_vertex(&graph, from);
    let to = pick_vertex(&graph, to);
    graph.add_edge(&from, &to).unwrap();
    graph.neighbors(&from).unwrap().contains(&to)
}
