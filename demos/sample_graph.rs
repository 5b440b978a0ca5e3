//! Builds a small 7-vertex graph and runs every traversal and search
//! operation on it for manual inspection.

use digraph::{DiGraph, GraphError};

fn main() -> Result<(), GraphError<u32>> {
    let mut graph = DiGraph::new();
    for v in 1..=7 {
        graph.add_vertex(v);
    }
    for (from, to) in [
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ] {
        graph.add_edge(&from, &to)?;
    }

    println!(
        "graph: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let bft: Vec<_> = graph.bft(&1)?.collect();
    println!("bft(1)           = {bft:?}");

    let dft: Vec<_> = graph.dft(&1)?.collect();
    println!("dft(1)           = {dft:?}");

    let dft_recursive = graph.dft_recursive(&1)?;
    println!("dft_recursive(1) = {dft_recursive:?}");

    println!("bfs(1, 6)           = {:?}", graph.bfs(&1, &6)?);
    println!("dfs(1, 6)           = {:?}", graph.dfs(&1, &6)?);
    println!("dfs_recursive(1, 6) = {:?}", graph.dfs_recursive(&1, &6)?);

    // 5 only reaches the {3, 5} cycle, so this one comes back None.
    println!("bfs(5, 1)           = {:?}", graph.bfs(&5, &1)?);

    Ok(())
}
