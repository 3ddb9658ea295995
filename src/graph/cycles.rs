use petgraph::algo;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::DirectedGraph;
use crate::graph::view::subgraph_map;

/// Returns all the simple cycles of the graph, that is every closed walk that never visits a
/// vertex twice, each exactly once.
///
/// A cycle is returned as the list of its vertices without repeating the first one at the end.
/// The first vertex is the cycle vertex that was registered first in the graph.
pub fn simple_cycles<G: DirectedGraph>(graph: &G) -> Vec<Vec<G::VertexId>> {
    debug!("Computing simple cycles");

    let order: FxHashMap<G::VertexId, usize> = graph
        .vertices()
        .enumerate()
        .map(|(index, vertex)| (vertex, index))
        .collect();

    let mut cycles = vec![];

    for (index, start) in graph.vertices().enumerate() {
        // cycles rooted at start only go through vertices registered after it
        let map = subgraph_map(graph, |v| order.get(&v).is_some_and(|&i| i >= index));

        // a cycle is a simple path from start to one of its predecessors, closed by their edge
        for last in map.nodes().filter(|&v| graph.has_edge(v, start)) {
            if last == start {
                cycles.push(vec![start]);
                continue;
            }

            let paths = algo::all_simple_paths::<Vec<_>, _>(
                &map,
                start,
                last,
                0,
                Some(map.node_count()),
            );
            cycles.extend(paths);
        }
    }

    debug!("Found {} simple cycles", cycles.len());
    cycles
}

/// Turns a cycle into a route that ends where it starts.
pub fn close_cycle<V: Copy>(cycle: &[V]) -> Vec<V> {
    cycle.iter().chain(cycle.first()).copied().collect()
}
