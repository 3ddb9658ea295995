use petgraph::algo;
use tracing::debug;

use crate::DirectedGraph;
use crate::graph::view::to_digraph_map;

/// Returns true only if every pair of adjacent vertices of the route is connected by an edge.
pub fn is_route_connected<G: DirectedGraph>(graph: &G, route: &[G::VertexId]) -> bool {
    route
        .windows(2)
        .all(|window| graph.has_edge(window[0], window[1]))
}

/// Returns all the simple paths (paths that never visit a vertex twice) from origin to
/// destination made of at most `max_hops` edges.
///
/// Paths are returned in depth-first order following the outgoing edges in the graph order.
/// If origin and destination are the same vertex the only path is the vertex itself.
pub fn all_simple_paths<G: DirectedGraph>(
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
    max_hops: usize,
) -> Vec<Vec<G::VertexId>> {
    debug!("Computing simple paths {origin:?} -> {destination:?} with at most {max_hops} hops");

    if origin == destination {
        return vec![vec![origin]];
    }

    // every hop but the last one enters an intermediate vertex
    let Some(max_intermediates) = max_hops.checked_sub(1) else {
        return vec![];
    };

    let map = to_digraph_map(graph);
    algo::all_simple_paths::<Vec<_>, _>(&map, origin, destination, 0, Some(max_intermediates))
        .collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::StarSystem::*;
    use crate::graph::tests::{UNIVERSE, graph_from_edges};
    use crate::{RouteGraph, StarSystem};

    #[test]
    fn is_route_connected_001() {
        let graph: &RouteGraph<StarSystem> = &UNIVERSE;

        assert!(is_route_connected(graph, &[]));
        assert!(is_route_connected(graph, &[Vega]));
        assert!(is_route_connected(
            graph,
            &[SolarSystem, Vega, AlphaCentauri, Sirius, Betelgeuse]
        ));
        assert!(!is_route_connected(graph, &[SolarSystem, Vega, Betelgeuse]));
    }

    #[test]
    fn all_simple_paths_001() {
        let graph: &RouteGraph<StarSystem> = &UNIVERSE;

        assert_eq!(
            all_simple_paths(graph, SolarSystem, Sirius, 3),
            [
                vec![SolarSystem, AlphaCentauri, Sirius],
                vec![SolarSystem, Betelgeuse, Sirius],
                vec![SolarSystem, Vega, AlphaCentauri, Sirius],
            ]
        );

        assert_eq!(
            all_simple_paths(graph, SolarSystem, Sirius, 4).len(),
            4,
            "Solar System -> Betelgeuse -> Vega -> Alpha Centauri -> Sirius"
        );
    }

    #[test]
    fn all_simple_paths_002() {
        let graph: &RouteGraph<StarSystem> = &UNIVERSE;

        assert_eq!(all_simple_paths(graph, Sirius, Sirius, 3), [vec![Sirius]]);
        assert!(all_simple_paths(graph, Sirius, SolarSystem, 10).is_empty());
        assert!(all_simple_paths(graph, SolarSystem, Sirius, 1).is_empty());
    }

    #[test]
    fn all_simple_paths_003() {
        // 1 <===> 2 ---> 3
        let graph = graph_from_edges(&[(1, 2, 1.0), (2, 1, 1.0), (2, 3, 1.0)]);

        assert_eq!(all_simple_paths(&graph, 1, 3, 10), [vec![1, 2, 3]]);
        assert_eq!(all_simple_paths(&graph, 2, 1, 0), Vec::<Vec<u32>>::new());
    }
}
