use petgraph::graphmap::DiGraphMap;

use crate::{DirectedGraph, TravelTime};

/// Copies the graph into a `petgraph` map so that its algorithms can run on it.
/// Vertices and the outgoing edges of every vertex keep the graph order.
pub fn to_digraph_map<G: DirectedGraph>(graph: &G) -> DiGraphMap<G::VertexId, TravelTime> {
    subgraph_map(graph, |_| true)
}

/// Same as [`to_digraph_map`] but only with the vertices accepted by `keep`, and the edges
/// between them.
pub(crate) fn subgraph_map<G: DirectedGraph>(
    graph: &G,
    keep: impl Fn(G::VertexId) -> bool,
) -> DiGraphMap<G::VertexId, TravelTime> {
    let mut map = DiGraphMap::new();

    for vertex in graph.vertices().filter(|&v| keep(v)) {
        map.add_node(vertex);
    }

    for vertex in graph.vertices().filter(|&v| keep(v)) {
        for (vertex_to, weight) in graph.vertex_exiting_edges(vertex) {
            if keep(vertex_to) {
                map.add_edge(vertex, vertex_to, weight);
            }
        }
    }

    map
}
