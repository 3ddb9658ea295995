use std::fmt::Debug;
use std::hash::Hash;

use crate::TravelTime;

/// Directed graph with weighted edges.
/// Exposes the structure the routing engine and the graph algorithms run on.
/// At most one edge may exist for each ordered pair of vertices.
pub trait DirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Copy + Ord + Hash;

    /// Gets an iterator over all the vertices of the graph, in registration order.
    fn vertices(&self) -> impl Iterator<Item = Self::VertexId>;

    /// Gets the weight of the edge that goes from `from` to `to`.
    /// Returns None if there is no such edge.
    fn get_edge_weight(&self, from: Self::VertexId, to: Self::VertexId) -> Option<TravelTime>;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the edge end vertex and the edge weight.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, TravelTime)>;

    fn contains_vertex(&self, vertex: Self::VertexId) -> bool {
        self.vertices().any(|v| v == vertex)
    }

    fn has_edge(&self, from: Self::VertexId, to: Self::VertexId) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Returns the number of edges exiting from the vertex.
    fn vertex_out_degree(&self, vertex: Self::VertexId) -> usize {
        self.vertex_exiting_edges(vertex).count()
    }
}

pub mod cycles;
pub mod dijkstra;
pub mod network;
pub mod path;
pub mod view;

#[cfg(test)]
pub mod tests {
    #![allow(clippy::panic)]

    use std::sync::LazyLock;

    use crate::{RouteGraph, StarSystem, create_universe};

    pub static UNIVERSE: LazyLock<RouteGraph<StarSystem>> = LazyLock::new(create_universe);

    /// Builds a graph of integer vertices from `(from, to, weight)` triples.
    pub fn graph_from_edges(edges: &[(u32, u32, f64)]) -> RouteGraph<u32> {
        let mut graph = RouteGraph::new();
        for &(from, to, weight) in edges {
            if let Err(e) = graph.add_edge(from, to, weight.into()) {
                panic!("invalid test graph: {e}");
            }
        }
        graph
    }
}
