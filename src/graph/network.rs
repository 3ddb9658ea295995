use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{DirectedGraph, GraphError, TravelTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<VertexId> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: TravelTime,
}

/// Adjacency structure of a simple directed weighted graph.
///
/// Vertices and edges keep their registration order, which is also the order in which the
/// outgoing edges of a vertex are visited.
#[derive(Debug, Clone)]
pub struct RouteGraph<VertexId> {
    vertices: Vec<VertexId>,
    edges: Vec<Edge<VertexId>>,
    /// Index into `edges` for each ordered pair of vertices.
    edge_index: FxHashMap<(VertexId, VertexId), usize>,
    /// Indices into `edges` of the edges exiting from each vertex.
    adjacency: FxHashMap<VertexId, Vec<usize>>,
}

impl<VertexId> Default for RouteGraph<VertexId> {
    fn default() -> Self {
        Self {
            vertices: vec![],
            edges: vec![],
            edge_index: FxHashMap::default(),
            adjacency: FxHashMap::default(),
        }
    }
}

impl<VertexId: Debug + Copy + Ord + Hash> RouteGraph<VertexId> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(vertices: impl IntoIterator<Item = VertexId>) -> Self {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Registers the vertex. Registering a vertex twice has no effect.
    /// Returns true only if the vertex was not already part of the graph.
    pub fn add_vertex(&mut self, vertex: VertexId) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }

        self.adjacency.insert(vertex, vec![]);
        self.vertices.push(vertex);
        true
    }

    /// Inserts the directed edge `from -> to` with the given weight.
    /// Vertices that are not yet registered are added to the graph.
    /// Fails if an edge for the same ordered pair already exists, leaving the graph untouched.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: TravelTime,
    ) -> Result<(), GraphError<VertexId>> {
        if self.edge_index.contains_key(&(from, to)) {
            debug!("Rejecting duplicate edge {from:?} -> {to:?}");
            return Err(GraphError::DuplicateEdge(from, to));
        }

        self.add_vertex(from);
        self.add_vertex(to);

        let index = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.edge_index.insert((from, to), index);
        self.adjacency.entry(from).or_default().push(index);

        Ok(())
    }

    pub fn edge_weight(&self, from: VertexId, to: VertexId) -> Option<TravelTime> {
        self.edge_index.get(&(from, to)).map(|&i| self.edges[i].weight)
    }

    /// Gets an iterator over the edges exiting from the vertex, in insertion order.
    pub fn outgoing_edges(&self, vertex: VertexId) -> impl Iterator<Item = Edge<VertexId>> {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flatten()
            .map(|&i| self.edges[i])
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<VertexId>> {
        self.edges.iter().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<VertexId: Debug + Copy + Ord + Hash> DirectedGraph for RouteGraph<VertexId> {
    type VertexId = VertexId;

    fn vertices(&self) -> impl Iterator<Item = Self::VertexId> {
        self.vertices.iter().copied()
    }

    fn get_edge_weight(&self, from: Self::VertexId, to: Self::VertexId) -> Option<TravelTime> {
        self.edge_weight(from, to)
    }

    fn vertex_exiting_edges(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, TravelTime)> {
        self.outgoing_edges(vertex).map(|e| (e.to, e.weight))
    }

    fn contains_vertex(&self, vertex: Self::VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }
}
